//! Command handlers. Each returns the text destined for stdout.

use std::path::{Path, PathBuf};

use vcfkit_core::util::slug::contact_file_name;
use vcfkit_rfc::rfc::vcard::{Contact, ContactFields, generate, parse};

use crate::cli::{Command, GenerateArgs, ListArgs, ShowArgs};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::render;

/// ## Summary
/// Runs one parsed command.
///
/// ## Errors
/// Returns an error if reading or writing a file fails, if the requested
/// contact does not exist, or if the generator fields are invalid.
pub async fn run(ctx: &AppContext, command: Command) -> AppResult<String> {
    match command {
        Command::List(args) => list(ctx, &args).await,
        Command::Show(args) => show(ctx, &args).await,
        Command::Generate(args) => generate_card(ctx, args).await,
    }
}

/// ## Errors
/// Returns an error if the file cannot be read.
#[tracing::instrument(skip(ctx, args), fields(file = %args.file.display()))]
pub async fn list(ctx: &AppContext, args: &ListArgs) -> AppResult<String> {
    let contacts = read_contacts(&args.file).await?;
    render::list(&contacts, ctx, args.json)
}

/// ## Errors
/// Returns an error if the file cannot be read or has no contact at the
/// requested position.
#[tracing::instrument(skip(ctx, args), fields(file = %args.file.display(), index = args.index))]
pub async fn show(ctx: &AppContext, args: &ShowArgs) -> AppResult<String> {
    let contacts = read_contacts(&args.file).await?;

    let contact = usize::try_from(args.index)
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|position| contacts.get(position))
        .ok_or(AppError::ContactNotFound {
            index: args.index,
            count: contacts.len(),
        })?;

    render::show(contact, ctx, args.json)
}

/// ## Summary
/// Validates and serializes the fields, then writes the card to the chosen
/// destination. Returns the card itself for `--stdout`, otherwise a one-line
/// confirmation naming the written file.
///
/// ## Errors
/// Returns an error if validation fails or the file cannot be written.
#[tracing::instrument(skip_all)]
pub async fn generate_card(ctx: &AppContext, args: GenerateArgs) -> AppResult<String> {
    let fields = ContactFields::from(args.fields);
    let card = generate(&fields, ctx.serialize_options())?;

    if args.stdout {
        return Ok(card);
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(contact_file_name(&fields.display_name())));

    tokio::fs::write(&path, card.as_bytes())
        .await
        .map_err(AppError::io(&path))?;

    tracing::info!(path = %path.display(), "vCard written");
    Ok(format!("Wrote {}\n", path.display()))
}

/// Reads and parses a vCard file. Input is UTF-8; a byte order mark is
/// skipped and invalid sequences are replaced.
async fn read_contacts(path: &Path) -> AppResult<Vec<Contact>> {
    let bytes = tokio::fs::read(path).await.map_err(AppError::io(path))?;

    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        tracing::warn!(path = %path.display(), "Input is not valid UTF-8, replaced invalid bytes");
    }

    Ok(parse(&text))
}
