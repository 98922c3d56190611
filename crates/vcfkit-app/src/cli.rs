//! Command-line surface of the `vcfkit` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vcfkit_rfc::rfc::vcard::ContactFields;

#[derive(Parser, Debug)]
#[command(name = "vcfkit", version, about = "Read and write vCard contact files")]
pub struct Cli {
    /// TOML configuration file (defaults to ./vcfkit.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every contact in a vCard file.
    List(ListArgs),
    /// Show every property of one contact.
    Show(ShowArgs),
    /// Build a vCard 3.0 file from field values.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// 1-based position as printed by `list`.
    #[arg(value_name = "INDEX", value_parser = clap::value_parser!(u64).range(1..))]
    pub index: u64,

    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Output path (defaults to `<name>.vcf` in the working directory).
    #[arg(long, short = 'o', value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the card to stdout instead of a file.
    #[arg(long, default_value_t = false)]
    pub stdout: bool,
}

/// One flag per generator field. Omitted flags are empty.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    #[arg(long = "fn", value_name = "NAME")]
    pub formatted_name: Option<String>,
    #[arg(long)]
    pub prefix: Option<String>,
    #[arg(long)]
    pub given: Option<String>,
    #[arg(long)]
    pub middle: Option<String>,
    #[arg(long)]
    pub family: Option<String>,
    #[arg(long)]
    pub suffix: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long, value_name = "TYPE")]
    pub phone_type: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long, value_name = "TYPE")]
    pub email_type: Option<String>,

    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long, value_name = "TYPE")]
    pub address_type: Option<String>,

    #[arg(long = "org", value_name = "ORG")]
    pub organization: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long, value_name = "URL")]
    pub social_profile: Option<String>,
    #[arg(long, value_name = "NETWORK")]
    pub social_network: Option<String>,

    /// YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub birthday: Option<String>,
    /// YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub anniversary: Option<String>,
}

impl From<FieldArgs> for ContactFields {
    fn from(args: FieldArgs) -> Self {
        Self {
            prefix: args.prefix.unwrap_or_default(),
            given: args.given.unwrap_or_default(),
            middle: args.middle.unwrap_or_default(),
            family: args.family.unwrap_or_default(),
            suffix: args.suffix.unwrap_or_default(),
            formatted_name: args.formatted_name.unwrap_or_default(),
            phone: args.phone.unwrap_or_default(),
            phone_type: args.phone_type.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            email_type: args.email_type.unwrap_or_default(),
            street: args.street.unwrap_or_default(),
            city: args.city.unwrap_or_default(),
            region: args.region.unwrap_or_default(),
            postal_code: args.postal_code.unwrap_or_default(),
            country: args.country.unwrap_or_default(),
            address_type: args.address_type.unwrap_or_default(),
            organization: args.organization.unwrap_or_default(),
            title: args.title.unwrap_or_default(),
            note: args.note.unwrap_or_default(),
            url: args.url.unwrap_or_default(),
            social_profile: args.social_profile.unwrap_or_default(),
            social_network: args.social_network.unwrap_or_default(),
            birthday: args.birthday.unwrap_or_default(),
            anniversary: args.anniversary.unwrap_or_default(),
        }
    }
}
