use clap::Parser;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vcfkit_app::cli::Cli;
use vcfkit_app::commands;
use vcfkit_app::context::AppContext;
use vcfkit_core::config::load_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config(cli.config.as_deref())?;

    let level = std::env::var(EnvFilter::DEFAULT_ENV)
        .unwrap_or_else(|_| config.logging.level.clone());
    if let Ok(filter) = EnvFilter::try_new(level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %level, "Invalid log level in config, keeping warn");
    }

    let ctx = AppContext::new(config);
    let output = commands::run(&ctx, cli.command).await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;

    Ok(())
}
