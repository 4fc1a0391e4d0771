use std::{io::IsTerminal, path::PathBuf};

use anyhow::{Context, Result};
use catalog_core::{pump_updates, CatalogController, HttpProductSource, LoadOutcome};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod ui;

use config::{load_settings, normalize_catalog_url};
use controller::{
    commands::{parse_command, CommandError, HELP_TEXT},
    orchestration::{dispatch_command, DispatchOutcome},
};
use ui::TerminalView;

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Browse a remote product catalog from the terminal")]
struct Args {
    /// Config file; defaults to ./storefront.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    catalog_url: Option<String>,
    #[arg(long)]
    search_delay_ms: Option<u64>,
    /// Abort a pending search when a new one is typed.
    #[arg(long)]
    cancel_superseded_searches: bool,
    /// Start in dark mode.
    #[arg(long)]
    dark: bool,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(url) = args.catalog_url {
        settings.catalog_url = normalize_catalog_url(&url);
    }
    if let Some(delay) = args.search_delay_ms {
        settings.search_delay_ms = delay;
    }
    settings.cancel_superseded_searches |= args.cancel_superseded_searches;
    settings.start_dark |= args.dark;
    info!(
        catalog_url = %settings.catalog_url,
        search_delay_ms = settings.search_delay_ms,
        cancel_superseded_searches = settings.cancel_superseded_searches,
        "starting storefront"
    );

    let source = HttpProductSource::new(&settings.catalog_url)
        .with_context(|| format!("invalid catalog url '{}'", settings.catalog_url))?;
    let (mut controller, mut updates) =
        CatalogController::with_search_options(source, settings.search_options());

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let render_task = tokio::spawn(async move {
        let mut view = TerminalView::new(stdout, color);
        pump_updates(&mut updates, &mut view).await;
    });

    match controller.load().await {
        LoadOutcome::Loaded {
            products,
            categories,
        } => info!(products, categories, "catalog ready"),
        LoadOutcome::Failed(err) => warn!("catalog unavailable until restart: {err}"),
    }
    if settings.start_dark {
        controller.on_toggle_theme();
    }
    println!("{HELP_TEXT}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match dispatch_command(&mut controller, cmd) {
            DispatchOutcome::Handled => {}
            DispatchOutcome::Message(message) => println!("{message}"),
            DispatchOutcome::Quit => break,
        }
    }

    drop(controller);
    render_task.await.context("render task failed")?;
    Ok(())
}
