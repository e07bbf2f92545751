use clap::Parser;
use scent_core::{config::Config, session::PrivateGate, SessionConfig};
use scent_sources::{CatalogState, FileSource, StdinSource};
use scentfind::headless::{self, HeadlessOptions, OutputFormat};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(name = "scentfind", about = "Fragrance Finder — search a fragrance catalog")]
struct Cli {
    /// Catalog JSON file; `-` reads it from stdin. Defaults to `catalog.path`
    /// from the config file.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write debug logs to scentfind-debug.log in the temp dir.
    #[arg(long)]
    debug: bool,

    /// Run one search and print the result instead of opening the TUI.
    #[arg(long)]
    query: Option<String>,

    /// Only fragrances marked as owned.
    #[arg(long)]
    owned: bool,

    /// Only dupes (inspired expressions).
    #[arg(long)]
    dupes: bool,

    /// Unlock private mode for this session.
    #[arg(long)]
    private_code: Option<String>,

    /// Output format for headless mode.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("scentfind-debug.log");
        let file = std::fs::OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %path.display(), "scentfind debug log started");
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config: falling back to defaults");
        Config::defaults()
    });

    let catalog_path = cli.catalog.clone().unwrap_or_else(|| config.catalog.path.clone());
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let catalog_state = runtime.block_on(async {
        if catalog_path.as_os_str() == "-" {
            scent_sources::load(&StdinSource).await
        } else {
            scent_sources::load(&FileSource::new(&catalog_path)).await
        }
    });

    let mut session = SessionConfig::default();
    if let Some(code) = &cli.private_code {
        let gate = PrivateGate::new(config.private.code.clone());
        if !gate.unlock(&mut session, code) {
            eprintln!("Incorrect code.");
        }
    }

    match cli.query {
        Some(query) => {
            if let CatalogState::Failed { message, detail } = &catalog_state {
                eprintln!("{message}");
                eprintln!("{detail}");
                return Ok(ExitCode::FAILURE);
            }
            let options = HeadlessOptions {
                query,
                owned_only: cli.owned,
                dupes_only: cli.dupes,
                format: cli.format,
                banner_cap: config.search.max_banner_labels,
                notes_cap: config.search.matched_notes_cap,
            };
            println!("{}", headless::render(catalog_state.catalog(), &options, session)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let query = scent_tui::widgets::query_bar::QueryBarState {
                owned_only: cli.owned,
                dupes_only: cli.dupes,
                ..Default::default()
            };
            scent_tui::run(catalog_state, config, session, query)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
