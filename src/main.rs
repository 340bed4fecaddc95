//! Modcache - cache-validation gate for npm installs
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use modcache::cache::{store, validity};
use modcache::cli::{Cli, Commands};
use modcache::error::{ModcacheError, ModcacheResult};
use modcache::layout::Layout;
use modcache::orchestrator;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders usage/help itself; help and version exit 0
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ModcacheResult<ExitCode> {
    // Quiet by default: cache diagnostics are info-level and only show
    // with -v
    let filter = match cli.verbose {
        0 => EnvFilter::new("modcache=warn"),
        1 => EnvFilter::new("modcache=info"),
        _ => EnvFilter::new("modcache=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let layout = match cli.project {
        Some(dir) => Layout::new(dir),
        None => Layout::new(
            std::env::current_dir()
                .map_err(|e| ModcacheError::io("getting current directory", e))?,
        ),
    };

    match cli.command {
        Commands::Check => {
            if validity::is_cache_valid(&layout)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Clear => {
            store::clear(&layout);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Set => {
            store::set_snapshots(&layout)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Install(args) => orchestrator::install(&layout, false, &args.args).await,
        Commands::Reinstall(args) => orchestrator::install(&layout, true, &args.args).await,
    }
}
