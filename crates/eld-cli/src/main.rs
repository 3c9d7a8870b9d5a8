use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use eld_cli::commands::{edit, grid, plan};
use eld_cli::{Cli, Commands, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Some(Commands::Plan {
            pickup,
            dropoff,
            cycle_used,
            start_date,
            json,
        }) => {
            let config =
                Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
            tracing::debug!(?config, "loaded configuration");
            plan::run(
                &mut stdout,
                &config,
                pickup,
                dropoff,
                *cycle_used,
                *start_date,
                *json,
            )
            .await?;
        }
        Some(Commands::Grid {
            day,
            drive,
            on_duty,
            rest,
        }) => {
            grid::run(&mut stdout, *day, *drive, *on_duty, *rest)?;
        }
        Some(Commands::Edit {
            day,
            drive,
            on_duty,
            rest,
            paints,
            json,
        }) => {
            edit::run(&mut stdout, *day, *drive, *on_duty, *rest, paints, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
