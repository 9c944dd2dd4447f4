//! Astro Tutor - command-line harness
//!
//! Loads the agent record and runs the lookup tools locally.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use astro_tutor::agent::Agent;
use astro_tutor::cli::{Cli, Commands};
use astro_tutor::commands;
use astro_tutor::config::Config;
use astro_tutor::tools::{DAYS_IN_YEAR_TOOL, PLANET_FACT_TOOL};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_tracing(cli.verbose, cli.json_logs);

    let config = Config::load(&cli.config, &cli)?;
    let agent = Agent::from_config(&config)?;

    let succeeded = match &cli.command {
        Commands::Fact { planet, json } => {
            commands::lookup::run_lookup(&agent, PLANET_FACT_TOOL, planet, *json).await?
        }
        Commands::Year { planet, json } => {
            commands::lookup::run_lookup(&agent, DAYS_IN_YEAR_TOOL, planet, *json).await?
        }
        Commands::Call { tool, args } => commands::lookup::run_call(&agent, tool, args).await?,
        Commands::Manifest { format } => {
            commands::manifest::show_manifest(&agent, *format)?;
            true
        }
        Commands::Planets => {
            commands::planets::list_planets();
            true
        }
    };

    if !succeeded {
        tracing::debug!("Lookup returned an error result");
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose {
        "astro_tutor=debug"
    } else {
        "astro_tutor=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
