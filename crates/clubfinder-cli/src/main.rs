mod search;
mod shell;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::search::{OutputFormat, Searcher};

#[derive(Debug, Parser)]
#[command(name = "clubfinder")]
#[command(about = "Find sports clubs near an address")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a single search and print the results
    Search {
        /// Street address, resolved within the configured locality
        address: String,

        /// Keep clubs rated at least this high (inclusive)
        #[arg(long)]
        min_rating: Option<String>,

        /// Keep clubs at most this many kilometres away (inclusive)
        #[arg(long)]
        max_distance: Option<String>,

        /// Output as a plain list or as the JSON map view
        #[arg(long, value_enum, default_value_t = OutputFormat::List)]
        format: OutputFormat,
    },
    /// Interactive search loop; results persist between searches
    Shell,
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = clubfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        env = %config.env,
        locality = %config.locality,
        schema = config.schema_path.as_deref().unwrap_or("built-in"),
        "configuration loaded"
    );

    match cli.command {
        Some(Commands::Search {
            address,
            min_rating,
            max_distance,
            format,
        }) => {
            let searcher = Searcher::from_config(&config)?;
            search::run_search_command(
                &searcher,
                &config,
                &address,
                min_rating.as_deref().unwrap_or_default(),
                max_distance.as_deref().unwrap_or_default(),
                format,
            )
            .await
        }
        Some(Commands::Shell) => {
            let searcher = Searcher::from_config(&config)?;
            shell::run_shell(&searcher, &config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Config) => {
            println!("{config:#?}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("clubfinder: run `clubfinder --help` for usage");
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests;
