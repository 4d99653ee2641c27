mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use travel_recs_core::constants::{DEFAULT_DATA_PATH, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "travel-recs")]
#[command(about = "Travel recommendation lookup service", long_about = None)]
struct Cli {
    /// Destination dataset (CSV, ISO-8859-1)
    #[arg(long, global = true, env = "TRAVEL_RECS_DATA", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web UI and JSON API
    Serve {
        #[arg(short, long, env = "TRAVEL_RECS_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, env = "TRAVEL_RECS_HOST", default_value = DEFAULT_HOST)]
        host: String,
    },
    /// Print the recommendation for one destination
    Lookup {
        destination: String,
        #[arg(short = 'n', long, default_value = "1")]
        people: String,
    },
    /// List known destinations
    Destinations,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(&cli.data, port, host).await,
        Commands::Lookup { destination, people } => {
            commands::lookup::run(&cli.data, &destination, &people)
        },
        Commands::Destinations => commands::lookup::list_destinations(&cli.data),
    }
}
