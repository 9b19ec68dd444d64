use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use holy_word_core::constants::{DEFAULT_HOST, DEFAULT_PORT};
use holy_word_core::env_config::{env_parse_with_default, resolve_dataset_path};
use holy_word_functions::Endpoint;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "holy-word")]
#[command(about = "Bilingual verse of the day: HTTP API server and function handlers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the long-running HTTP server
    Serve {
        /// Port to listen on [env: PORT, default: 3001]
        #[arg(short, long)]
        port: Option<u16>,
        /// Host to bind [env: HOST, default: 0.0.0.0]
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Verse dataset [env: HOLY_WORD_DATASET]
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },
    /// Run one function invocation and print its response envelope
    Invoke {
        /// Function to invoke: verses or daily-verse
        function: Endpoint,
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },
    /// Print the verse of the day
    Today {
        #[arg(short, long)]
        dataset: Option<PathBuf>,
        /// Preview another UTC day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print every verse
    List {
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, dataset } => {
            let port = port.unwrap_or_else(|| env_parse_with_default("PORT", DEFAULT_PORT));
            let host =
                host.unwrap_or_else(|| env_parse_with_default("HOST", DEFAULT_HOST.to_owned()));
            commands::serve::run(&host, port, resolve_dataset_path(dataset.as_deref())).await?;
        },
        Commands::Invoke { function, dataset } => {
            commands::invoke::run(function, &resolve_dataset_path(dataset.as_deref()))?;
        },
        Commands::Today { dataset, date } => {
            commands::verses::run_today(&resolve_dataset_path(dataset.as_deref()), date)?;
        },
        Commands::List { dataset } => {
            commands::verses::run_list(&resolve_dataset_path(dataset.as_deref()))?;
        },
    }

    Ok(())
}
