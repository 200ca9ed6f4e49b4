mod analyze;
mod quotes;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use milinda_core::TextEncoding;
use tracing_subscriber::EnvFilter;

use crate::quotes::QuotesCommands;

#[derive(Debug, Parser)]
#[command(name = "milinda")]
#[command(about = "Text analysis and quote store utilities")]
struct Cli {
    /// Quote store file (overrides MILINDA_DATABASE_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Count word frequencies and score the sentiment of a text file
    Analyze {
        /// File to analyze (defaults to MILINDA_TEXT_PATH)
        path: Option<PathBuf>,

        /// Encoding of the file: utf-8 or windows-1251
        #[arg(long)]
        encoding: Option<TextEncoding>,

        /// Number of most frequent words to list
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        top: Option<u16>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the quote store
    Quotes {
        #[command(subcommand)]
        command: QuotesCommands,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = milinda_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            path,
            encoding,
            top,
            json,
        } => {
            let options = analyze::AnalyzeOptions {
                path: path.unwrap_or_else(|| config.text_path.clone()),
                encoding: encoding.unwrap_or(config.text_encoding),
                top_n: top.map_or(config.top_words, usize::from),
                json,
            };
            analyze::run_analyze(&options)?;
        }
        Commands::Quotes { command } => {
            let db_path = cli.db.unwrap_or_else(|| config.database_path.clone());
            let pool_config = milinda_db::PoolConfig::from_app_config(&config);
            quotes::run_quotes(&db_path, pool_config, command).await?;
        }
    }

    Ok(())
}
