//! Quote store command handlers for the CLI.
//!
//! Each command opens the store, does its work, and closes the store
//! before returning, including on the error path.

use std::path::Path;

use clap::Subcommand;
use milinda_core::QuoteEntry;
use milinda_db::PoolConfig;
use sqlx::SqlitePool;

/// Sub-commands available under `quotes`.
#[derive(Debug, Subcommand)]
pub enum QuotesCommands {
    /// Create the authors and quotes tables if they are missing
    Init,
    /// Add a quote, creating its author on first use
    Add {
        /// Author the quote is attributed to (exact, case-sensitive)
        #[arg(long)]
        author: String,

        /// Quote text
        content: String,
    },
    /// Print every stored quote with its author
    List {
        /// Print the quotes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Initialize the store, add the sample dialogue, and list everything
    Demo,
}

/// Sample dialogue loaded by `quotes demo`.
pub(crate) const DEMO_QUOTES: &[(&str, &str)] = &[
    (
        "Нагасена",
        "Как из совокупности осей, колес, кузова и дышла возникает название «колесница», \
         так и из совокупности телесных и духовных свойств возникает общеупотребимое \
         название «человек».",
    ),
    ("Милинда", "Почтенный Нагасена, что перерождается?"),
    ("Нагасена", "Государь, перерождаются имя-и-форма (нама-рупа)."),
];

/// Open the store at `db_path`, run `command`, and close the store.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the command fails.
pub(crate) async fn run_quotes(
    db_path: &Path,
    pool_config: PoolConfig,
    command: QuotesCommands,
) -> anyhow::Result<()> {
    let pool = milinda_db::connect(db_path, pool_config).await?;
    let result = dispatch(&pool, command).await;
    milinda_db::close(pool).await;
    result
}

async fn dispatch(pool: &SqlitePool, command: QuotesCommands) -> anyhow::Result<()> {
    match command {
        QuotesCommands::Init => {
            milinda_db::create_schema(pool).await?;
            println!("quote store ready");
        }
        QuotesCommands::Add { author, content } => {
            milinda_db::create_schema(pool).await?;
            let id = milinda_db::add_quote(pool, &author, &content).await?;
            println!("added quote {id}");
        }
        QuotesCommands::List { json } => {
            milinda_db::create_schema(pool).await?;
            let entries = milinda_db::get_all_quotes(pool).await?;
            print!("{}", format_entries(&entries, json)?);
        }
        QuotesCommands::Demo => {
            let added = seed_demo(pool).await?;
            println!("added {added} quotes");
            println!();
            println!("--- All quotes ---");
            let entries = milinda_db::get_all_quotes(pool).await?;
            print!("{}", format_entries(&entries, false)?);
        }
    }
    Ok(())
}

/// Create the schema and insert [`DEMO_QUOTES`]. Returns how many were added.
pub(crate) async fn seed_demo(pool: &SqlitePool) -> anyhow::Result<usize> {
    milinda_db::create_schema(pool).await?;
    for (author, content) in DEMO_QUOTES {
        let id = milinda_db::add_quote(pool, author, content).await?;
        tracing::debug!(id, author, "demo quote added");
    }
    Ok(DEMO_QUOTES.len())
}

pub(crate) fn format_entries(entries: &[QuoteEntry], json: bool) -> anyhow::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(entries)?;
        out.push('\n');
        return Ok(out);
    }

    if entries.is_empty() {
        return Ok("no quotes stored\n".to_string());
    }

    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    Ok(out)
}
