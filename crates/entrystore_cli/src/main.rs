//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire configuration, logging, database bootstrap and `EntryStore`.
//! - Print results as JSON so runs are easy to diff.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use entrystore_core::{
    default_log_level, init_logging, open_db, open_db_in_memory, EntryId, EntryStore,
    NewDataEntry, SqliteEntryRepository,
};
use rusqlite::Connection;
use std::path::PathBuf;
use std::process::ExitCode;

/// Store and read back query/image-link entries.
#[derive(Parser, Debug)]
#[command(name = "entrystore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// SQLite database file; an in-memory database is used when omitted
    #[arg(long, global = true, env = "ENTRYSTORE_DB")]
    db: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "ENTRYSTORE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long, global = true, env = "ENTRYSTORE_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print core health probe and version
    Ping,

    /// Create an entry and print the stored row
    Create {
        /// Free-text label for the entry
        #[arg(short, long)]
        description: String,

        /// Query/image-link pair as QUERY=URL (repeatable, order kept)
        #[arg(short, long = "pair", value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
    },

    /// Print one entry with decoded queries and image links
    Get {
        id: EntryId,
    },

    /// Print the image items of one entry
    Items {
        id: EntryId,
    },
}

fn parse_pair(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(query, url)| (query.to_string(), url.to_string()))
        .ok_or_else(|| format!("expected QUERY=URL, got `{value}`"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let output = match cli.command {
        Command::Ping => ping_report(),
        command => {
            let mut conn = open_connection(cli.db.as_ref())?;
            let mut store = EntryStore::new(SqliteEntryRepository::new(&mut conn));
            execute(&mut store, command)?
        }
    };
    println!("{output}");

    Ok(())
}

fn execute(
    store: &mut EntryStore<SqliteEntryRepository<'_>>,
    command: Command,
) -> anyhow::Result<String> {
    let output = match command {
        Command::Ping => ping_report(),
        Command::Create { description, pairs } => {
            let request = NewDataEntry {
                description,
                data: pairs,
            };
            serde_json::to_string_pretty(&store.create_entry(&request)?)?
        }
        Command::Get { id } => serde_json::to_string_pretty(&store.get_entry(id)?)?,
        Command::Items { id } => serde_json::to_string_pretty(&store.get_image_items(id)?)?,
    };
    Ok(output)
}

fn ping_report() -> String {
    format!(
        "entrystore_core ping={}\nentrystore_core version={}",
        entrystore_core::ping(),
        entrystore_core::core_version()
    )
}

fn open_connection(path: Option<&PathBuf>) -> anyhow::Result<Connection> {
    let conn = match path {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open database `{}`", path.display()))?,
        None => open_db_in_memory().context("failed to open in-memory database")?,
    };
    Ok(conn)
}
