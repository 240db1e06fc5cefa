//! ds-users
//!
//! Inspect the example user directory from a shell.

use std::io::{self, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use ds_core::config::AppConfig;
use ds_core::sendlog::{sink_from_config, LogSink};
use ds_core::telemetry::init_tracing;
use ds_core::MemoryLogSink;
use ds_users::UserDirectory;

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Keep lookup log entries in memory instead of the configured sink
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every example user
    List,
    /// Show one user; unknown ids resolve to the default user
    Show {
        /// User id, e.g. uid-2
        id: Option<String>,
    },
    /// List contacts other than the given user
    Others {
        /// User id to leave out
        #[arg(long, short = 'x')]
        exclude: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}, using defaults", e);
        AppConfig::default()
    });
    init_tracing(&config.logging);
    debug!(?config, "Loaded configuration");

    let sink: Arc<dyn LogSink> = if cli.dry_run {
        Arc::new(MemoryLogSink::new())
    } else {
        sink_from_config(&config.logging)
    };
    let directory = UserDirectory::new(sink);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &directory, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run<W: Write>(cli: &Cli, directory: &UserDirectory, out: &mut W) -> anyhow::Result<()> {
    match &cli.command {
        Command::List => {
            let users = directory.list_all();
            if cli.json {
                render::json(out, users)
            } else {
                render::user_list(out, users)
            }
        }
        Command::Show { id } => {
            let lookup = directory.lookup(id.as_deref());
            if !lookup.is_found() {
                warn!(requested = ?id, "Unknown user id, showing default user");
            }
            if cli.json {
                render::json(out, lookup.record())
            } else {
                render::user_detail(out, lookup)
            }
        }
        Command::Others { exclude } => {
            let others = directory.list_others(exclude.as_deref());
            if cli.json {
                render::json(out, &others)
            } else {
                render::summaries(out, &others)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_args(args: &[&str]) -> (String, Arc<MemoryLogSink>) {
        let cli = Cli::try_parse_from(args).unwrap();
        let sink = Arc::new(MemoryLogSink::new());
        let directory = UserDirectory::new(sink.clone());
        let mut out = Vec::new();
        run(&cli, &directory, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), sink)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_json() {
        let (text, sink) = run_args(&["ds-users", "list", "--json"]);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 4);
        assert_eq!(value[3]["id"], "uid-0");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_show_logs_lookup() {
        let (text, sink) = run_args(&["ds-users", "show", "uid-2"]);
        assert!(text.contains("Mark Pottato"));
        assert_eq!(sink.entries()[0].message, "User uid-2");
        assert_eq!(sink.entries()[0].destination, "common.log");
    }

    #[test]
    fn test_show_without_id_uses_default() {
        let (text, sink) = run_args(&["ds-users", "--json", "show"]);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["id"], "uid-1");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_others_exclude() {
        let (text, _) = run_args(&["ds-users", "others", "-x", "uid-2"]);
        let ids: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(ids, ["uid-1", "uid-3"]);
    }
}
