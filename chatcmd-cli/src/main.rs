//! chatcmd CLI: terminal front end for the chatcmd command layer.
//!
//! Classifies chat text the way a channel adapter would, renders help menus,
//! and checks Slack slash command matching against the loaded configuration.

mod commands;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// chatcmd: text command recognition for chat channels
#[derive(Parser, Debug)]
#[command(name = "chatcmd", version, about, long_about = None)]
struct Cli {
    /// Workspace directory (reads `.chatcmd/config.toml`)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Commands {
    /// Classify a message as help, a command, or plain text
    Classify {
        /// Message text (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the command help menu
    Help {
        /// Flat list without group headers
        #[arg(long)]
        flat: bool,
        /// Hide the canonical `/key` after each name
        #[arg(long)]
        no_keys: bool,
        /// Only include these groups (repeatable)
        #[arg(short, long = "group")]
        groups: Vec<String>,
        /// Display locale: zh or en
        #[arg(short, long)]
        locale: Option<String>,
        /// Prefix shown before canonical keys
        #[arg(long)]
        prefix: Option<String>,
        /// Print the short welcome hint instead of the menu
        #[arg(long)]
        hint: bool,
    },
    /// Resolve alias phrases to canonical keys
    Alias {
        /// Phrases to resolve
        text: Vec<String>,
        /// List every alias in the index
        #[arg(long)]
        list: bool,
    },
    /// Run a Slack message through mention stripping and the slash matcher
    Slack {
        /// Raw Slack message text (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Override the configured slash command name
        #[arg(long)]
        name: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum ConfigAction {
    /// Write a default `.chatcmd/config.toml` in the workspace
    Init,
    /// Print the effective configuration
    Show,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    // RUST_LOG takes precedence over the verbosity flags.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    let workspace = cli
        .workspace
        .canonicalize()
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let output = commands::handle_command(cli.command, &workspace)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
