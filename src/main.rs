//! # Main Entry Point
//!
//! Runs the `/points` command tree against a terminal, standing in for the game server:
//! - Load configuration (`data/config.yaml` unless `--config` is given)
//! - Install logging (stderr, `data/session.log`, in-memory buffer)
//! - Build the command tree and read command lines from stdin
//!

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use pointcmd::application::context::PluginContext;
use pointcmd::application::plugin::PluginCommand;
use pointcmd::domain::config::AppConfig;
use pointcmd::domain::paths;
use pointcmd::infrastructure::console::{self, ConsoleLine, ConsoleSender, MetaCommand};
use pointcmd::infrastructure::locale::LocaleMessenger;
use pointcmd::infrastructure::log_buffer::LogBuffer;
use pointcmd::infrastructure::logging;
use pointcmd::interface::commands::{self, hooks::RootHooks};

#[derive(Parser, Debug)]
#[command(name = "pointcmd", version, about = "Interactive console for the /points command tree")]
struct Cli {
    /// Config file (defaults to data/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sender to act as; must be `console` or a name under `senders:` in the config
    #[arg(short, long, default_value = console::CONSOLE_NAME)]
    sender: String,

    /// Directory for the session log
    #[arg(long, default_value = paths::DATA_DIR)]
    data_dir: PathBuf,

    /// Print log lines to stderr as well as the session log
    #[arg(short, long)]
    verbose: bool,

    /// Disable ANSI colours in command output
    #[arg(long)]
    no_color: bool,
}

const CONSOLE_HELP: &str = concat!(
    "Type a command line, e.g. `/points help`.\n",
    "Start a line with `?` (or end it with a tab) to list completions instead.\n",
    ":logs [n]  show the last n log lines\n",
    ":help      show this text\n",
    ":quit      exit"
);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Logging Setup
    let log_buffer = LogBuffer::default();
    let _guard = logging::init(&cli.data_dir, &log_buffer, cli.verbose)?;

    // 2. Load Configuration
    let config_path = paths::resolve_config(cli.config.clone());
    let config = AppConfig::load_or_default(&config_path)?;

    // 3. Build the command tree
    let locale = Arc::new(LocaleMessenger::new(&config.messages));
    let context = PluginContext::new(config.plugin.clone(), locale.clone());
    let mut root = commands::build_root(
        &config.commands.name,
        RootHooks::new(),
        locale,
        config_path.clone(),
    );
    commands::apply_disabled(&mut root, &config.commands.disabled);
    let plugin = PluginCommand::new(context, root);

    let sender = ConsoleSender::from_config(&config, &cli.sender)?.with_ansi(!cli.no_color);
    tracing::info!(
        "Starting {} v{} as '{}'",
        config.plugin.name,
        config.plugin.version,
        cli.sender
    );

    // 4. Event Loop
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let Some(parsed) = console::parse_line(&line) else {
            continue;
        };

        match parsed {
            ConsoleLine::Meta(MetaCommand::Quit) => break,
            ConsoleLine::Meta(MetaCommand::Help) => println!("{CONSOLE_HELP}"),
            ConsoleLine::Meta(MetaCommand::Logs(n)) => {
                for entry in log_buffer.recent(n) {
                    println!("[{}] {:5} {}", entry.timestamp, entry.level, entry.message);
                }
            }
            ConsoleLine::Meta(MetaCommand::Unknown(other)) => {
                println!("Unknown console command ':{other}'. Try :help");
            }
            ConsoleLine::Command { label, args } => {
                if !config.commands.matches(&label) {
                    println!("Unknown command. Type :help for help.");
                    continue;
                }
                plugin.on_command(&sender, &config.commands.name, &label, &args);
            }
            ConsoleLine::Complete { label, args } => {
                if !config.commands.matches(&label) {
                    continue;
                }
                let suggestions =
                    plugin.on_tab_complete(&sender, &config.commands.name, &label, &args);
                if suggestions.is_empty() {
                    println!("(no suggestions)");
                } else {
                    println!("{}", suggestions.join("  "));
                }
            }
        }
    }

    tracing::info!("Console closed");
    Ok(())
}
