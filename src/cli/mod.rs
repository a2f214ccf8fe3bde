//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod say;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::cli::say::run_say;
use crate::core::config::data::CONFIG_KEYS;
use crate::core::config::Config;
use crate::core::session::SendOutcome;
use crate::core::transport::HttpTransport;
use crate::ui::chat_loop::run_chat;
use crate::utils::logging::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(name = "portfolio-assistant")]
#[command(version)]
#[command(about = "Chat with Nayan's portfolio assistant from the terminal")]
#[command(
    long_about = "Portfolio Assistant is a terminal chat window for the assistant embedded in \
Nayan's portfolio site. Questions are forwarded to the assistant backend together with a \
profile summary, and replies appear in the transcript.\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  F1-F4             Ask a quick question (before the conversation starts)\n\
  Up/Down/PgUp/PgDn Scroll through chat history\n\
  Ctrl+L            Clear the chat\n\
  Ctrl+P            Return to professional mode\n\
  Esc/Ctrl+C        Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Assistant backend origin, overriding the configured endpoint
    #[arg(short = 'e', long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write diagnostics to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Include debug diagnostics
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the chat window (default)
    Chat,
    /// Ask a single question and print the answer
    Say {
        /// Question to ask (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Set configuration values, or print them when no key is given
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key
        value: Option<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

/// Result of applying a `set` command to a configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum SetOutcome {
    Updated(String),
    PrintAll,
}

pub fn apply_set(
    config: &mut Config,
    key: Option<&str>,
    value: Option<&str>,
) -> Result<SetOutcome, String> {
    match (key, value) {
        (None, _) => Ok(SetOutcome::PrintAll),
        (Some("endpoint"), Some(value)) => {
            config.set_endpoint(value)?;
            Ok(SetOutcome::Updated(format!(
                "Set endpoint to: {}",
                value.trim()
            )))
        }
        (Some("endpoint"), None) => Ok(SetOutcome::PrintAll),
        (Some(other), _) => Err(unknown_key(other)),
    }
}

pub fn apply_unset(config: &mut Config, key: &str) -> Result<String, String> {
    match key {
        "endpoint" => {
            config.unset_endpoint();
            Ok("Unset endpoint".to_string())
        }
        other => Err(unknown_key(other)),
    }
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: {key} (known keys: {})",
        CONFIG_KEYS.join(", ")
    )
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Chat);

    let default_target = match command {
        Commands::Chat => LogTarget::Silent,
        _ => LogTarget::Stderr,
    };
    init_tracing(
        &LogTarget::from_option(args.log.as_deref(), default_target),
        args.verbose,
    )?;

    match command {
        Commands::Chat => {
            let config = load_config_or_exit();
            let endpoint = config.resolve_endpoint(args.endpoint.as_deref());
            tracing::info!(%endpoint, "starting chat window");
            run_chat(Arc::new(HttpTransport::new(&endpoint)?)).await
        }
        Commands::Say { prompt } => {
            let config = load_config_or_exit();
            let endpoint = config.resolve_endpoint(args.endpoint.as_deref());
            let transport = HttpTransport::new(&endpoint)?;
            let mut stdout = std::io::stdout();
            match run_say(&prompt, &transport, &mut stdout).await {
                Ok(SendOutcome::Failed) => std::process::exit(1),
                Ok(_) => Ok(()),
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(2);
                }
            }
        }
        Commands::Set { key, value } => {
            let mut config = load_config_or_exit();
            match apply_set(&mut config, key.as_deref(), value.as_deref()) {
                Ok(SetOutcome::Updated(message)) => {
                    config.save()?;
                    println!("✅ {message}");
                }
                Ok(SetOutcome::PrintAll) => config.print_all(),
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = load_config_or_exit();
            match apply_unset(&mut config, &key) {
                Ok(message) => {
                    config.save()?;
                    println!("✅ {message}");
                }
                Err(e) => {
                    eprintln!("❌ {e}");
                    std::process::exit(1);
                }
            }
            Ok(())
        }
    }
}

fn load_config_or_exit() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}
