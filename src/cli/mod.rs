// CLI module
// Command-line flags and the terminal console

mod console;

pub use console::{Console, TerminalConsole};

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::locale::Locale;

/// Plancraft - turn a goal into clarifying questions and a step-by-step checklist
#[derive(Debug, Parser)]
#[command(name = "plancraft", version, about)]
pub struct Cli {
    /// Path to config file (default: ~/.plancraft/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// LLM provider to use (openai, gemini)
    #[arg(long)]
    pub provider: Option<String>,

    /// Model name, overriding the provider default
    #[arg(long)]
    pub model: Option<String>,

    /// Directory where plans are written
    #[arg(long, value_name = "DIR")]
    pub plans_dir: Option<PathBuf>,

    /// Session language; skips the language question
    #[arg(long, value_name = "en|es")]
    pub lang: Option<Locale>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flag values that override file and environment configuration
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            provider: self.provider.clone(),
            model: self.model.clone(),
            plans_dir: self.plans_dir.clone(),
        }
    }

    /// Default tracing filter for the requested verbosity; RUST_LOG wins over it
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "plancraft=warn",
            1 => "plancraft=info",
            _ => "plancraft=debug",
        }
    }
}
