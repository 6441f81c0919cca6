use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PocketCalcConfig;

pub mod commands;

#[derive(Parser)]
#[command(name = "pocket-calc")]
#[command(about = "Single-screen pocket calculator for the terminal")]
#[command(long_about = "Pocket Calc is a one-pending-operation calculator driven by key presses. \
                       Type keys such as '12+3=' or pad button names such as '7 multiply 6 equals'; \
                       run without a subcommand to open the interactive pad.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level for diagnostics on stderr (RUST_LOG wins when set)
    #[arg(long, global = true, help = "Override observability.log_level")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true, help = "Override observability.json_logs")]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive pad (default when no subcommand is given)
    Pad {
        /// Hide the upper line showing the pending operand and operator
        #[arg(long, help = "Only print the current entry line")]
        no_previous_line: bool,
    },
    /// Press a sequence of keys on a fresh pad and print the final display
    Press {
        /// Keys, key names (Enter, Backspace, Escape) or button ids (add, equals, ...)
        #[arg(required = true)]
        keys: Vec<String>,
        /// Print the display as a JSON object
        #[arg(long, help = "Print the final display frame as JSON")]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to a TOML file
        #[arg(long, value_name = "PATH", help = "Save the effective configuration as TOML")]
        write: Option<PathBuf>,
    },
}

impl Cli {
    /// Command-line flags take precedence over every configuration source
    pub fn apply_overrides(&self, config: &mut PocketCalcConfig) {
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.json_logs {
            config.observability.json_logs = true;
        }
        match &self.command {
            Some(Commands::Pad { no_previous_line: true }) => {
                config.display.show_previous_line = false;
            }
            Some(Commands::Press { json: true, .. }) => {
                config.display.json = true;
            }
            _ => {}
        }
    }
}
