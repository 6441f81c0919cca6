use anyhow::Result;
use clap::Parser;

use pocket_calc::cli::commands::config::ConfigCommand;
use pocket_calc::cli::commands::pad::PadCommand;
use pocket_calc::cli::commands::press::PressCommand;
use pocket_calc::cli::commands::Command;
use pocket_calc::cli::{Cli, Commands};
use pocket_calc::{init_telemetry, PocketCalcConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env first so POCKET_CALC_* variables in it are seen by the loader
    PocketCalcConfig::load_env_file()?;
    let mut config = PocketCalcConfig::load()?;
    cli.apply_overrides(&mut config);

    init_telemetry(&config.observability)?;

    match cli.command {
        // Default behavior: no subcommand opens the interactive pad
        None | Some(Commands::Pad { .. }) => PadCommand::new(config).execute(),
        Some(Commands::Press { keys, .. }) => PressCommand::new(keys, config).execute(),
        Some(Commands::Config { write }) => ConfigCommand::new(config, write).execute(),
    }
}
