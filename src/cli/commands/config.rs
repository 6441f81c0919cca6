use anyhow::Result;
use std::path::PathBuf;

use super::Command;
use crate::config::PocketCalcConfig;

pub struct ConfigCommand {
    pub config: PocketCalcConfig,
    pub write: Option<PathBuf>,
}

impl ConfigCommand {
    pub fn new(config: PocketCalcConfig, write: Option<PathBuf>) -> Self {
        Self { config, write }
    }

    pub fn render(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.config)?)
    }
}

impl Command for ConfigCommand {
    fn execute(&self) -> Result<()> {
        match &self.write {
            Some(path) => {
                self.config.save_to_file(path)?;
                println!("✅ Configuration written to {}", path.display());
            }
            None => print!("{}", self.render()?),
        }
        Ok(())
    }
}
