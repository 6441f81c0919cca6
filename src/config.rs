use anyhow::Result;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Pocket Calc
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PocketCalcConfig {
    /// Terminal pad settings
    pub display: DisplayConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Prompt printed before each line of interactive input
    pub prompt: String,
    /// Print the upper (previous operand) line
    pub show_previous_line: bool,
    /// Emit frames as JSON lines instead of text
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (overridden by RUST_LOG)
    pub log_level: String,
    /// Structured JSON log lines on stderr
    pub json_logs: bool,
}

impl Default for PocketCalcConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig {
                prompt: "calc> ".to_string(),
                show_previous_line: true,
                json: false,
            },
            observability: ObservabilityConfig {
                log_level: "warn".to_string(),
                json_logs: false,
            },
        }
    }
}

impl PocketCalcConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (pocket-calc.toml, .pocket-calc-rc)
    /// 3. Environment variables (prefixed with POCKET_CALC_)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Same as [`load`](Self::load) but looks for the files in `dir`
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        let toml_path = dir.join("pocket-calc.toml");
        if toml_path.exists() {
            builder = builder.add_source(File::from(toml_path));
        }

        let rc_path = dir.join(".pocket-calc-rc");
        if rc_path.exists() {
            builder = builder.add_source(File::from(rc_path).format(FileFormat::Toml));
        }

        // POCKET_CALC_DISPLAY__PROMPT -> display.prompt
        builder = builder.add_source(
            Environment::with_prefix("POCKET_CALC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
        }
        Ok(())
    }
}
