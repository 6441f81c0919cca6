use anyhow::Result;
use std::io::Write;

use super::{Command, TerminalSink};
use crate::calculator::CalculatorSession;
use crate::config::PocketCalcConfig;

/// One-shot run: press the keys on a fresh pad, print the final display
pub struct PressCommand {
    pub keys: Vec<String>,
    pub config: PocketCalcConfig,
}

impl PressCommand {
    pub fn new(keys: Vec<String>, config: PocketCalcConfig) -> Self {
        Self { keys, config }
    }

    pub fn run<W: Write>(&self, output: W) -> Result<usize> {
        let mut session = CalculatorSession::new(TerminalSink::new(output, &self.config.display));
        session.open();

        let intents: usize = self.keys.iter().map(|key| session.press(key)).sum();
        tracing::debug!(keys = self.keys.len(), intents, "Keys pressed");

        session.sink_mut().paint()?;
        Ok(intents)
    }
}

impl Command for PressCommand {
    fn execute(&self) -> Result<()> {
        self.run(std::io::stdout().lock())?;
        Ok(())
    }
}
