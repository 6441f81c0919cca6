use anyhow::Result;
use std::io::{BufRead, IsTerminal, Write};
use tracing::info;

use super::{Command, TerminalSink};
use crate::calculator::CalculatorSession;
use crate::config::PocketCalcConfig;

const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

pub struct PadCommand {
    pub config: PocketCalcConfig,
}

/// What happened during one pad run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PadSummary {
    pub lines: usize,
    pub intents: usize,
    pub alerts: usize,
}

impl PadCommand {
    pub fn new(config: PocketCalcConfig) -> Self {
        Self { config }
    }

    /// Drive a session from `input` until EOF or a quit word.
    ///
    /// The prompt and greeting are only written when `interactive` is set so
    /// piped runs print nothing but display lines.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
        interactive: bool,
    ) -> Result<PadSummary> {
        let mut session = CalculatorSession::new(TerminalSink::new(output, &self.config.display));
        let mut summary = PadSummary::default();

        if interactive {
            let out = session_writer(&mut session);
            writeln!(out, "🧮 Pocket Calc - keys like 12+3= or buttons like 'add', 'equals'; 'quit' to leave")?;
        }
        session.open();
        session_paint(&mut session)?;

        let mut lines = input.lines();
        loop {
            if interactive {
                let out = session_writer(&mut session);
                write!(out, "{}", self.config.display.prompt)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let mut tokens = line.split_whitespace().peekable();
            if tokens.peek().is_none() {
                continue;
            }

            summary.lines += 1;
            let mut quit = false;
            for token in tokens {
                if is_quit_word(token) {
                    quit = true;
                    break;
                }
                summary.intents += session.press(token);
            }
            session_paint(&mut session)?;
            if quit {
                break;
            }
        }

        summary.alerts = session.sink().alerts_shown();
        info!(
            session_id = %session.id(),
            lines = summary.lines,
            intents = summary.intents,
            alerts = summary.alerts,
            "Pad closed"
        );
        Ok(summary)
    }
}

impl Command for PadCommand {
    fn execute(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let interactive = stdin.is_terminal();
        self.run(stdin.lock(), std::io::stdout().lock(), interactive)?;
        if interactive {
            println!();
        }
        Ok(())
    }
}

fn is_quit_word(token: &str) -> bool {
    QUIT_WORDS.contains(&token.to_ascii_lowercase().as_str())
}

fn session_writer<W: Write>(session: &mut CalculatorSession<TerminalSink<W>>) -> &mut W {
    session.sink_mut().writer_mut()
}

fn session_paint<W: Write>(session: &mut CalculatorSession<TerminalSink<W>>) -> Result<()> {
    session.sink_mut().paint()
}
