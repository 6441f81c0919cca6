use anyhow::Result;
use std::io::Write;

use crate::calculator::{Alert, DisplayFrame, DisplaySink};
use crate::config::DisplayConfig;

pub mod config;
pub mod pad;
pub mod press;

pub trait Command {
    fn execute(&self) -> Result<()>;
}

/// Terminal output adapter.
///
/// Frames are held until [`paint`](TerminalSink::paint) so a line of many
/// keys repaints once; alerts go straight to stderr.
pub struct TerminalSink<W: Write> {
    out: W,
    show_previous_line: bool,
    json: bool,
    latest: Option<DisplayFrame>,
    alerts: usize,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, display: &DisplayConfig) -> Self {
        Self {
            out,
            show_previous_line: display.show_previous_line,
            json: display.json,
            latest: None,
            alerts: 0,
        }
    }

    pub fn paint(&mut self) -> Result<()> {
        let Some(frame) = self.latest.take() else {
            return Ok(());
        };

        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(&frame)?)?;
        } else {
            if self.show_previous_line {
                writeln!(self.out, "{}", frame.previous)?;
            }
            writeln!(self.out, "{}", frame.current)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn alerts_shown(&self) -> usize {
        self.alerts
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn render(&mut self, frame: &DisplayFrame) {
        self.latest = Some(frame.clone());
    }

    fn alert(&mut self, alert: Alert) {
        self.alerts += 1;
        eprintln!("⚠️  {alert}");
    }
}
