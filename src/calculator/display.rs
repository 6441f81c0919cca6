//! Display derivation for the two-line calculator screen.

use serde::Serialize;
use std::fmt;

use super::types::Operation;

/// The two strings handed to the output adapter after every intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayFrame {
    /// Upper line: captured left operand plus the pending operator symbol
    pub previous: String,
    /// Lower line: the operand being entered or the last result
    pub current: String,
}

impl DisplayFrame {
    /// Pure function of the calculator fields.
    pub fn derive(current: &str, previous: &str, operation: Option<Operation>) -> Self {
        let previous = match operation {
            Some(op) => format!("{} {}", previous, op.symbol()),
            None => previous.to_string(),
        };

        Self {
            previous,
            current: current.to_string(),
        }
    }
}

impl fmt::Display for DisplayFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.previous)?;
        write!(f, "{}", self.current)
    }
}
