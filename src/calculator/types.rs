// Core types for the calculator state machine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Not a decimal digit: {0:?}")]
    InvalidDigit(char),
    #[error("Unknown operation '{0}' (expected add, subtract, multiply or divide)")]
    UnknownOperation(String),
}

/// Binary operations the pad can hold pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Symbol shown after the left operand on the previous line
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Button id / intent token for this operation
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Plain IEEE double arithmetic. Division by zero is screened by the caller.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}

/// A single decimal digit '0'..='9'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() {
            Ok(Digit(c))
        } else {
            Err(CalcError::InvalidDigit(c))
        }
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Discrete user intents forwarded by the input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "value", rename_all = "lowercase")]
pub enum Intent {
    Digit(Digit),
    Decimal,
    Operator(Operation),
    Equals,
    Clear,
    Delete,
}

/// User-facing notices raised while handling an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alert {
    DivideByZero,
}

impl Alert {
    pub fn message(self) -> &'static str {
        match self {
            Alert::DivideByZero => "Cannot divide by zero!",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
