// Pocket Calc Library - single-screen calculator core
// This exposes the calculator state machine and its adapters for testing and embedding

pub mod calculator;
pub mod cli;
pub mod config;
pub mod telemetry;

// Re-export key types for easy access
pub use calculator::{
    Alert, CalcError, CalculatorSession, CalculatorStateMachine, Digit, DisplayFrame, DisplaySink,
    Intent, Operation,
};
pub use config::PocketCalcConfig;
pub use telemetry::{create_session_span, generate_session_id, init_telemetry};
