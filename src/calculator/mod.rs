// Calculator Module - pocket calculator state machine
//
// The state machine owns all arithmetic state; the session wires it to an
// output sink and the keymap turns raw input into intents.

pub mod display;
pub mod keymap;
pub mod session;
pub mod state_machine;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod mocks;

pub use display::DisplayFrame;
pub use session::CalculatorSession;
pub use state_machine::CalculatorStateMachine;
pub use traits::DisplaySink;
pub use types::{Alert, CalcError, Digit, Intent, Operation};
