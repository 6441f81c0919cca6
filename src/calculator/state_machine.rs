use statig::prelude::*;
use std::cell::Cell;

use super::display::DisplayFrame;
use super::types::{Alert, Intent, Operation};

const ZERO: &str = "0";

/// Result of folding the pending operation into the current operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Computation {
    Done,
    DivideByZero,
    Skipped,
}

/// Calculator context shared by the `ready` and `pending` states.
///
/// `operation` is `Some` exactly while the machine sits in `pending`.
#[derive(Debug)]
pub struct CalculatorStateMachine {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operation>,
    reset_screen: bool,
    alert: Cell<Option<Alert>>,
}

impl Default for CalculatorStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorStateMachine {
    pub fn new() -> Self {
        Self {
            current_operand: ZERO.to_string(),
            previous_operand: String::new(),
            operation: None,
            reset_screen: false,
            alert: Cell::new(None),
        }
    }
}

#[state_machine(initial = "State::ready()")]
impl CalculatorStateMachine {
    #[state]
    fn ready(&mut self, event: &Intent) -> Outcome<State> {
        match event {
            Intent::Operator(op) => {
                if self.current_operand == ZERO {
                    tracing::debug!(operation = %op, "Operator ignored, no operand entered");
                    return Handled;
                }
                self.capture_operand(*op);
                Transition(State::pending())
            }
            Intent::Equals => {
                tracing::debug!("Equals ignored, no pending operation");
                Handled
            }
            Intent::Clear => {
                self.clear();
                Handled
            }
            Intent::Digit(_) | Intent::Decimal | Intent::Delete => self.edit_entry(event),
        }
    }

    #[state]
    fn pending(&mut self, event: &Intent) -> Outcome<State> {
        match event {
            Intent::Operator(op) => {
                if self.current_operand == ZERO {
                    tracing::debug!(operation = %op, "Operator ignored, no operand entered");
                    return Handled;
                }
                // Chain: fold the pending operation first, whatever its outcome
                self.compute();
                self.capture_operand(*op);
                Handled
            }
            Intent::Equals => match self.compute() {
                Computation::Done | Computation::DivideByZero => Transition(State::ready()),
                Computation::Skipped => Handled,
            },
            Intent::Clear => {
                self.clear();
                Transition(State::ready())
            }
            Intent::Digit(_) | Intent::Decimal | Intent::Delete => self.edit_entry(event),
        }
    }
}

impl CalculatorStateMachine {
    /// Entry edits behave the same with or without a pending operation.
    fn edit_entry(&mut self, event: &Intent) -> Outcome<State> {
        match event {
            Intent::Digit(digit) => {
                if self.current_operand == ZERO || self.reset_screen {
                    self.current_operand = digit.as_char().to_string();
                    self.reset_screen = false;
                } else {
                    self.current_operand.push(digit.as_char());
                }
            }
            Intent::Decimal => {
                if self.reset_screen {
                    self.current_operand = "0.".to_string();
                    self.reset_screen = false;
                } else if !self.current_operand.contains('.') {
                    self.current_operand.push('.');
                }
            }
            Intent::Delete => {
                let len = self.current_operand.chars().count();
                if len <= 1 || (len == 2 && self.current_operand.starts_with('-')) {
                    self.current_operand = ZERO.to_string();
                } else {
                    self.current_operand.pop();
                }
            }
            _ => {}
        }
        tracing::debug!(current = %self.current_operand, "Entry updated");
        Handled
    }

    fn capture_operand(&mut self, op: Operation) {
        self.operation = Some(op);
        self.previous_operand = self.current_operand.clone();
        self.reset_screen = true;
        tracing::debug!(
            operation = %op,
            previous = %self.previous_operand,
            "Operation pending"
        );
    }

    fn compute(&mut self) -> Computation {
        let (Some(lhs), Some(rhs)) = (
            parse_operand(&self.previous_operand),
            parse_operand(&self.current_operand),
        ) else {
            tracing::debug!(
                previous = %self.previous_operand,
                current = %self.current_operand,
                "Computation skipped, operand is not a number"
            );
            return Computation::Skipped;
        };
        let Some(op) = self.operation else {
            return Computation::Skipped;
        };

        if op == Operation::Divide && rhs == 0.0 {
            tracing::warn!(dividend = lhs, "Division by zero, resetting calculator");
            self.alert.set(Some(Alert::DivideByZero));
            self.clear();
            return Computation::DivideByZero;
        }

        let result = op.apply(lhs, rhs);
        self.current_operand = format_result(result);
        self.operation = None;
        self.previous_operand.clear();
        tracing::debug!(
            operation = %op,
            lhs,
            rhs,
            result = %self.current_operand,
            "Computed result"
        );
        Computation::Done
    }

    fn clear(&mut self) {
        self.current_operand = ZERO.to_string();
        self.previous_operand.clear();
        self.operation = None;
        self.reset_screen = false;
        tracing::debug!("Calculator cleared");
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn reset_screen(&self) -> bool {
        self.reset_screen
    }

    pub fn is_pending(&self) -> bool {
        self.operation.is_some()
    }

    pub fn is_initial(&self) -> bool {
        self.current_operand == ZERO
            && self.previous_operand.is_empty()
            && self.operation.is_none()
            && !self.reset_screen
    }

    pub fn display(&self) -> DisplayFrame {
        DisplayFrame::derive(&self.current_operand, &self.previous_operand, self.operation)
    }

    /// Drains the alert raised by the last handled intent, if any.
    pub fn take_alert(&self) -> Option<Alert> {
        self.alert.take()
    }
}

/// NaN counts as unparseable so a `NaN` result never feeds another computation.
fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Shortest round-trip form of the double; negative zero shows as "0".
fn format_result(value: f64) -> String {
    if value == 0.0 {
        ZERO.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::types::Digit;

    fn digit(c: char) -> Intent {
        Intent::Digit(Digit::try_from(c).unwrap())
    }

    fn op(op: Operation) -> Intent {
        Intent::Operator(op)
    }

    fn run(intents: &[Intent]) -> StateMachine<CalculatorStateMachine> {
        let mut sm = CalculatorStateMachine::new().state_machine();
        for intent in intents {
            sm.handle(intent);
        }
        sm
    }

    #[test]
    fn test_initial_state() {
        let sm = CalculatorStateMachine::new().state_machine();
        assert!(sm.inner().is_initial());
        assert_eq!(sm.inner().current_operand(), "0");
        assert_eq!(sm.inner().previous_operand(), "");
        assert_eq!(sm.inner().operation(), None);
    }

    #[test]
    fn test_digit_replaces_leading_zero() {
        let sm = run(&[digit('0'), digit('0'), digit('4'), digit('2')]);
        assert_eq!(sm.inner().current_operand(), "42");
    }

    #[test]
    fn test_decimal_guard() {
        let sm = run(&[digit('1'), Intent::Decimal, Intent::Decimal, digit('2')]);
        assert_eq!(sm.inner().current_operand(), "1.2");
    }

    #[test]
    fn test_decimal_on_zero_keeps_zero() {
        let sm = run(&[Intent::Decimal, digit('5')]);
        assert_eq!(sm.inner().current_operand(), "0.5");
    }

    #[test]
    fn test_decimal_after_operator_starts_fresh_operand() {
        let sm = run(&[digit('8'), Intent::Decimal, op(Operation::Add), Intent::Decimal]);
        assert_eq!(sm.inner().current_operand(), "0.");
        assert!(!sm.inner().reset_screen());
        assert_eq!(sm.inner().previous_operand(), "8.");
    }

    #[test]
    fn test_operator_resets_screen() {
        let sm = run(&[digit('7'), op(Operation::Add), digit('3')]);
        assert_eq!(sm.inner().current_operand(), "3");
        assert_eq!(sm.inner().previous_operand(), "7");
        assert_eq!(sm.inner().operation(), Some(Operation::Add));
    }

    #[test]
    fn test_operator_ignored_on_zero() {
        let sm = run(&[op(Operation::Add)]);
        assert!(sm.inner().is_initial());

        // Also ignored while pending when the right operand is "0"
        let sm = run(&[digit('4'), op(Operation::Add), digit('0'), op(Operation::Multiply)]);
        assert_eq!(sm.inner().operation(), Some(Operation::Add));
        assert_eq!(sm.inner().previous_operand(), "4");
    }

    #[test]
    fn test_operator_twice_folds_left_operand() {
        // Right operand still shows the left one, so the fold computes 4 + 4
        let sm = run(&[digit('4'), op(Operation::Add), op(Operation::Multiply)]);
        assert_eq!(sm.inner().current_operand(), "8");
        assert_eq!(sm.inner().previous_operand(), "8");
        assert_eq!(sm.inner().operation(), Some(Operation::Multiply));

        let sm = run(&[digit('4'), op(Operation::Add), digit('1'), op(Operation::Multiply)]);
        assert_eq!(sm.inner().previous_operand(), "5");
        assert_eq!(sm.inner().operation(), Some(Operation::Multiply));
    }

    #[test]
    fn test_chained_operations_fold() {
        let sm = run(&[
            digit('5'),
            op(Operation::Add),
            digit('3'),
            op(Operation::Subtract),
            digit('2'),
            Intent::Equals,
        ]);
        assert_eq!(sm.inner().current_operand(), "6");
        assert_eq!(sm.inner().previous_operand(), "");
        assert_eq!(sm.inner().operation(), None);
    }

    #[test]
    fn test_equals_without_operation_is_noop() {
        let sm = run(&[digit('9'), Intent::Equals]);
        assert_eq!(sm.inner().current_operand(), "9");
        assert!(!sm.inner().is_pending());
    }

    #[test]
    fn test_equals_formats_doubles() {
        let sm = run(&[digit('7'), op(Operation::Divide), digit('2'), Intent::Equals]);
        assert_eq!(sm.inner().current_operand(), "3.5");

        let sm = run(&[
            Intent::Decimal,
            digit('1'),
            op(Operation::Add),
            Intent::Decimal,
            digit('2'),
            Intent::Equals,
        ]);
        assert_eq!(sm.inner().current_operand(), "0.30000000000000004");

        let sm = run(&[digit('2'), op(Operation::Multiply), digit('4'), Intent::Equals]);
        assert_eq!(sm.inner().current_operand(), "8");
    }

    #[test]
    fn test_negative_result_and_delete() {
        let mut sm = run(&[digit('3'), op(Operation::Subtract), digit('8'), Intent::Equals]);
        assert_eq!(sm.inner().current_operand(), "-5");

        sm.handle(&Intent::Delete);
        assert_eq!(sm.inner().current_operand(), "0");
    }

    #[test]
    fn test_subtraction_to_zero_is_plain_zero() {
        let sm = run(&[digit('3'), op(Operation::Subtract), digit('3'), Intent::Equals]);
        assert_eq!(sm.inner().current_operand(), "0");
    }

    #[test]
    fn test_negative_zero_result_is_plain_zero() {
        // -5 * 0 is -0.0 under IEEE arithmetic
        let mut sm = run(&[digit('3'), op(Operation::Subtract), digit('8'), Intent::Equals]);
        sm.handle(&op(Operation::Multiply));
        sm.handle(&digit('0'));
        sm.handle(&Intent::Equals);
        assert_eq!(sm.inner().current_operand(), "0");

        // A following digit replaces the zero instead of appending to it
        sm.handle(&digit('4'));
        assert_eq!(sm.inner().current_operand(), "4");
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-2.5), "-2.5");
        assert_eq!(format_result(8.0), "8");
    }

    #[test]
    fn test_divide_by_zero_alerts_and_clears() {
        let sm = run(&[digit('9'), op(Operation::Divide), digit('0'), Intent::Equals]);
        assert!(sm.inner().is_initial());
        assert_eq!(sm.inner().take_alert(), Some(Alert::DivideByZero));
        assert_eq!(sm.inner().take_alert(), None);
    }

    #[test]
    fn test_divide_by_zero_with_decimal_divisor() {
        let sm = run(&[
            digit('9'),
            op(Operation::Divide),
            Intent::Decimal,
            digit('0'),
            Intent::Equals,
        ]);
        assert!(sm.inner().is_initial());
        assert_eq!(sm.inner().take_alert(), Some(Alert::DivideByZero));
    }

    #[test]
    fn test_divide_by_zero_during_chain_keeps_new_operator() {
        let sm = run(&[
            digit('9'),
            op(Operation::Divide),
            Intent::Decimal,
            op(Operation::Add),
        ]);
        assert_eq!(sm.inner().take_alert(), Some(Alert::DivideByZero));
        assert_eq!(sm.inner().current_operand(), "0");
        assert_eq!(sm.inner().previous_operand(), "0");
        assert_eq!(sm.inner().operation(), Some(Operation::Add));
        assert!(sm.inner().reset_screen());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut sm = run(&[digit('5'), op(Operation::Multiply), digit('6')]);
        sm.handle(&Intent::Clear);
        assert!(sm.inner().is_initial());
        sm.handle(&Intent::Clear);
        assert!(sm.inner().is_initial());

        // Back in `ready`: equals has nothing to do
        sm.handle(&digit('2'));
        sm.handle(&Intent::Equals);
        assert_eq!(sm.inner().current_operand(), "2");
    }

    #[test]
    fn test_clear_resets_screen_flag() {
        let mut sm = run(&[digit('5'), op(Operation::Add)]);
        assert!(sm.inner().reset_screen());
        sm.handle(&Intent::Clear);
        assert!(!sm.inner().reset_screen());
    }

    #[test]
    fn test_delete_reaches_absorbing_zero() {
        let mut sm = run(&[digit('1'), digit('2'), Intent::Decimal, digit('5')]);
        let mut seen = vec![sm.inner().current_operand().to_string()];
        for _ in 0..6 {
            sm.handle(&Intent::Delete);
            seen.push(sm.inner().current_operand().to_string());
        }
        assert_eq!(seen, vec!["12.5", "12.", "12", "1", "0", "0", "0"]);
    }

    #[test]
    fn test_display_tracks_state() {
        let sm = run(&[digit('5'), op(Operation::Multiply)]);
        let frame = sm.inner().display();
        assert_eq!(frame.previous, "5 ×");
        assert_eq!(frame.current, "5");
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand("0."), Some(0.0));
        assert_eq!(parse_operand("-2.5"), Some(-2.5));
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("NaN"), None);
    }
}
