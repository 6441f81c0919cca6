use statig::prelude::*;
use tracing::{debug, info};

use super::display::DisplayFrame;
use super::keymap;
use super::state_machine::CalculatorStateMachine;
use super::traits::DisplaySink;
use super::types::Intent;
use crate::telemetry::{create_session_span, generate_session_id};

/// One calculator pad: the state machine plus the sink it renders to.
///
/// Every intent is handled to completion, alert and refresh included,
/// before the next one is accepted.
pub struct CalculatorSession<S: DisplaySink> {
    id: String,
    machine: StateMachine<CalculatorStateMachine>,
    sink: S,
    span: tracing::Span,
}

impl<S: DisplaySink> CalculatorSession<S> {
    pub fn new(sink: S) -> Self {
        let id = generate_session_id();
        let span = create_session_span(&id);
        span.in_scope(|| info!("Calculator session opened"));

        Self {
            id,
            machine: CalculatorStateMachine::new().state_machine(),
            sink,
            span,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render the initial screen before any input arrives
    pub fn open(&mut self) {
        let frame = self.machine.inner().display();
        self.sink.render(&frame);
    }

    pub fn dispatch(&mut self, intent: Intent) {
        let _guard = self.span.enter();
        debug!(?intent, "Handling intent");

        self.machine.handle(&intent);

        if let Some(alert) = self.machine.inner().take_alert() {
            self.sink.alert(alert);
        }
        let frame = self.machine.inner().display();
        self.sink.render(&frame);
    }

    /// Feed one line of adapter input; returns how many intents it produced
    pub fn press(&mut self, line: &str) -> usize {
        let intents = keymap::intents_for_line(line);
        let count = intents.len();
        for intent in intents {
            self.dispatch(intent);
        }
        count
    }

    pub fn display(&self) -> DisplayFrame {
        self.machine.inner().display()
    }

    pub fn calculator(&self) -> &CalculatorStateMachine {
        self.machine.inner()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
