// Recording sink for tests - no terminal output

use crate::calculator::display::DisplayFrame;
use crate::calculator::traits::DisplaySink;
use crate::calculator::types::Alert;

/// Sink event, in the order the session emitted it
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Render(DisplayFrame),
    Alert(Alert),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<&DisplayFrame> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Render(frame) => Some(frame),
                SinkEvent::Alert(_) => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Alert(alert) => Some(*alert),
                SinkEvent::Render(_) => None,
            })
            .collect()
    }

    pub fn last_frame(&self) -> Option<&DisplayFrame> {
        self.frames().into_iter().last()
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, frame: &DisplayFrame) {
        self.events.push(SinkEvent::Render(frame.clone()));
    }

    fn alert(&mut self, alert: Alert) {
        self.events.push(SinkEvent::Alert(alert));
    }
}
