// Output adapter seam - the session pushes frames and alerts through it

use super::display::DisplayFrame;
use super::types::Alert;

/// Receives everything the calculator wants shown to the user
pub trait DisplaySink {
    /// Render both display lines; called after every intent
    fn render(&mut self, frame: &DisplayFrame);

    /// Show a user-facing alert; called before the refresh that follows it
    fn alert(&mut self, alert: Alert);
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn render(&mut self, frame: &DisplayFrame) {
        (**self).render(frame);
    }

    fn alert(&mut self, alert: Alert) {
        (**self).alert(alert);
    }
}
