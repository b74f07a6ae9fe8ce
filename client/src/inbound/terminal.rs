//! Terminal rendition of the form surface.
//!
//! Stands in for the rendered page when the controller is driven from the
//! command line: the message region becomes terminal output, the loading
//! affordance becomes a progress line, and the remaining affordances are
//! traced for debugging.

use std::io::{self, Write};
use std::sync::Mutex;

use tracing::debug;

use crate::domain::catalog::{Message, MessageSeverity};
use crate::domain::form::FieldId;
use crate::domain::ports::FormSurface;
use crate::domain::validation::{FieldMarker, ValidationScope};

/// Surface that prints the workflow's visible side effects.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    active_message: Mutex<Option<Message>>,
}

impl TerminalSurface {
    /// Build an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Message currently occupying the message region, if any.
    #[must_use]
    pub fn active_message(&self) -> Option<Message> {
        self.active_message.lock().ok().and_then(|slot| slot.clone())
    }
}

impl FormSurface for TerminalSurface {
    fn set_submit_enabled(&self, enabled: bool) {
        debug!(enabled, "submit control toggled");
    }

    fn set_field_marker(&self, field: FieldId, marker: FieldMarker) {
        debug!(field = %field, ?marker, "field marker toggled");
    }

    fn reveal_validation(&self, scope: ValidationScope) {
        debug!(?scope, "validation affordances revealed");
    }

    fn begin_loading(&self) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "Changing password...");
    }

    fn end_loading(&self) {
        debug!("loading affordance cleared");
    }

    fn show_message(&self, message: &Message) {
        if let Ok(mut slot) = self.active_message.lock() {
            *slot = Some(message.clone());
        }
        match message.severity() {
            MessageSeverity::Success => {
                let mut stdout = io::stdout().lock();
                let _ = writeln!(stdout, "{}", message.text());
            }
            MessageSeverity::Failure => {
                let mut stderr = io::stderr().lock();
                let _ = writeln!(stderr, "{}", message.text());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Message-region replacement semantics.

    use super::TerminalSurface;
    use crate::domain::catalog::{Message, MessageSeverity};
    use crate::domain::ports::FormSurface;

    #[test]
    fn a_new_message_replaces_the_previous_one() {
        let surface = TerminalSurface::new();
        assert_eq!(surface.active_message(), None);

        surface.show_message(&Message::failure("first attempt failed"));
        surface.show_message(&Message::success("second attempt worked"));

        let active = surface.active_message().expect("a message is active");
        assert_eq!(active.severity(), MessageSeverity::Success);
        assert_eq!(active.text(), "second attempt worked");
    }
}
