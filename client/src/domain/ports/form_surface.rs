//! Driven port standing in for the rendered form.
//!
//! Every visual side effect of the workflow goes through this trait: gate
//! state, valid/invalid markers, validated-subtree visibility, the loading
//! affordance, and the message region. The controller stays testable
//! without any rendered page behind it.

use crate::domain::catalog::Message;
use crate::domain::form::FieldId;
use crate::domain::validation::{FieldMarker, ValidationScope};

/// Surface the controller renders the form state onto.
#[cfg_attr(test, mockall::automock)]
pub trait FormSurface: Send + Sync {
    /// Enable or disable the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Toggle the valid/invalid marker on one field.
    fn set_field_marker(&self, field: FieldId, marker: FieldMarker);

    /// Make validation affordances visible for `scope`.
    fn reveal_validation(&self, scope: ValidationScope);

    /// Show the loading affordance for an in-flight submission.
    fn begin_loading(&self);

    /// Clear the loading affordance.
    fn end_loading(&self);

    /// Replace the message region's content.
    ///
    /// Exactly one message is active at a time; implementations must not
    /// leave a previous message visible, and should reveal the new one
    /// (the original page scrolls it into view).
    fn show_message(&self, message: &Message);
}

/// Fixture surface that ignores every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFormSurface;

impl FormSurface for NullFormSurface {
    fn set_submit_enabled(&self, _enabled: bool) {}

    fn set_field_marker(&self, _field: FieldId, _marker: FieldMarker) {}

    fn reveal_validation(&self, _scope: ValidationScope) {}

    fn begin_loading(&self) {}

    fn end_loading(&self) {}

    fn show_message(&self, _message: &Message) {}
}
