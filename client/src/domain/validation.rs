//! Field validation and affordance scoping.
//!
//! One pass recomputes per-field validity plus the single cross-field
//! rule (new password equals confirmation) and reports which visual
//! affordances are in scope for the triggering field. Nothing here touches
//! a surface; the controller applies the updates through its port.

use crate::domain::form::{ChangePasswordForm, FieldId};

/// Valid/invalid marker toggled on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMarker {
    /// The field passed its checks.
    Valid,
    /// The field failed its checks.
    Invalid,
}

/// Subtree whose validation affordances become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationScope {
    /// A single field's subtree.
    Field(FieldId),
    /// The whole form, on a submit attempt.
    WholeForm,
}

/// One visual update owed to the surface after a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceUpdate {
    /// Toggle the valid/invalid marker on a field.
    Mark {
        /// Field carrying the marker.
        field: FieldId,
        /// Marker to show.
        marker: FieldMarker,
    },
    /// Make validation affordances visible for a scope.
    Reveal {
        /// Scope to reveal.
        scope: ValidationScope,
    },
}

/// Derived validity for one pass over the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    fields_valid: [bool; 4],
    passwords_match: bool,
}

impl ValidationReport {
    /// Whether `field` satisfied its own constraints.
    #[must_use]
    pub fn field_is_valid(&self, field: FieldId) -> bool {
        FieldId::ALL
            .iter()
            .zip(self.fields_valid)
            .find(|(candidate, _)| **candidate == field)
            .is_some_and(|(_, valid)| valid)
    }

    /// Whether the new password equals its confirmation.
    #[must_use]
    pub const fn passwords_match(&self) -> bool {
        self.passwords_match
    }

    /// Overall validity: submission is permitted iff this holds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.passwords_match && self.fields_valid.iter().all(|valid| *valid)
    }
}

/// Result of one validation pass: derived validity plus the affordance
/// updates in scope for the trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPass {
    /// Derived validity.
    pub report: ValidationReport,
    /// Visual updates the surface should apply, in order.
    pub updates: Vec<AffordanceUpdate>,
}

/// Validate the form, optionally scoped to the field that triggered the
/// check.
///
/// With no trigger (a submit attempt) every field is re-validated and the
/// whole form is marked validated. With a trigger, only that field's
/// subtree is revealed, and the confirmation field's marker is refreshed
/// when the trigger is either password field.
#[must_use]
pub fn validate(form: &ChangePasswordForm, trigger: Option<FieldId>) -> ValidationPass {
    let fields_valid = FieldId::ALL.map(|field| form.field_is_valid(field));
    let passwords_match =
        form.value(FieldId::NewPassword) == form.value(FieldId::ConfirmPassword);
    let report = ValidationReport {
        fields_valid,
        passwords_match,
    };

    let mut updates = Vec::new();
    match trigger {
        Some(field) => updates.push(AffordanceUpdate::Reveal {
            scope: ValidationScope::Field(field),
        }),
        None => updates.push(AffordanceUpdate::Reveal {
            scope: ValidationScope::WholeForm,
        }),
    }
    if confirmation_in_scope(trigger) {
        let marker = if passwords_match {
            FieldMarker::Valid
        } else {
            FieldMarker::Invalid
        };
        updates.push(AffordanceUpdate::Mark {
            field: FieldId::ConfirmPassword,
            marker,
        });
    }

    ValidationPass { report, updates }
}

fn confirmation_in_scope(trigger: Option<FieldId>) -> bool {
    matches!(
        trigger,
        None | Some(FieldId::NewPassword | FieldId::ConfirmPassword)
    )
}
