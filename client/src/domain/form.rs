//! Field model for the change-password form.
//!
//! The four page inputs become strongly typed fields with the constraint
//! set browsers evaluate natively (`required`, length bounds). Validation
//! itself lives in [`crate::domain::validation`].

use crate::domain::ports::ChangePasswordRequest;

/// Identifier of one form field.
///
/// The wire name doubles as the JSON key on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Account name field.
    Username,
    /// Current password field.
    OldPassword,
    /// New password field.
    NewPassword,
    /// New password confirmation field.
    ConfirmPassword,
}

impl FieldId {
    /// Every field, in page order.
    pub const ALL: [Self; 4] = [
        Self::Username,
        Self::OldPassword,
        Self::NewPassword,
        Self::ConfirmPassword,
    ];

    /// JSON key used for this field on submission.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::OldPassword => "oldpassword",
            Self::NewPassword => "newpassword",
            Self::ConfirmPassword => "confirmpassword",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Username => 0,
            Self::OldPassword => 1,
            Self::NewPassword => 2,
            Self::ConfirmPassword => 3,
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Constraint set evaluated for one field.
///
/// This is the Rust model of the browser-native constraint flags the page
/// relied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraints {
    /// Empty values are rejected when set.
    pub required: bool,
    /// Minimum accepted length in characters.
    pub min_length: Option<usize>,
    /// Maximum accepted length in characters.
    pub max_length: Option<usize>,
}

impl FieldConstraints {
    /// Constraint set of a bare `required` input.
    #[must_use]
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    /// Return whether `value` satisfies this constraint set.
    ///
    /// As with native constraint validation, length bounds only apply to
    /// non-empty values; an empty optional field is valid.
    #[must_use]
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        if value.is_empty() {
            return !self.required;
        }
        let length = value.chars().count();
        if self.min_length.is_some_and(|min| length < min) {
            return false;
        }
        if self.max_length.is_some_and(|max| length > max) {
            return false;
        }
        true
    }
}

impl Default for FieldConstraints {
    fn default() -> Self {
        Self::required()
    }
}

/// Current state of the change-password form.
///
/// Created with the page, mutated on input events, read at submission
/// time. Validity is always derived from the current values; nothing here
/// caches a validation result.
#[derive(Debug, Clone, Default)]
pub struct ChangePasswordForm {
    values: [String; 4],
    constraints: [FieldConstraints; 4],
}

impl ChangePasswordForm {
    /// Form with every field empty and marked `required`, mirroring the
    /// original page markup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field's constraint set.
    #[must_use]
    pub fn with_constraints(mut self, field: FieldId, constraints: FieldConstraints) -> Self {
        self.constraints[field.index()] = constraints;
        self
    }

    /// Current value of `field`.
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        self.values[field.index()].as_str()
    }

    /// Store a new value for `field`.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Constraint set attached to `field`.
    #[must_use]
    pub fn constraints(&self, field: FieldId) -> &FieldConstraints {
        &self.constraints[field.index()]
    }

    /// Whether `field` currently satisfies its own constraints.
    #[must_use]
    pub fn field_is_valid(&self, field: FieldId) -> bool {
        self.constraints(field).is_satisfied_by(self.value(field))
    }

    /// Serialize the current values into the submission payload.
    #[must_use]
    pub fn to_request(&self) -> ChangePasswordRequest {
        ChangePasswordRequest {
            username: self.value(FieldId::Username).to_owned(),
            old_password: self.value(FieldId::OldPassword).to_owned(),
            new_password: self.value(FieldId::NewPassword).to_owned(),
            confirm_password: self.value(FieldId::ConfirmPassword).to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Constraint evaluation and payload serialisation coverage.

    use rstest::rstest;

    use super::{ChangePasswordForm, FieldConstraints, FieldId};

    #[rstest]
    #[case::required_rejects_empty(FieldConstraints::required(), "", false)]
    #[case::required_accepts_value(FieldConstraints::required(), "x", true)]
    #[case::min_length_rejects_short(
        FieldConstraints { required: true, min_length: Some(8), max_length: None },
        "1234567",
        false
    )]
    #[case::min_length_accepts_exact(
        FieldConstraints { required: true, min_length: Some(8), max_length: None },
        "12345678",
        true
    )]
    #[case::max_length_rejects_long(
        FieldConstraints { required: true, min_length: None, max_length: Some(4) },
        "12345",
        false
    )]
    #[case::optional_accepts_empty(
        FieldConstraints { required: false, min_length: Some(8), max_length: None },
        "",
        true
    )]
    fn constraints_are_evaluated_against_character_counts(
        #[case] constraints: FieldConstraints,
        #[case] value: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(
            constraints.is_satisfied_by(value),
            expected,
            "constraint check for {value:?} should be {expected}"
        );
    }

    #[test]
    fn request_payload_uses_the_fixed_wire_keys() {
        let mut form = ChangePasswordForm::new();
        form.set_value(FieldId::Username, "alice");
        form.set_value(FieldId::OldPassword, "old");
        form.set_value(FieldId::NewPassword, "new");
        form.set_value(FieldId::ConfirmPassword, "new");

        let payload = serde_json::to_value(form.to_request()).expect("payload serializes");
        assert_eq!(
            payload,
            serde_json::json!({
                "username": "alice",
                "oldpassword": "old",
                "newpassword": "new",
                "confirmpassword": "new",
            })
        );
    }

    #[test]
    fn custom_constraints_replace_the_required_default() {
        let form = ChangePasswordForm::new().with_constraints(
            FieldId::NewPassword,
            FieldConstraints {
                required: true,
                min_length: Some(12),
                max_length: None,
            },
        );
        assert_eq!(form.constraints(FieldId::NewPassword).min_length, Some(12));
        assert!(form.constraints(FieldId::Username).required);
    }
}
