//! Form-controller domain.
//!
//! Purpose: the whole change-password workflow as UI-independent logic
//! (field model, validation, message catalog, submission state machine)
//! behind driven ports for the remote endpoint and the rendered surface.
//! Adapters live in `crate::inbound` and `crate::outbound`.
//!
//! Public surface:
//! - [`FormController`] — the submission pipeline.
//! - [`ChangePasswordForm`], [`FieldId`], [`FieldConstraints`] — field model.
//! - [`MessageCatalog`], [`Message`] — immutable message configuration.
//! - [`ports`] — gateway and surface traits with fixtures.

pub mod catalog;
pub mod controller;
pub mod form;
pub mod ports;
pub mod validation;

pub use self::catalog::{
    ClientErrorCode, Message, MessageCatalog, MessageSeverity, ResponseKind, ServerErrorCode,
};
pub use self::controller::{FormController, Phase, SubmitResult};
pub use self::form::{ChangePasswordForm, FieldConstraints, FieldId};
pub use self::validation::{
    AffordanceUpdate, FieldMarker, ValidationPass, ValidationReport, ValidationScope, validate,
};
