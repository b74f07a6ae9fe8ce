//! Submission pipeline for the change-password form.
//!
//! The page's callback chains become an explicit state machine:
//! Idle → Validating → Submitting → (Success | Failure | Cancelled) → Idle.
//! The controller owns the form, consults the validator on every input
//! event, gates submission on overall validity, and funnels every outcome
//! through the catalog and the surface port. Exactly one submission can be
//! in flight: the gate disables the submit control while Submitting, and
//! [`FormController::submit`] taking `&mut self` enforces the same
//! exclusion in the type system.

use std::future::Future;
use std::sync::Arc;

use futures_util::future;
use tracing::{debug, warn};

use crate::domain::catalog::MessageCatalog;
use crate::domain::form::{ChangePasswordForm, FieldId};
use crate::domain::ports::{ChangePasswordGateway, ChangePasswordOutcome, FormSurface};
use crate::domain::validation::{AffordanceUpdate, validate};

/// Where the pipeline currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for input or a submit event.
    Idle,
    /// A submit event is being re-validated.
    Validating,
    /// A request is in flight.
    Submitting,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Validation failed; nothing was sent.
    BlockedByValidation,
    /// The endpoint accepted the change; the success message is displayed.
    Succeeded,
    /// A failure message (reported or transport) is displayed.
    Failed,
    /// The caller cancelled the in-flight request; no message is displayed.
    Cancelled,
}

/// Drives the change-password workflow against a gateway and a surface.
pub struct FormController<G, S> {
    form: ChangePasswordForm,
    catalog: MessageCatalog,
    gateway: Arc<G>,
    surface: Arc<S>,
    phase: Phase,
}

impl<G, S> FormController<G, S>
where
    G: ChangePasswordGateway,
    S: FormSurface,
{
    /// Build a controller around an initial form state.
    pub fn new(
        form: ChangePasswordForm,
        catalog: MessageCatalog,
        gateway: Arc<G>,
        surface: Arc<S>,
    ) -> Self {
        Self {
            form,
            catalog,
            gateway,
            surface,
            phase: Phase::Idle,
        }
    }

    /// Current form state.
    #[must_use]
    pub const fn form(&self) -> &ChangePasswordForm {
        &self.form
    }

    /// Current pipeline phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Handle one input event: store the value, re-validate with the field
    /// as trigger, and re-run the submission gate.
    ///
    /// Returns the overall validity after the update.
    pub fn field_changed(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        self.form.set_value(field, value);
        self.refresh_gate(Some(field))
    }

    /// Run one submit attempt to completion, with no way to cancel it.
    pub async fn submit(&mut self) -> SubmitResult {
        self.submit_with_cancel(future::pending::<()>()).await
    }

    /// Run one submit attempt, racing the network call against `cancel`.
    ///
    /// When `cancel` resolves first the in-flight call is dropped, the
    /// loading affordance is cleared, the gate is re-evaluated, and no
    /// message is rendered. All other paths converge on the message
    /// renderer; the loading cleanup runs regardless of outcome.
    pub async fn submit_with_cancel<C>(&mut self, cancel: C) -> SubmitResult
    where
        C: Future<Output = ()>,
    {
        self.phase = Phase::Validating;
        debug!("submit requested; revalidating the whole form");
        if !self.refresh_gate(None) {
            debug!("validation blocked the submission");
            self.phase = Phase::Idle;
            return SubmitResult::BlockedByValidation;
        }

        self.phase = Phase::Submitting;
        self.surface.set_submit_enabled(false);
        self.surface.begin_loading();

        let request = self.form.to_request();
        let gateway = Arc::clone(&self.gateway);
        tokio::pin!(cancel);
        let call_result = tokio::select! {
            outcome = gateway.change_password(&request) => Some(outcome),
            () = &mut cancel => None,
        };

        let result = match call_result {
            None => {
                debug!("submission cancelled by the caller");
                SubmitResult::Cancelled
            }
            Some(Ok(outcome)) => {
                self.surface.show_message(self.catalog.resolve(outcome));
                if outcome == ChangePasswordOutcome::Accepted {
                    SubmitResult::Succeeded
                } else {
                    SubmitResult::Failed
                }
            }
            Some(Err(error)) => {
                warn!(error = %error, "change-password call failed; rendering the fallback message");
                self.surface.show_message(self.catalog.transport_failure());
                SubmitResult::Failed
            }
        };

        // Leaving Submitting: idempotent cleanup on every path, so a user
        // can correct the form and resubmit.
        self.surface.end_loading();
        self.refresh_gate(None);
        self.phase = Phase::Idle;
        result
    }

    fn refresh_gate(&self, trigger: Option<FieldId>) -> bool {
        let pass = validate(&self.form, trigger);
        for update in &pass.updates {
            match *update {
                AffordanceUpdate::Mark { field, marker } => {
                    self.surface.set_field_marker(field, marker);
                }
                AffordanceUpdate::Reveal { scope } => self.surface.reveal_validation(scope),
            }
        }
        let valid = pass.report.is_valid();
        self.surface.set_submit_enabled(valid);
        valid
    }
}
