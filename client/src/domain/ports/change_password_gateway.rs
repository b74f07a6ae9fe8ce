//! Driven port for the remote change-password endpoint.
//!
//! The domain owns the request shape and the decoded response contract so
//! the controller stays adapter-agnostic. The HTTP adapter decodes the
//! wire envelope into [`ChangePasswordOutcome`] before it reaches the
//! controller; ill-shaped envelopes never get further than
//! [`GatewayError::Decode`].

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::catalog::{ClientErrorCode, ServerErrorCode};

/// Submission payload sent to the endpoint.
///
/// The field names are the endpoint's fixed key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangePasswordRequest {
    /// Account name.
    pub username: String,
    /// Current password.
    #[serde(rename = "oldpassword")]
    pub old_password: String,
    /// Requested password.
    #[serde(rename = "newpassword")]
    pub new_password: String,
    /// Confirmation of the requested password.
    #[serde(rename = "confirmpassword")]
    pub confirm_password: String,
}

/// Decoded response envelope.
///
/// `code` is `None` when the envelope carried a recognised kind with an
/// unrecognised error code; the catalog maps that to the kind's fallback
/// message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangePasswordOutcome {
    /// The password was changed.
    Accepted,
    /// The endpoint judged the request itself malformed.
    Rejected {
        /// Recognised client error code, if any.
        code: Option<ClientErrorCode>,
    },
    /// The change operation failed for a domain reason.
    Failed {
        /// Recognised server error code, if any.
        code: Option<ServerErrorCode>,
    },
}

/// Errors surfaced while calling the endpoint.
///
/// Every variant belongs to the transport failure class: the controller
/// logs the diagnostic and renders the global fallback message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Network transport failed before a response arrived.
    #[error("change-password transport failed: {message}")]
    Transport {
        /// Diagnostic detail, logged but never rendered.
        message: String,
    },
    /// The request timed out.
    #[error("change-password request timed out: {message}")]
    Timeout {
        /// Diagnostic detail, logged but never rendered.
        message: String,
    },
    /// The endpoint answered with a non-2xx status.
    #[error("change-password endpoint returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Diagnostic detail, logged but never rendered.
        message: String,
    },
    /// The response body could not be decoded into an outcome.
    #[error("change-password response decode failed: {message}")]
    Decode {
        /// Diagnostic detail, logged but never rendered.
        message: String,
    },
}

impl GatewayError {
    /// Build a [`GatewayError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`GatewayError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`GatewayError::Status`].
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Build a [`GatewayError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for submitting one change-password request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChangePasswordGateway: Send + Sync {
    /// Submit the request and decode the endpoint's answer.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] for network failures, timeouts, non-2xx
    /// statuses, and undecodable bodies.
    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ChangePasswordOutcome, GatewayError>;
}

/// Fixture implementation that accepts every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureChangePasswordGateway;

#[async_trait]
impl ChangePasswordGateway for FixtureChangePasswordGateway {
    async fn change_password(
        &self,
        _request: &ChangePasswordRequest,
    ) -> Result<ChangePasswordOutcome, GatewayError> {
        Ok(ChangePasswordOutcome::Accepted)
    }
}
