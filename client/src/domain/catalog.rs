//! Response taxonomy and the user-facing message catalog.
//!
//! The endpoint reports outcomes as small integers; this module gives them
//! names and maps them to display text. The catalog is immutable
//! configuration injected into the controller, never mutated at runtime.

use std::borrow::Cow;

use crate::domain::ports::ChangePasswordOutcome;

/// Discriminator carried in the envelope `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// The password was changed.
    Success,
    /// The request itself was judged malformed.
    ClientError,
    /// The operation failed for a domain reason.
    ServerError,
}

impl ResponseKind {
    /// Decode the wire integer, returning `None` for unknown values.
    #[must_use]
    pub const fn from_wire(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Success),
            1 => Some(Self::ClientError),
            2 => Some(Self::ServerError),
            _ => None,
        }
    }
}

/// Failure reasons the endpoint reports for malformed requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorCode {
    /// New password and confirmation differ.
    PasswordsDifferent,
}

impl ClientErrorCode {
    /// Decode the wire integer, returning `None` for unknown codes.
    #[must_use]
    pub const fn from_wire(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::PasswordsDifferent),
            _ => None,
        }
    }
}

/// Failure reasons the endpoint reports for the change operation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerErrorCode {
    /// The backing password tool did not answer in time.
    Timeout,
    /// The backing password tool failed without a recognised status.
    SmbpasswdError,
    /// `NT_STATUS_ACCESS_DENIED`.
    AccessDenied,
    /// `NT_STATUS_ACCOUNT_DISABLED`.
    AccountDisabled,
    /// `NT_STATUS_ACCOUNT_LOCKED_OUT`.
    AccountLockedOut,
    /// `NT_STATUS_ACCOUNT_RESTRICTION`.
    AccountRestriction,
    /// `NT_STATUS_INVALID_ACCOUNT_NAME`.
    InvalidAccountName,
    /// `NT_STATUS_NAME_TOO_LONG`.
    NameTooLong,
    /// `NT_STATUS_PASSWORD_EXPIRED`.
    PasswordExpired,
}

impl ServerErrorCode {
    /// Decode the wire integer, returning `None` for unknown codes.
    #[must_use]
    pub const fn from_wire(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Timeout),
            1 => Some(Self::SmbpasswdError),
            2 => Some(Self::AccessDenied),
            3 => Some(Self::AccountDisabled),
            4 => Some(Self::AccountLockedOut),
            5 => Some(Self::AccountRestriction),
            6 => Some(Self::InvalidAccountName),
            7 => Some(Self::NameTooLong),
            8 => Some(Self::PasswordExpired),
            _ => None,
        }
    }
}

/// Visual severity of a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    /// The attempt succeeded.
    Success,
    /// The attempt failed.
    Failure,
}

/// One user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    severity: MessageSeverity,
    text: Cow<'static, str>,
}

impl Message {
    /// Build a success message.
    #[must_use]
    pub fn success(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            severity: MessageSeverity::Success,
            text: text.into(),
        }
    }

    /// Build a failure message.
    #[must_use]
    pub fn failure(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            severity: MessageSeverity::Failure,
            text: text.into(),
        }
    }

    /// Severity used to style the message region.
    #[must_use]
    pub const fn severity(&self) -> MessageSeverity {
        self.severity
    }

    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_ref()
    }
}

const SUCCESS: &str = "You successfully changed your password!";

const UNKNOWN_FAILURE: &str = "Unfortunately, an unknown error has occurred. Verify the form and, \
     if the problem persists, contact your administrator.";

const SERVER_UNKNOWN: &str = "Unfortunately, an unknown error has occurred. Try later and, if the \
     problem persists, contact your administrator.";

const PASSWORDS_DIFFERENT: &str = "Your new password and its confirmations are different.";

const RETRY_CREDENTIALS: &str = "Verify your username and password. If this problem persists, \
     contact your administrator. If you tried too much, your account may be disabled.";

const RECHECK_USERNAME: &str =
    "Recheck your username. If this problem persists, contact your administrator.";

/// Immutable mapping from decoded outcomes to user-facing messages.
///
/// Carries a designated fallback for unknown codes within each kind and a
/// global fallback for unknown kinds and transport failure.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    success: Message,
    unknown_failure: Message,
    client_unknown: Message,
    server_unknown: Message,
    client: Vec<(ClientErrorCode, Message)>,
    server: Vec<(ServerErrorCode, Message)>,
}

impl MessageCatalog {
    /// Message for a decoded outcome.
    ///
    /// Unknown codes resolve to the per-kind fallback; they never panic.
    #[must_use]
    pub fn resolve(&self, outcome: ChangePasswordOutcome) -> &Message {
        match outcome {
            ChangePasswordOutcome::Accepted => &self.success,
            ChangePasswordOutcome::Rejected { code } => code
                .and_then(|code| self.client_message(code))
                .unwrap_or(&self.client_unknown),
            ChangePasswordOutcome::Failed { code } => code
                .and_then(|code| self.server_message(code))
                .unwrap_or(&self.server_unknown),
        }
    }

    /// Global fallback shown for transport failures and unknown kinds.
    #[must_use]
    pub const fn transport_failure(&self) -> &Message {
        &self.unknown_failure
    }

    fn client_message(&self, code: ClientErrorCode) -> Option<&Message> {
        self.client
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, message)| message)
    }

    fn server_message(&self, code: ServerErrorCode) -> Option<&Message> {
        self.server
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, message)| message)
    }
}

impl Default for MessageCatalog {
    /// Catalog with the change-password page's stock messages.
    fn default() -> Self {
        Self {
            success: Message::success(SUCCESS),
            unknown_failure: Message::failure(UNKNOWN_FAILURE),
            client_unknown: Message::failure(UNKNOWN_FAILURE),
            server_unknown: Message::failure(SERVER_UNKNOWN),
            client: vec![(
                ClientErrorCode::PasswordsDifferent,
                Message::failure(PASSWORDS_DIFFERENT),
            )],
            server: vec![
                (
                    ServerErrorCode::Timeout,
                    Message::failure(format!("A timeout occurred. {RETRY_CREDENTIALS}")),
                ),
                (
                    ServerErrorCode::SmbpasswdError,
                    Message::failure(format!("An error occurred. {RETRY_CREDENTIALS}")),
                ),
                (
                    ServerErrorCode::AccessDenied,
                    Message::failure(
                        "Recheck your password and username. If this problem persists, contact \
                         your administrator. If you tried too much, your account may be disabled.",
                    ),
                ),
                (
                    ServerErrorCode::AccountDisabled,
                    Message::failure("Your account has been disabled. Contact your administrator."),
                ),
                (
                    ServerErrorCode::AccountLockedOut,
                    Message::failure(
                        "Your account has been locked-out. Contact your administrator.",
                    ),
                ),
                (
                    ServerErrorCode::AccountRestriction,
                    Message::failure("Your account is restricted. Contact your administrator."),
                ),
                (
                    ServerErrorCode::InvalidAccountName,
                    Message::failure(RECHECK_USERNAME),
                ),
                (
                    ServerErrorCode::NameTooLong,
                    Message::failure(RECHECK_USERNAME),
                ),
                (
                    ServerErrorCode::PasswordExpired,
                    Message::failure(
                        "You waited too much to change your password. Thus, your password has \
                         been expired. Contact your administrator.",
                    ),
                ),
            ],
        }
    }
}
