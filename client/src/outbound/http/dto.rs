//! DTOs for decoding the change-password response envelope.
//!
//! The adapter decodes into these transport DTOs first, then maps into the
//! domain outcome in one pass. An unrecognised `type`, or an error
//! envelope without `data.error_code`, is an ill-shaped response and fails
//! the conversion; an unrecognised code inside a recognised kind is a
//! decodable outcome that resolves to the kind's fallback message.

use serde::Deserialize;

use crate::domain::catalog::{ClientErrorCode, ResponseKind, ServerErrorCode};
use crate::domain::ports::ChangePasswordOutcome;

#[derive(Debug, Deserialize)]
pub(super) struct ResponseEnvelopeDto {
    #[serde(rename = "type")]
    pub(super) kind: i64,
    pub(super) data: Option<ResponseDataDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponseDataDto {
    pub(super) error_code: Option<i64>,
}

impl ResponseEnvelopeDto {
    pub(super) fn into_outcome(self) -> Result<ChangePasswordOutcome, String> {
        let kind = ResponseKind::from_wire(self.kind)
            .ok_or_else(|| format!("unrecognised response type {}", self.kind))?;
        match kind {
            ResponseKind::Success => Ok(ChangePasswordOutcome::Accepted),
            ResponseKind::ClientError => {
                let code = self.error_code("client")?;
                Ok(ChangePasswordOutcome::Rejected {
                    code: ClientErrorCode::from_wire(code),
                })
            }
            ResponseKind::ServerError => {
                let code = self.error_code("server")?;
                Ok(ChangePasswordOutcome::Failed {
                    code: ServerErrorCode::from_wire(code),
                })
            }
        }
    }

    fn error_code(&self, kind: &str) -> Result<i64, String> {
        self.data
            .as_ref()
            .and_then(|data| data.error_code)
            .ok_or_else(|| format!("{kind} error envelope is missing data.error_code"))
    }
}
