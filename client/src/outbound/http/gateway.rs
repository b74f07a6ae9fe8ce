//! Reqwest-backed change-password gateway adapter.
//!
//! This adapter owns transport details only: request serialisation,
//! timeout and HTTP error mapping, and JSON decoding into the domain
//! outcome.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use super::dto::ResponseEnvelopeDto;
use crate::domain::ports::{
    ChangePasswordGateway, ChangePasswordOutcome, ChangePasswordRequest, GatewayError,
};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gateway adapter that POSTs the JSON payload to one endpoint.
pub struct ChangePasswordHttpGateway {
    client: Client,
    endpoint: Url,
}

impl ChangePasswordHttpGateway {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build an adapter using a reqwest client with an explicit request
    /// timeout. Timeout expiry surfaces as [`GatewayError::Timeout`].
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ChangePasswordGateway for ChangePasswordHttpGateway {
    async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ChangePasswordOutcome, GatewayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        decode_outcome(body.as_ref())
    }
}

fn decode_outcome(body: &[u8]) -> Result<ChangePasswordOutcome, GatewayError> {
    let envelope: ResponseEnvelopeDto = serde_json::from_slice(body).map_err(|error| {
        GatewayError::decode(format!("invalid change-password JSON payload: {error}"))
    })?;
    envelope.into_outcome().map_err(GatewayError::decode)
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::timeout(error.to_string())
    } else {
        GatewayError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GatewayError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };
    GatewayError::status(status.as_u16(), message)
}

// Bodies of failed responses are diagnostics only; keep them short enough
// for a log line.
fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
        format!("{preview}...")
    } else {
        compact
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use crate::domain::catalog::{ClientErrorCode, ServerErrorCode};
    use rstest::rstest;

    #[test]
    fn decodes_a_success_envelope() {
        let outcome = decode_outcome(br#"{"type": 0, "data": {}}"#).expect("envelope decodes");
        assert_eq!(outcome, ChangePasswordOutcome::Accepted);
    }

    #[test]
    fn decodes_a_success_envelope_without_data() {
        let outcome = decode_outcome(br#"{"type": 0}"#).expect("envelope decodes");
        assert_eq!(outcome, ChangePasswordOutcome::Accepted);
    }

    #[rstest]
    #[case::passwords_different(0, Some(ClientErrorCode::PasswordsDifferent))]
    #[case::unknown_code(7, None)]
    fn decodes_client_error_envelopes(
        #[case] code: i64,
        #[case] expected: Option<ClientErrorCode>,
    ) {
        let body = format!(r#"{{"type": 1, "data": {{"error_code": {code}}}}}"#);
        let outcome = decode_outcome(body.as_bytes()).expect("envelope decodes");
        assert_eq!(outcome, ChangePasswordOutcome::Rejected { code: expected });
    }

    #[rstest]
    #[case::locked_out(4, Some(ServerErrorCode::AccountLockedOut))]
    #[case::unknown_code(99, None)]
    fn decodes_server_error_envelopes(
        #[case] code: i64,
        #[case] expected: Option<ServerErrorCode>,
    ) {
        let body = format!(r#"{{"type": 2, "data": {{"error_code": {code}}}}}"#);
        let outcome = decode_outcome(body.as_bytes()).expect("envelope decodes");
        assert_eq!(outcome, ChangePasswordOutcome::Failed { code: expected });
    }

    #[rstest]
    #[case::unknown_type(br#"{"type": 9}"#.as_slice())]
    #[case::error_without_data(br#"{"type": 2}"#.as_slice())]
    #[case::error_without_code(br#"{"type": 1, "data": {}}"#.as_slice())]
    #[case::not_json(b"<html>proxy error</html>".as_slice())]
    fn ill_shaped_bodies_map_to_decode_errors(#[case] body: &[u8]) {
        let error = decode_outcome(body).expect_err("decode should fail");
        assert!(
            matches!(error, GatewayError::Decode { .. }),
            "ill-shaped bodies should map to Decode errors",
        );
    }

    #[rstest]
    #[case::bad_request(StatusCode::BAD_REQUEST)]
    #[case::not_found(StatusCode::NOT_FOUND)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR)]
    #[case::bad_gateway(StatusCode::BAD_GATEWAY)]
    fn non_success_statuses_map_to_status_errors(#[case] status: StatusCode) {
        let error = map_status_error(status, b"upstream said no");
        match error {
            GatewayError::Status {
                status: code,
                message,
            } => {
                assert_eq!(code, status.as_u16());
                assert!(message.contains("upstream said no"));
            }
            other => panic!("expected a Status error, got {other:?}"),
        }
    }

    #[test]
    fn status_errors_without_a_body_keep_a_bare_message() {
        let error = map_status_error(StatusCode::SERVICE_UNAVAILABLE, b"");
        assert_eq!(
            error,
            GatewayError::status(503, "status 503"),
        );
    }

    #[test]
    fn long_bodies_are_truncated_in_the_preview() {
        let body = "x".repeat(500);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 123);
    }
}
