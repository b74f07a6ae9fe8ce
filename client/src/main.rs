//! Terminal entry-point: drives one change-password round trip.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use client::domain::form::FieldId;
use client::domain::{ChangePasswordForm, FormController, MessageCatalog, SubmitResult};
use client::inbound::terminal::TerminalSurface;
use client::outbound::http::ChangePasswordHttpGateway;

/// `change-passwd` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "change-passwd",
    about = "Change an account password through the web endpoint",
    version
)]
struct CliArgs {
    /// Endpoint URL. Falls back to `CHANGEPASSWD_URL` when omitted.
    #[arg(long = "endpoint", value_name = "url")]
    endpoint: Option<String>,
    /// Account name. Prompted for when omitted.
    #[arg(long = "username", value_name = "name")]
    username: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "seconds", default_value_t = 30)]
    timeout_secs: u64,
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    if let Err(error) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %error, "tracing init failed");
    }

    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let endpoint = resolve_endpoint(args.endpoint)?;
    let endpoint = Url::parse(&endpoint).map_err(|error| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("endpoint is not a valid URL: {error}"),
        )
    })?;

    let gateway =
        ChangePasswordHttpGateway::with_timeout(endpoint, Duration::from_secs(args.timeout_secs))
            .map_err(|error| io::Error::other(format!("create HTTP client: {error}")))?;
    let surface = Arc::new(TerminalSurface::new());
    let mut controller = FormController::new(
        ChangePasswordForm::new(),
        MessageCatalog::default(),
        Arc::new(gateway),
        surface,
    );

    let username = match args.username {
        Some(value) => value,
        None => prompt("Username: ")?,
    };
    controller.field_changed(FieldId::Username, username);
    controller.field_changed(FieldId::OldPassword, prompt("Current password: ")?);
    controller.field_changed(FieldId::NewPassword, prompt("New password: ")?);
    let valid = controller.field_changed(FieldId::ConfirmPassword, prompt("Confirm new password: ")?);
    if !valid {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "the form is not valid; check that every field is filled and the passwords match",
        ));
    }

    let cancel = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    match controller.submit_with_cancel(cancel).await {
        SubmitResult::Succeeded => Ok(()),
        SubmitResult::BlockedByValidation => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "validation blocked the submission; nothing was sent",
        )),
        SubmitResult::Failed => Err(io::Error::other("the password change failed")),
        SubmitResult::Cancelled => Err(io::Error::other("cancelled before the endpoint answered")),
    }
}

fn prompt(label: &str) -> io::Result<String> {
    {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{label}")?;
        stderr.flush()?;
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    if line.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "standard input closed before all fields were provided",
        ));
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

fn resolve_endpoint(explicit: Option<String>) -> io::Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--endpoint must not be empty when provided",
            ));
        }
        return Ok(value);
    }

    let from_env = env::var("CHANGEPASSWD_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "endpoint missing: set --endpoint or CHANGEPASSWD_URL",
        )
    })?;
    if from_env.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CHANGEPASSWD_URL must not be empty",
        ));
    }
    Ok(from_env)
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI argument helpers.

    use rstest::rstest;

    use super::{CliArgs, resolve_endpoint};
    use clap::Parser;

    #[rstest]
    fn explicit_endpoint_is_passed_through() {
        let endpoint = resolve_endpoint(Some("https://passwd.example/api/changepasswd".to_owned()))
            .expect("explicit endpoint resolves");
        assert_eq!(endpoint, "https://passwd.example/api/changepasswd");
    }

    #[rstest]
    fn blank_explicit_endpoint_is_rejected() {
        let error = resolve_endpoint(Some("   ".to_owned())).expect_err("blank should fail");
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn timeout_defaults_to_thirty_seconds() {
        let args = CliArgs::try_parse_from(["change-passwd", "--endpoint", "https://x.example"])
            .expect("args parse");
        assert_eq!(args.timeout_secs, 30);
    }

    #[rstest]
    fn username_flag_is_optional() {
        let args = CliArgs::try_parse_from([
            "change-passwd",
            "--endpoint",
            "https://x.example",
            "--username",
            "alice",
        ])
        .expect("args parse");
        assert_eq!(args.username.as_deref(), Some("alice"));
    }
}
