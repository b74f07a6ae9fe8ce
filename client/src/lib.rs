//! Change-password form controller.
//!
//! A UI-independent client for a password-change web endpoint: field
//! validation, submit gating, an explicit submission state machine, and a
//! catalog mapping the endpoint's error-code taxonomy to user-facing
//! messages. The rendered page and the remote endpoint sit behind ports;
//! adapters for a terminal surface and an HTTP gateway are included.

pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::{ChangePasswordForm, FormController, MessageCatalog, SubmitResult};
