//! Ports owned by the form-controller domain.
//!
//! The gateway port faces the remote endpoint; the surface port faces
//! whatever renders the form. Adapters live under `crate::outbound` and
//! `crate::inbound`.

mod change_password_gateway;
mod form_surface;

pub use change_password_gateway::{
    ChangePasswordGateway, ChangePasswordOutcome, ChangePasswordRequest,
    FixtureChangePasswordGateway, GatewayError,
};
#[cfg(test)]
pub use change_password_gateway::MockChangePasswordGateway;
pub use form_surface::{FormSurface, NullFormSurface};
#[cfg(test)]
pub use form_surface::MockFormSurface;
