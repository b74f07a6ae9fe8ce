//! HTTP outbound adapters.
//!
//! This module provides the reqwest implementation of the
//! `ChangePasswordGateway` port.

mod dto;
mod gateway;

pub use gateway::ChangePasswordHttpGateway;
