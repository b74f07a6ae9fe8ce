//! Inbound adapters driving the controller.

pub mod terminal;
