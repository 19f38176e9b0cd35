//! Inbound HTTP adapters: handlers, validation, error envelope, and state.

pub mod agents;
pub mod companies;
pub mod customers;
pub mod error;
pub mod health;
pub mod orders;
pub mod state;
pub mod validation;

pub use error::{ApiError, ApiResult};
