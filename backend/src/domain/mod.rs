//! Transport-agnostic domain types and ports.

mod agent;
mod company;
mod customer;
mod error;
mod order;
pub mod ports;

pub use agent::Agent;
pub use company::Company;
pub use customer::Customer;
pub use error::{Error, ErrorCode};
pub use order::Order;
