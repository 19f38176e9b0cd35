//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without a database.

use std::sync::Arc;

use crate::domain::ports::{
    AgentsCommand, AgentsQuery, CompaniesQuery, CustomersQuery, OrdersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read port for the agents table.
    pub agents: Arc<dyn AgentsQuery>,
    /// Write port for the agents table.
    pub agents_command: Arc<dyn AgentsCommand>,
    /// Read port for the company table.
    pub companies: Arc<dyn CompaniesQuery>,
    /// Read port for the customer table.
    pub customers: Arc<dyn CustomersQuery>,
    /// Read port for the orders table.
    pub orders: Arc<dyn OrdersQuery>,
}
