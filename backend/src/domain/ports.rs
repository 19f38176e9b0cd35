//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the HTTP layer expects to interact with persistence.
//! Handlers depend only on these traits, so tests substitute stub
//! implementations and the Diesel adapters stay an implementation detail.

use async_trait::async_trait;

use super::{Agent, Company, Customer, Error, Order};

/// Payload for creating an agent row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAgent {
    /// Primary key of the new row.
    pub agent_code: String,
    /// Display name of the new agent.
    pub agent_name: String,
}

/// Read access to the agents table.
#[async_trait]
pub trait AgentsQuery: Send + Sync {
    /// Fetch every agent row.
    async fn list(&self) -> Result<Vec<Agent>, Error>;
}

/// Write access to the agents table.
///
/// The statements behind these operations are not wired up yet; adapters
/// must still check a connection out and back in around each call so the
/// pool discipline matches the read paths.
#[async_trait]
pub trait AgentsCommand: Send + Sync {
    /// Create an agent row.
    async fn create(&self, agent: NewAgent) -> Result<(), Error>;
    /// Update the display name of an existing agent.
    async fn rename(&self, agent_code: &str, agent_name: &str) -> Result<(), Error>;
    /// Delete an agent row.
    async fn delete(&self, agent_code: &str) -> Result<(), Error>;
}

/// Read access to the company table.
#[async_trait]
pub trait CompaniesQuery: Send + Sync {
    /// Fetch every company row.
    async fn list(&self) -> Result<Vec<Company>, Error>;
}

/// Read access to the customer table.
#[async_trait]
pub trait CustomersQuery: Send + Sync {
    /// Fetch every customer row.
    async fn list(&self) -> Result<Vec<Customer>, Error>;
}

/// Read access to the orders table.
#[async_trait]
pub trait OrdersQuery: Send + Sync {
    /// Fetch every order row.
    async fn list(&self) -> Result<Vec<Order>, Error>;
}
