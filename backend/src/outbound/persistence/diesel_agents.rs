//! Diesel-backed adapters for the agents ports.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AgentsCommand, AgentsQuery, NewAgent};
use crate::domain::{Agent, Error};

use super::models::AgentRow;
use super::pool::DbPool;
use super::schema::agents;
use super::{checkout_error, query_error};

/// Diesel-backed [`AgentsQuery`] implementation.
#[derive(Clone)]
pub struct DieselAgentsQuery {
    pool: DbPool,
}

impl DieselAgentsQuery {
    /// Create a query adapter over the shared pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AgentsQuery for DieselAgentsQuery {
    async fn list(&self) -> Result<Vec<Agent>, Error> {
        let mut conn = self.pool.get().await.map_err(checkout_error)?;
        let rows = agents::table
            .select(AgentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(query_error)?;
        Ok(rows.into_iter().map(Agent::from).collect())
    }
}

/// Diesel-backed [`AgentsCommand`] implementation.
///
/// The write statements are not wired up yet; each operation still checks a
/// connection out and back in so the pool discipline matches the read paths,
/// then answers with success. See DESIGN.md for the decision record.
#[derive(Clone)]
pub struct DieselAgentsCommand {
    pool: DbPool,
}

impl DieselAgentsCommand {
    /// Create a command adapter over the shared pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AgentsCommand for DieselAgentsCommand {
    async fn create(&self, _agent: NewAgent) -> Result<(), Error> {
        let _conn = self.pool.get().await.map_err(checkout_error)?;
        Ok(())
    }

    async fn rename(&self, _agent_code: &str, _agent_name: &str) -> Result<(), Error> {
        let _conn = self.pool.get().await.map_err(checkout_error)?;
        Ok(())
    }

    async fn delete(&self, _agent_code: &str) -> Result<(), Error> {
        let _conn = self.pool.get().await.map_err(checkout_error)?;
        Ok(())
    }
}
