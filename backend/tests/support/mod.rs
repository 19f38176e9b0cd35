//! Shared stub ports for endpoint tests.
//!
//! `StubStore` implements every domain port in memory and counts checkout,
//! release, and write activity so tests can assert the pipeline's pool
//! discipline without a database.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use sales_backend::domain::ports::{
    AgentsCommand, AgentsQuery, CompaniesQuery, CustomersQuery, NewAgent, OrdersQuery,
};
use sales_backend::domain::{Agent, Company, Customer, Error, Order};
use sales_backend::inbound::http::state::HttpState;

/// In-memory store standing in for the pooled database.
#[derive(Default)]
pub struct StubStore {
    agents: Vec<Agent>,
    fail_companies: bool,
    checkouts: AtomicUsize,
    releases: AtomicUsize,
    writes: AtomicUsize,
}

impl StubStore {
    /// Store with no rows in any table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store whose agents table holds the given rows.
    pub fn with_agents(agents: Vec<Agent>) -> Self {
        Self {
            agents,
            ..Self::default()
        }
    }

    /// Store whose company reads fail operationally.
    pub fn failing_companies() -> Self {
        Self {
            fail_companies: true,
            ..Self::default()
        }
    }

    /// Number of connection checkouts observed.
    pub fn checkouts(&self) -> usize {
        self.checkouts.load(Ordering::SeqCst)
    }

    /// Number of connection releases observed.
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    /// Number of write commands that reached the store.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn checkout(&self) {
        self.checkouts.fetch_add(1, Ordering::SeqCst);
    }

    fn release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AgentsQuery for StubStore {
    async fn list(&self) -> Result<Vec<Agent>, Error> {
        self.checkout();
        let rows = self.agents.clone();
        self.release();
        Ok(rows)
    }
}

#[async_trait]
impl AgentsCommand for StubStore {
    async fn create(&self, _agent: NewAgent) -> Result<(), Error> {
        self.checkout();
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.release();
        Ok(())
    }

    async fn rename(&self, _agent_code: &str, _agent_name: &str) -> Result<(), Error> {
        self.checkout();
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.release();
        Ok(())
    }

    async fn delete(&self, _agent_code: &str) -> Result<(), Error> {
        self.checkout();
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.release();
        Ok(())
    }
}

#[async_trait]
impl CompaniesQuery for StubStore {
    async fn list(&self) -> Result<Vec<Company>, Error> {
        self.checkout();
        let result = if self.fail_companies {
            Err(Error::internal("simulated database failure"))
        } else {
            Ok(Vec::new())
        };
        self.release();
        result
    }
}

#[async_trait]
impl CustomersQuery for StubStore {
    async fn list(&self) -> Result<Vec<Customer>, Error> {
        self.checkout();
        self.release();
        Ok(Vec::new())
    }
}

#[async_trait]
impl OrdersQuery for StubStore {
    async fn list(&self) -> Result<Vec<Order>, Error> {
        self.checkout();
        self.release();
        Ok(Vec::new())
    }
}

/// Wire every port of [`HttpState`] to the same stub store.
pub fn http_state(store: &Arc<StubStore>) -> HttpState {
    HttpState {
        agents: store.clone(),
        agents_command: store.clone(),
        companies: store.clone(),
        customers: store.clone(),
        orders: store.clone(),
    }
}

/// Agent fixture with only the required columns populated.
pub fn agent(code: &str, name: &str) -> Agent {
    Agent {
        agent_code: code.to_owned(),
        agent_name: name.to_owned(),
        working_area: None,
        commission: None,
        phone_no: None,
        country: None,
    }
}
