//! Diesel-backed adapter for the customers read port.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::CustomersQuery;
use crate::domain::{Customer, Error};

use super::models::CustomerRow;
use super::pool::DbPool;
use super::schema::customer;
use super::{checkout_error, query_error};

/// Diesel-backed [`CustomersQuery`] implementation.
#[derive(Clone)]
pub struct DieselCustomersQuery {
    pool: DbPool,
}

impl DieselCustomersQuery {
    /// Create a query adapter over the shared pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomersQuery for DieselCustomersQuery {
    async fn list(&self) -> Result<Vec<Customer>, Error> {
        let mut conn = self.pool.get().await.map_err(checkout_error)?;
        let rows = customer::table
            .select(CustomerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(query_error)?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}
