//! Diesel-backed adapter for the orders read port.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::OrdersQuery;
use crate::domain::{Error, Order};

use super::models::OrderRow;
use super::pool::DbPool;
use super::schema::orders;
use super::{checkout_error, query_error};

/// Diesel-backed [`OrdersQuery`] implementation.
#[derive(Clone)]
pub struct DieselOrdersQuery {
    pool: DbPool,
}

impl DieselOrdersQuery {
    /// Create a query adapter over the shared pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrdersQuery for DieselOrdersQuery {
    async fn list(&self) -> Result<Vec<Order>, Error> {
        let mut conn = self.pool.get().await.map_err(checkout_error)?;
        let rows = orders::table
            .select(OrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(query_error)?;
        Ok(rows.into_iter().map(Order::from).collect())
    }
}
