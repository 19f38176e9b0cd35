//! Diesel-backed adapter for the companies read port.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::CompaniesQuery;
use crate::domain::{Company, Error};

use super::models::CompanyRow;
use super::pool::DbPool;
use super::schema::company;
use super::{checkout_error, query_error};

/// Diesel-backed [`CompaniesQuery`] implementation.
#[derive(Clone)]
pub struct DieselCompaniesQuery {
    pool: DbPool,
}

impl DieselCompaniesQuery {
    /// Create a query adapter over the shared pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompaniesQuery for DieselCompaniesQuery {
    async fn list(&self) -> Result<Vec<Company>, Error> {
        let mut conn = self.pool.get().await.map_err(checkout_error)?;
        let rows = company::table
            .select(CompanyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(query_error)?;
        Ok(rows.into_iter().map(Company::from).collect())
    }
}
