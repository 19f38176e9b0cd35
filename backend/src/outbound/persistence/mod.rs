//! PostgreSQL persistence adapters built on Diesel and a bb8 pool.
//!
//! Each adapter maps its failures into [`crate::domain::Error`] at this seam.
//! Both checkout and query failures collapse into the opaque internal error;
//! the specific cause is logged here and never surfaced to clients.

mod diesel_agents;
mod diesel_companies;
mod diesel_customers;
mod diesel_orders;
mod models;
mod pool;
pub(crate) mod schema;

use tracing::error;

use crate::domain::Error;

pub use diesel_agents::{DieselAgentsCommand, DieselAgentsQuery};
pub use diesel_companies::DieselCompaniesQuery;
pub use diesel_customers::DieselCustomersQuery;
pub use diesel_orders::DieselOrdersQuery;
pub use pool::{DbPool, PoolConfig, PoolError};

/// Map a pool checkout failure into the opaque domain error, logging the
/// driver detail.
pub(crate) fn checkout_error(err: PoolError) -> Error {
    error!(error = %err, "connection checkout failed");
    Error::internal("connection checkout failed")
}

/// Map a statement failure into the opaque domain error, logging the driver
/// detail.
pub(crate) fn query_error(err: diesel::result::Error) -> Error {
    error!(error = %err, "query execution failed");
    Error::internal("query execution failed")
}
