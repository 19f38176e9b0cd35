//! Company records mirrored from the company table.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A company row. Read-only in the current scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Company {
    /// Primary key of the company table.
    #[schema(example = "18")]
    pub company_id: String,
    /// Registered company name.
    #[schema(example = "Order All")]
    pub company_name: String,
    /// City the company operates from.
    pub company_city: Option<String>,
}
