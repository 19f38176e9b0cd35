//! Order records mirrored from the orders table.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An order row. Read-only in the current scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Order {
    /// Primary key of the orders table.
    #[schema(example = 200_118)]
    pub ord_num: i32,
    /// Total order amount, serialized as a decimal string.
    #[schema(value_type = String, example = "500.00")]
    pub ord_amount: BigDecimal,
    /// Advance received against the order, serialized as a decimal string.
    #[schema(value_type = String, example = "100.00")]
    pub advance_amount: BigDecimal,
    /// Date the order was placed.
    #[schema(value_type = String, format = Date, example = "2008-07-20")]
    pub ord_date: NaiveDate,
    /// Code of the ordering customer.
    pub cust_code: Option<String>,
    /// Code of the agent who took the order.
    pub agent_code: Option<String>,
    /// Free-text description.
    pub ord_description: Option<String>,
}
