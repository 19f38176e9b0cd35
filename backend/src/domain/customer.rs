//! Customer records mirrored from the customer table.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer row. Read-only in the current scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Customer {
    /// Primary key of the customer table.
    #[schema(example = "C00013")]
    pub cust_code: String,
    /// Customer display name.
    #[schema(example = "Holmes")]
    pub cust_name: String,
    /// City of the customer.
    pub cust_city: Option<String>,
    /// Sales territory the customer belongs to.
    pub working_area: Option<String>,
    /// Country of the customer.
    pub cust_country: Option<String>,
    /// Commercial grade assigned by the sales desk.
    pub grade: Option<i32>,
    /// Account opening amount, serialized as a decimal string.
    #[schema(value_type = String, example = "6000.00")]
    pub opening_amt: BigDecimal,
    /// Amount received to date, serialized as a decimal string.
    #[schema(value_type = String, example = "5000.00")]
    pub receive_amt: BigDecimal,
    /// Amount paid out to date, serialized as a decimal string.
    #[schema(value_type = String, example = "7000.00")]
    pub payment_amt: BigDecimal,
    /// Outstanding balance, serialized as a decimal string.
    #[schema(value_type = String, example = "4000.00")]
    pub outstanding_amt: BigDecimal,
    /// Contact phone number.
    pub phone_no: Option<String>,
    /// Code of the agent responsible for this customer.
    pub agent_code: Option<String>,
}
