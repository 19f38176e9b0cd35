//! Agent records mirrored from the agents table.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A sales agent row.
///
/// Field names serialize as the upper-snake column names so responses match
/// the table layout clients already know. The service enforces no invariants
/// of its own; the database owns these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Agent {
    /// Primary key of the agents table.
    #[schema(example = "A007")]
    pub agent_code: String,
    /// Display name of the agent.
    #[schema(example = "Ramasundar")]
    pub agent_name: String,
    /// Sales territory the agent covers.
    pub working_area: Option<String>,
    /// Commission rate, serialized as a decimal string.
    #[schema(value_type = Option<String>, example = "0.15")]
    pub commission: Option<BigDecimal>,
    /// Contact phone number.
    pub phone_no: Option<String>,
    /// Country of residence.
    pub country: Option<String>,
}
