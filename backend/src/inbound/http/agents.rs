//! Agent endpoints.
//!
//! ```text
//! GET    /agents
//! POST   /agents
//! PATCH  /agents/{agent_code}
//! PUT    /agents/{agent_code}
//! DELETE /agents/{agent_code}
//! ```
//!
//! Write routes validate their body against the declared rule set, hand the
//! payload to the command port, and answer with a plain confirmation. The
//! statements behind the command port are stubs for now.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::NewAgent;
use crate::domain::{Agent, Error};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldRule, string_field, validate};

const AGENT_CODE: &str = "AGENT_CODE";
const AGENT_NAME: &str = "AGENT_NAME";

/// Rules applied to agent create requests.
pub const CREATE_AGENT_RULES: &[FieldRule] = &[
    FieldRule::required_string(AGENT_CODE),
    FieldRule::required_string(AGENT_NAME),
];

/// Rules applied to agent update requests.
pub const UPDATE_AGENT_RULES: &[FieldRule] = &[FieldRule::required_string(AGENT_NAME)];

/// Documented shape of the agent create body.
///
/// Handlers validate the raw JSON body against [`CREATE_AGENT_RULES`] rather
/// than deserializing this type, so every violation is reported at once.
#[derive(Debug, ToSchema)]
#[schema(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CreateAgentRequest {
    /// Primary key of the new agent.
    #[schema(example = "A013")]
    pub agent_code: String,
    /// Display name of the new agent.
    #[schema(example = "Benjamin")]
    pub agent_name: String,
}

/// Documented shape of the agent update body.
#[derive(Debug, ToSchema)]
#[schema(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct UpdateAgentRequest {
    /// Replacement display name.
    #[schema(example = "Benjamin")]
    pub agent_name: String,
}

/// Borrow a field the rule set has already proven to be a string.
fn required_text(body: &Value, field: &str) -> Result<String, ApiError> {
    string_field(body, field)
        .map(str::to_owned)
        .ok_or_else(|| Error::internal(format!("validated field {field} missing")).into())
}

/// List every agent row.
#[utoipa::path(
    get,
    path = "/agents",
    responses(
        (status = 200, description = "Agent rows", body = [Agent]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["agents"],
    operation_id = "listAgents"
)]
#[get("/agents")]
pub async fn list_agents(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Agent>>> {
    let agents = state.agents.list().await?;
    Ok(web::Json(agents))
}

/// Create an agent row.
#[utoipa::path(
    post,
    path = "/agents",
    request_body = CreateAgentRequest,
    responses(
        (status = 200, description = "Confirmation text"),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["agents"],
    operation_id = "createAgent"
)]
#[post("/agents")]
pub async fn create_agent(
    state: web::Data<HttpState>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    validate(CREATE_AGENT_RULES, &body).map_err(ApiError::validation)?;
    let agent = NewAgent {
        agent_code: required_text(&body, AGENT_CODE)?,
        agent_name: required_text(&body, AGENT_NAME)?,
    };
    state.agents_command.create(agent).await?;
    Ok(HttpResponse::Ok().body("agent record accepted"))
}

/// Update the display name of an agent.
#[utoipa::path(
    patch,
    path = "/agents/{agent_code}",
    request_body = UpdateAgentRequest,
    params(("agent_code" = String, Path, description = "Primary key of the agent")),
    responses(
        (status = 200, description = "Confirmation text"),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["agents"],
    operation_id = "updateAgent"
)]
#[patch("/agents/{agent_code}")]
pub async fn update_agent(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    validate(UPDATE_AGENT_RULES, &body).map_err(ApiError::validation)?;
    let agent_name = required_text(&body, AGENT_NAME)?;
    state.agents_command.rename(&path, &agent_name).await?;
    Ok(HttpResponse::Ok().body("agent record updated"))
}

/// Replace the display name of an agent.
///
/// Mirrors the PATCH route; both carry the same rule set and reach the same
/// command.
#[utoipa::path(
    put,
    path = "/agents/{agent_code}",
    request_body = UpdateAgentRequest,
    params(("agent_code" = String, Path, description = "Primary key of the agent")),
    responses(
        (status = 200, description = "Confirmation text"),
        (status = 400, description = "Field validation failed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["agents"],
    operation_id = "replaceAgent"
)]
#[put("/agents/{agent_code}")]
pub async fn replace_agent(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    validate(UPDATE_AGENT_RULES, &body).map_err(ApiError::validation)?;
    let agent_name = required_text(&body, AGENT_NAME)?;
    state.agents_command.rename(&path, &agent_name).await?;
    Ok(HttpResponse::Ok().body("agent record updated"))
}

/// Delete an agent row.
#[utoipa::path(
    delete,
    path = "/agents/{agent_code}",
    params(("agent_code" = String, Path, description = "Primary key of the agent")),
    responses(
        (status = 200, description = "Confirmation text"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["agents"],
    operation_id = "deleteAgent"
)]
#[delete("/agents/{agent_code}")]
pub async fn delete_agent(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.agents_command.delete(&path).await?;
    Ok(HttpResponse::Ok().body("agent record deleted"))
}
