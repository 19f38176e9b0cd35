//! Company read endpoint.

use actix_web::{get, web};

use crate::domain::{Company, Error};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every company row.
#[utoipa::path(
    get,
    path = "/companies",
    responses(
        (status = 200, description = "Company rows", body = [Company]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["companies"],
    operation_id = "listCompanies"
)]
#[get("/companies")]
pub async fn list_companies(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Company>>> {
    let companies = state.companies.list().await?;
    Ok(web::Json(companies))
}
