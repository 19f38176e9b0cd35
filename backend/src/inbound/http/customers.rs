//! Customer read endpoint.

use actix_web::{get, web};

use crate::domain::{Customer, Error};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every customer row.
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "Customer rows", body = [Customer]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["customers"],
    operation_id = "listCustomers"
)]
#[get("/customers")]
pub async fn list_customers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Customer>>> {
    let customers = state.customers.list().await?;
    Ok(web::Json(customers))
}
