//! Order read endpoint.

use actix_web::{get, web};

use crate::domain::{Error, Order};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every order row.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Order rows", body = [Order]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/orders")]
pub async fn list_orders(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Order>>> {
    let orders = state.orders.list().await?;
    Ok(web::Json(orders))
}
