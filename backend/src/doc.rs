//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. It
//! registers every handler path, the record and error schemas, and the
//! per-resource tags. Swagger UI serves the generated document at
//! `/api-docs`.

use utoipa::OpenApi;

use crate::domain::{Agent, Company, Customer, Error, ErrorCode, Order};
use crate::inbound::http::agents::{CreateAgentRequest, UpdateAgentRequest};
use crate::inbound::http::validation::FieldViolation;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sales backend API",
        description = "CRUD interface over the sample sales tables (agents, companies, customers, orders)."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::agents::list_agents,
        crate::inbound::http::agents::create_agent,
        crate::inbound::http::agents::update_agent,
        crate::inbound::http::agents::replace_agent,
        crate::inbound::http::agents::delete_agent,
        crate::inbound::http::companies::list_companies,
        crate::inbound::http::customers::list_customers,
        crate::inbound::http::orders::list_orders,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Agent,
        Company,
        Customer,
        Order,
        Error,
        ErrorCode,
        FieldViolation,
        CreateAgentRequest,
        UpdateAgentRequest,
    )),
    tags(
        (name = "agents", description = "Operations on the agents table"),
        (name = "companies", description = "Read access to the company table"),
        (name = "customers", description = "Read access to the customer table"),
        (name = "orders", description = "Read access to the orders table"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying path and schema registration.
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/agents",
            "/agents/{agent_code}",
            "/companies",
            "/customers",
            "/orders",
            "/healthz/ready",
            "/healthz/live",
        ] {
            assert!(paths.contains_key(path), "missing documented path {path}");
        }
    }

    #[test]
    fn record_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        for name in ["Agent", "Company", "Customer", "Order", "Error"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
