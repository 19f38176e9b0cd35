//! Server construction and middleware wiring.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::inbound::http::agents::{
    create_agent, delete_agent, list_agents, replace_agent, update_agent,
};
use crate::inbound::http::companies::list_companies;
use crate::inbound::http::customers::list_customers;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::orders::list_orders;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselAgentsCommand, DieselAgentsQuery, DieselCompaniesQuery, DieselCustomersQuery,
    DieselOrdersQuery,
};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    state: HttpState,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and handler state.
    pub fn new(bind_addr: SocketAddr, state: HttpState) -> Self {
        Self { bind_addr, state }
    }

    /// Return the socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Wire every port to its Diesel adapter over the shared pool.
pub fn diesel_state(pool: &DbPool) -> HttpState {
    HttpState {
        agents: Arc::new(DieselAgentsQuery::new(pool.clone())),
        agents_command: Arc::new(DieselAgentsCommand::new(pool.clone())),
        companies: Arc::new(DieselCompaniesQuery::new(pool.clone())),
        customers: Arc::new(DieselCustomersQuery::new(pool.clone())),
        orders: Arc::new(DieselOrdersQuery::new(pool.clone())),
    }
}

/// Assemble the application: permissive CORS on every route, the resource
/// handlers, health probes, and Swagger UI at `/api-docs`.
pub fn build_app(
    health_state: web::Data<HealthState>,
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(web::Data::new(state))
        .wrap(Cors::permissive())
        .service(list_agents)
        .service(create_agent)
        .service(update_agent)
        .service(replace_agent)
        .service(delete_agent)
        .service(list_companies)
        .service(list_customers)
        .service(list_orders)
        .service(ready)
        .service(live)
        .service(web::redirect("/api-docs", "/api-docs/"))
        .service(SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();
    let ServerConfig { bind_addr, state } = config;

    let server = HttpServer::new(move || build_app(server_health_state.clone(), state.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
