//! CRUD HTTP API over the sample sales tables with Swagger documentation.
//!
//! Each request follows one linear pipeline: declarative body validation
//! (where the route declares rules), one pooled connection checkout, one
//! statement, strict release on every exit path, and structured response
//! shaping. Handlers depend on domain ports so tests substitute stubs for
//! the Diesel adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
