//! Todo backend library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] owns the todo entity,
//! ports and service; [`inbound`] exposes them over HTTP; [`outbound`]
//! provides the in-memory and PostgreSQL repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
