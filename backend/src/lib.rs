//! Document service library modules.
//!
//! - [`domain`]: document model, validation, ports, and the service.
//! - [`outbound`]: PostgreSQL persistence adapter.
//! - [`inbound`]: Actix Web handlers and response envelope.
//! - [`middleware`]: request tracing.
//! - [`config`]: startup settings.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
