//! OpenAPI schema definitions for response envelopes.
//!
//! [`Envelope`](crate::inbound::http::envelope::Envelope) is generic, so each
//! concrete payload shape gets a wrapper here for utoipa to register. The
//! wrappers mirror the envelope fields and are never constructed.

use utoipa::ToSchema;

use crate::inbound::http::documents::DocumentResponse;

/// Envelope carrying a single document.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DocumentEnvelopeSchema {
    /// HTTP status code of the response.
    #[schema(example = 200)]
    code: u16,
    /// Whether the request succeeded.
    #[schema(example = true)]
    status: bool,
    /// The document, or `null` on failure.
    data: Option<DocumentResponse>,
    /// Error message, empty on success.
    #[schema(example = "")]
    error: String,
}

/// Envelope carrying every stored document.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DocumentListEnvelopeSchema {
    /// HTTP status code of the response.
    #[schema(example = 200)]
    code: u16,
    /// Whether the request succeeded.
    #[schema(example = true)]
    status: bool,
    /// Stored documents, or `null` on failure.
    data: Option<Vec<DocumentResponse>>,
    /// Error message, empty on success.
    #[schema(example = "")]
    error: String,
}

/// Envelope with a `null` payload, used for deletes, probes, and failures.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmptyEnvelopeSchema {
    /// HTTP status code of the response.
    #[schema(example = 404)]
    code: u16,
    /// Whether the request succeeded.
    #[schema(example = false)]
    status: bool,
    /// Always `null`.
    data: Option<serde_json::Value>,
    /// Error message, empty on success.
    #[schema(example = "document 7 not found")]
    error: String,
}
