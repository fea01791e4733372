//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request malformation is detected here, before any service call, and
//! reported as [`Error::invalid_request`].

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::{DocumentId, Error};

/// Parse a path segment into a [`DocumentId`].
///
/// Any base-10 `i64` is accepted, including ids that do not exist.
///
/// # Examples
/// ```
/// use documents_backend::inbound::http::validation::parse_document_id;
///
/// assert_eq!(parse_document_id("12").expect("numeric").get(), 12);
/// assert!(parse_document_id("abc").is_err());
/// ```
pub fn parse_document_id(raw: &str) -> Result<DocumentId, Error> {
    raw.parse::<i64>()
        .map(DocumentId::new)
        .map_err(|_| Error::invalid_request(format!("invalid document id: {raw}")))
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected request body");
    Error::invalid_request(format!("malformed request body: {err}")).into()
}

/// JSON extractor configuration shared by every write endpoint.
///
/// Bodies are decoded regardless of the declared content type, and decoding
/// failures are rendered as the 400 envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error)
}
