//! Domain primitives, ports, and services.
//!
//! Purpose: define the document aggregate, its validation rule, and the
//! service that sequences validation with persistence. Nothing here depends
//! on Actix or Diesel; adapters translate to and from these types.
//!
//! Public surface:
//! - Document, DocumentDraft, DocumentContent, DocumentId: the aggregate.
//! - Error, ErrorCode: transport-agnostic failures.
//! - DocumentService: implementation of the driving ports in [`ports`].

pub mod document;
pub mod document_service;
pub mod error;
pub mod ports;

pub use self::document::{Document, DocumentContent, DocumentDraft, DocumentId};
pub use self::document_service::DocumentService;
pub use self::error::{Error, ErrorCode, SIGNEE_INVALID_MESSAGE, TITLE_INVALID_MESSAGE};

