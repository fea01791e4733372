//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`DocumentCommand`], [`DocumentQuery`]) are what inbound
//! adapters call; the driven port ([`DocumentRepository`]) is what outbound
//! adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod document_command;
mod document_query;
mod document_repository;

pub use document_command::DocumentCommand;
#[cfg(test)]
pub use document_command::{FixtureDocumentCommand, MockDocumentCommand};
pub use document_query::DocumentQuery;
#[cfg(test)]
pub use document_query::{FixtureDocumentQuery, MockDocumentQuery};
pub use document_repository::{DocumentRepository, DocumentRepositoryError};
#[cfg(test)]
pub use document_repository::{FixtureDocumentRepository, MockDocumentRepository};
