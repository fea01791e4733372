//! Port for document persistence.
//!
//! The repository executes the five storage operations and nothing else:
//! existence checks before writes belong to the domain service.

use async_trait::async_trait;

use crate::domain::{Document, DocumentDraft, DocumentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by document repository adapters.
    pub enum DocumentRepositoryError {
        /// No row matches the requested identifier.
        NotFound { id: DocumentId } =>
            "document {id} not found",
        /// Repository connection could not be established.
        Connection { message: String } =>
            "document repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "document repository query failed: {message}",
        /// Stored content could not be encoded or decoded.
        Serialization { message: String } =>
            "document content serialization failed: {message}",
    }
}

/// Port for reading and writing documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Insert a new row and return the document with its assigned id.
    async fn create(&self, draft: DocumentDraft) -> Result<Document, DocumentRepositoryError>;

    /// Load one document, failing with `NotFound` when no row matches.
    async fn get(&self, id: DocumentId) -> Result<Document, DocumentRepositoryError>;

    /// Overwrite the row matching `document.id`.
    ///
    /// Adapters do not check that a row existed and return the input as
    /// given rather than re-reading the row.
    async fn update(&self, document: Document) -> Result<Document, DocumentRepositoryError>;

    /// Remove the row matching `id`.
    async fn delete(&self, id: DocumentId) -> Result<(), DocumentRepositoryError>;

    /// Load every document, in whatever order the store yields them.
    async fn list(&self) -> Result<Vec<Document>, DocumentRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
///
/// Behaves like an empty store that accepts writes without remembering them.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDocumentRepository;

#[cfg(test)]
#[async_trait]
impl DocumentRepository for FixtureDocumentRepository {
    async fn create(&self, draft: DocumentDraft) -> Result<Document, DocumentRepositoryError> {
        Ok(draft.into_document(DocumentId::new(1)))
    }

    async fn get(&self, id: DocumentId) -> Result<Document, DocumentRepositoryError> {
        Err(DocumentRepositoryError::not_found(id))
    }

    async fn update(&self, document: Document) -> Result<Document, DocumentRepositoryError> {
        Ok(document)
    }

    async fn delete(&self, _id: DocumentId) -> Result<(), DocumentRepositoryError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Document>, DocumentRepositoryError> {
        Ok(Vec::new())
    }
}
