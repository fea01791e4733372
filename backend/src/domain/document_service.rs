//! Document domain service.
//!
//! Sequences validation and repository calls for the document driving
//! ports. Updates and deletes read the row first so a missing identifier is
//! reported as not-found instead of a write that touched nothing. The check
//! and the write are separate statements; a row removed in between is not
//! detected.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{
    DocumentCommand, DocumentQuery, DocumentRepository, DocumentRepositoryError,
};
use crate::domain::{Document, DocumentDraft, DocumentId, Error};

fn map_repository_error(error: DocumentRepositoryError) -> Error {
    match error {
        DocumentRepositoryError::NotFound { .. } => Error::not_found(error.to_string()),
        DocumentRepositoryError::Connection { .. }
        | DocumentRepositoryError::Query { .. }
        | DocumentRepositoryError::Serialization { .. } => {
            error!(error = %error, "document repository failure");
            Error::persistence(error.to_string())
        }
    }
}

/// Document service implementing the command and query driving ports.
#[derive(Clone)]
pub struct DocumentService<R> {
    documents_repo: Arc<R>,
}

impl<R> DocumentService<R> {
    /// Create a new service over the document repository.
    pub fn new(documents_repo: Arc<R>) -> Self {
        Self { documents_repo }
    }
}

impl<R> DocumentService<R>
where
    R: DocumentRepository,
{
    async fn ensure_exists(&self, id: DocumentId) -> Result<(), Error> {
        self.documents_repo
            .get(id)
            .await
            .map(|_| ())
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> DocumentCommand for DocumentService<R>
where
    R: DocumentRepository,
{
    async fn create(&self, draft: DocumentDraft) -> Result<Document, Error> {
        let draft = draft.validate()?;
        let created = self
            .documents_repo
            .create(draft)
            .await
            .map_err(map_repository_error)?;
        info!(document_id = %created.id, "document created");
        Ok(created)
    }

    async fn update(&self, document: Document) -> Result<Document, Error> {
        let document = document.validate()?;
        self.ensure_exists(document.id).await?;
        let updated = self
            .documents_repo
            .update(document)
            .await
            .map_err(map_repository_error)?;
        info!(document_id = %updated.id, "document updated");
        Ok(updated)
    }

    async fn delete(&self, id: DocumentId) -> Result<(), Error> {
        self.ensure_exists(id).await?;
        self.documents_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        info!(document_id = %id, "document deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> DocumentQuery for DocumentService<R>
where
    R: DocumentRepository,
{
    async fn get(&self, id: DocumentId) -> Result<Document, Error> {
        debug!(document_id = %id, "loading document");
        self.documents_repo
            .get(id)
            .await
            .map_err(map_repository_error)
    }

    async fn list(&self) -> Result<Vec<Document>, Error> {
        let documents = self
            .documents_repo
            .list()
            .await
            .map_err(map_repository_error)?;
        debug!(count = documents.len(), "listed documents");
        Ok(documents)
    }
}

#[cfg(test)]
#[path = "document_service_tests.rs"]
mod tests;
