//! Driving port for document write operations.
//!
//! Inbound adapters use this port to create, overwrite, and remove documents
//! without depending on validation or repository details.

use async_trait::async_trait;

use crate::domain::{Document, DocumentDraft, DocumentId, Error};

/// Driving port for document mutations.
///
/// # Examples
///
/// ```rust,no_run
/// use documents_backend::domain::DocumentDraft;
/// use documents_backend::domain::ports::DocumentCommand;
///
/// # async fn example(command: &dyn DocumentCommand) -> Result<(), documents_backend::domain::Error> {
/// let created = command.create(DocumentDraft::new("Lease", "Ana")).await?;
/// assert_eq!(created.title, "Lease");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentCommand: Send + Sync {
    /// Validate and store a new document.
    async fn create(&self, draft: DocumentDraft) -> Result<Document, Error>;

    /// Validate and overwrite an existing document.
    ///
    /// Fails with not-found, without writing, when `document.id` does not
    /// exist.
    async fn update(&self, document: Document) -> Result<Document, Error>;

    /// Remove an existing document.
    ///
    /// Fails with not-found when `id` does not exist.
    async fn delete(&self, id: DocumentId) -> Result<(), Error>;
}

/// Fixture command implementation for tests that do not need persistence.
///
/// Echoes writes back and treats every identifier as present.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDocumentCommand;

#[cfg(test)]
#[async_trait]
impl DocumentCommand for FixtureDocumentCommand {
    async fn create(&self, draft: DocumentDraft) -> Result<Document, Error> {
        Ok(draft.into_document(DocumentId::new(1)))
    }

    async fn update(&self, document: Document) -> Result<Document, Error> {
        Ok(document)
    }

    async fn delete(&self, _id: DocumentId) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[tokio::test]
    async fn fixture_update_echoes_document() {
        let document = DocumentDraft::new("t", "s").into_document(DocumentId::new(3));
        let updated = FixtureDocumentCommand
            .update(document.clone())
            .await
            .expect("fixture update succeeds");
        assert_eq!(updated, document);
    }

    #[tokio::test]
    async fn fixture_delete_succeeds() {
        FixtureDocumentCommand
            .delete(DocumentId::new(3))
            .await
            .expect("fixture delete succeeds");
    }
}
