//! Driving port for document read operations.

use async_trait::async_trait;

use crate::domain::{Document, DocumentId, Error};

/// Driving port for document reads.
///
/// # Examples
///
/// ```rust,no_run
/// use documents_backend::domain::ports::DocumentQuery;
///
/// # async fn example(query: &dyn DocumentQuery) -> Result<(), documents_backend::domain::Error> {
/// for document in query.list().await? {
///     println!("{}: {}", document.id, document.title);
/// }
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentQuery: Send + Sync {
    /// Fetch one document by identifier.
    async fn get(&self, id: DocumentId) -> Result<Document, Error>;

    /// Fetch every document; an empty store yields an empty list.
    async fn list(&self) -> Result<Vec<Document>, Error>;
}

/// Fixture query implementation backed by an empty store.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDocumentQuery;

#[cfg(test)]
#[async_trait]
impl DocumentQuery for FixtureDocumentQuery {
    async fn get(&self, id: DocumentId) -> Result<Document, Error> {
        Err(Error::not_found(format!("document {id} not found")))
    }

    async fn list(&self) -> Result<Vec<Document>, Error> {
        Ok(Vec::new())
    }
}
