//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DocumentCommand, DocumentQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub documents: Arc<dyn DocumentCommand>,
    pub documents_query: Arc<dyn DocumentQuery>,
}

impl HttpState {
    /// Construct state from explicit command and query ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use documents_backend::domain::DocumentService;
    /// use documents_backend::inbound::http::state::HttpState;
    /// use documents_backend::outbound::persistence::{DbPool, DieselDocumentRepository};
    ///
    /// fn state(pool: DbPool) -> HttpState {
    ///     let repository = Arc::new(DieselDocumentRepository::new(pool));
    ///     let service = Arc::new(DocumentService::new(repository));
    ///     HttpState::new(service.clone(), service)
    /// }
    /// ```
    pub fn new(
        documents: Arc<dyn DocumentCommand>,
        documents_query: Arc<dyn DocumentQuery>,
    ) -> Self {
        Self {
            documents,
            documents_query,
        }
    }

    /// Construct state from one service implementing both ports.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: DocumentCommand + DocumentQuery + 'static,
    {
        Self {
            documents: service.clone(),
            documents_query: service,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::HttpState;
    use crate::domain::ports::{DocumentCommand, DocumentQuery, MockDocumentRepository};
    use crate::domain::{DocumentDraft, DocumentId, DocumentService};

    #[tokio::test]
    async fn service_state_reads_back_its_own_writes() {
        let mut repo = MockDocumentRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|draft| Ok(draft.into_document(DocumentId::new(3))));
        repo.expect_get()
            .times(1)
            .returning(|id| Ok(DocumentDraft::new("Lease", "Ana").into_document(id)));
        let state = HttpState::from_service(Arc::new(DocumentService::new(Arc::new(repo))));

        let created = state
            .documents
            .create(DocumentDraft::new("Lease", "Ana"))
            .await
            .expect("create succeeds");
        let fetched = state
            .documents_query
            .get(created.id)
            .await
            .expect("get succeeds");

        assert_eq!(fetched, created);
    }
}
