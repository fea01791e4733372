//! In-memory document repository used by the end-to-end HTTP suite.
//!
//! Mirrors the PostgreSQL adapter's observable behaviour: ids are assigned
//! from 1 upwards and updates of unknown ids are silently ignored. `list`
//! happens to follow id order here, but callers must not rely on any order.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use documents_backend::domain::ports::{DocumentRepository, DocumentRepositoryError};
use documents_backend::domain::{Document, DocumentDraft, DocumentId};

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<DocumentId, Document>,
}

/// Thread-safe map-backed repository.
#[derive(Default)]
pub struct InMemoryDocumentRepository {
    store: Mutex<Store>,
}

impl InMemoryDocumentRepository {
    fn with_store<T>(&self, f: impl FnOnce(&mut Store) -> T) -> T {
        let mut store = self.store.lock().expect("document store lock poisoned");
        f(&mut store)
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.with_store(|store| store.rows.len())
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn create(&self, draft: DocumentDraft) -> Result<Document, DocumentRepositoryError> {
        Ok(self.with_store(|store| {
            store.next_id += 1;
            let document = draft.into_document(DocumentId::new(store.next_id));
            store.rows.insert(document.id, document.clone());
            document
        }))
    }

    async fn get(&self, id: DocumentId) -> Result<Document, DocumentRepositoryError> {
        self.with_store(|store| store.rows.get(&id).cloned())
            .ok_or_else(|| DocumentRepositoryError::not_found(id))
    }

    async fn update(&self, document: Document) -> Result<Document, DocumentRepositoryError> {
        self.with_store(|store| {
            if let Some(row) = store.rows.get_mut(&document.id) {
                *row = document.clone();
            }
        });
        Ok(document)
    }

    async fn delete(&self, id: DocumentId) -> Result<(), DocumentRepositoryError> {
        self.with_store(|store| store.rows.remove(&id));
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Document>, DocumentRepositoryError> {
        Ok(self.with_store(|store| store.rows.values().cloned().collect()))
    }
}
