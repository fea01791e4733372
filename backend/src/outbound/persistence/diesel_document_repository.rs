//! PostgreSQL-backed `DocumentRepository` implementation using Diesel ORM.
//!
//! Content is stored as serialised JSON text in a single column and decoded
//! on read. Driver errors are logged here and replaced by category messages
//! before they reach the domain.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{DocumentRepository, DocumentRepositoryError};
use crate::domain::{Document, DocumentContent, DocumentDraft, DocumentId};

use super::models::{DocumentRow, DocumentUpdate, NewDocumentRow};
use super::pool::{DbPool, PoolError};
use super::schema::documents;

/// Diesel-backed implementation of the document repository port.
#[derive(Clone)]
pub struct DieselDocumentRepository {
    pool: DbPool,
}

impl DieselDocumentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DocumentRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    debug!(%message, "document pool checkout failed");
    DocumentRepositoryError::connection("database connection error")
}

fn map_diesel_error(error: diesel::result::Error) -> DocumentRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => DocumentRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => DocumentRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DocumentRepositoryError::connection("database connection error")
        }
        _ => DocumentRepositoryError::query("database error"),
    }
}

fn encode_content(content: Option<&DocumentContent>) -> Result<String, DocumentRepositoryError> {
    serde_json::to_string(&content)
        .map_err(|err| DocumentRepositoryError::serialization(format!("encode content: {err}")))
}

fn decode_content(raw: &str) -> Result<Option<DocumentContent>, DocumentRepositoryError> {
    serde_json::from_str(raw)
        .map_err(|err| DocumentRepositoryError::serialization(format!("decode content: {err}")))
}

/// Convert a database row into a domain document.
fn row_to_document(row: DocumentRow) -> Result<Document, DocumentRepositoryError> {
    let DocumentRow {
        id,
        title,
        content,
        signee,
    } = row;

    Ok(Document {
        id: DocumentId::new(id),
        title,
        content: decode_content(&content)?,
        signee,
    })
}

#[async_trait]
impl DocumentRepository for DieselDocumentRepository {
    async fn create(&self, draft: DocumentDraft) -> Result<Document, DocumentRepositoryError> {
        let content = encode_content(draft.content.as_ref())?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewDocumentRow {
            title: &draft.title,
            content: &content,
            signee: &draft.signee,
        };

        let id: i64 = diesel::insert_into(documents::table)
            .values(&new_row)
            .returning(documents::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(draft.into_document(DocumentId::new(id)))
    }

    async fn get(&self, id: DocumentId) -> Result<Document, DocumentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = documents::table
            .filter(documents::id.eq(id.get()))
            .select(DocumentRow::as_select())
            .first::<DocumentRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .ok_or_else(|| DocumentRepositoryError::not_found(id))?;

        row_to_document(row)
    }

    async fn update(&self, document: Document) -> Result<Document, DocumentRepositoryError> {
        let content = encode_content(document.content.as_ref())?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = DocumentUpdate {
            title: &document.title,
            content: &content,
            signee: &document.signee,
        };

        let affected = diesel::update(documents::table.filter(documents::id.eq(document.id.get())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(document_id = %document.id, affected, "document update executed");

        Ok(document)
    }

    async fn delete(&self, id: DocumentId) -> Result<(), DocumentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(documents::table.filter(documents::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(document_id = %id, affected, "document delete executed");

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Document>, DocumentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DocumentRow> = documents::table
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_document).collect()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn valid_row() -> DocumentRow {
        DocumentRow {
            id: 1,
            title: "Document 1".to_owned(),
            content: r#"{"header":"header","data":"data"}"#.to_owned(),
            signee: "Signee 1".to_owned(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(repo_err, DocumentRepositoryError::Connection { .. }));
        assert!(!repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, DocumentRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn row_conversion_decodes_content(valid_row: DocumentRow) {
        let document = row_to_document(valid_row).expect("valid row");

        assert_eq!(document.id, DocumentId::new(1));
        assert_eq!(document.title, "Document 1");
        assert_eq!(document.signee, "Signee 1");
        assert_eq!(
            document.content,
            Some(DocumentContent::new("header", "data"))
        );
    }

    #[rstest]
    fn row_conversion_accepts_null_content(mut valid_row: DocumentRow) {
        valid_row.content = "null".to_owned();

        let document = row_to_document(valid_row).expect("null content is valid");
        assert!(document.content.is_none());
    }

    #[rstest]
    fn row_conversion_rejects_malformed_content(mut valid_row: DocumentRow) {
        valid_row.content = "{not json".to_owned();

        let error = row_to_document(valid_row).expect_err("malformed content fails");
        assert!(matches!(
            error,
            DocumentRepositoryError::Serialization { .. }
        ));
        assert!(error.to_string().contains("decode content"));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(DocumentContent::new("h", "d")))]
    #[case(Some(DocumentContent::new("", "")))]
    fn content_encoding_is_lossless(#[case] content: Option<DocumentContent>) {
        let encoded = encode_content(content.as_ref()).expect("encode");
        let decoded = decode_content(&encoded).expect("decode");
        assert_eq!(decoded, content);
    }
}
