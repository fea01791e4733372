//! Document HTTP handlers.
//!
//! ```text
//! POST   /documents
//! GET    /documents
//! GET    /documents/{id}
//! PUT    /documents/{id}
//! DELETE /documents/{id}
//! ```
//!
//! Every reply is an [`Envelope`](crate::inbound::http::envelope::Envelope);
//! failures are rendered by the [`ResponseError`](actix_web::ResponseError)
//! mapping in [`crate::inbound::http::error`].

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Document, DocumentContent, DocumentDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Reply;
use crate::inbound::http::schemas::{
    DocumentEnvelopeSchema, DocumentListEnvelopeSchema, EmptyEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_document_id;

/// Structured document content as exchanged over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ContentBody {
    #[schema(example = "Terms")]
    pub header: String,
    #[schema(example = "The tenant agrees to...")]
    pub data: String,
}

impl From<ContentBody> for DocumentContent {
    fn from(value: ContentBody) -> Self {
        Self::new(value.header, value.data)
    }
}

impl From<DocumentContent> for ContentBody {
    fn from(value: DocumentContent) -> Self {
        Self {
            header: value.header,
            data: value.data,
        }
    }
}

/// Request payload for creating or replacing a document.
///
/// Missing or `null` text fields decode as empty strings and are rejected by
/// domain validation. Any `id` is accepted and ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct DocumentRequest {
    pub id: Option<i64>,
    #[schema(example = "Lease agreement")]
    pub title: Option<String>,
    pub content: Option<ContentBody>,
    #[schema(example = "Ana Lima")]
    pub signee: Option<String>,
}

impl DocumentRequest {
    fn into_draft(self) -> DocumentDraft {
        let Self {
            id: _,
            title,
            content,
            signee,
        } = self;
        DocumentDraft {
            title: title.unwrap_or_default(),
            content: content.map(DocumentContent::from),
            signee: signee.unwrap_or_default(),
        }
    }
}

/// Response payload for a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DocumentResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub title: String,
    pub content: Option<ContentBody>,
    pub signee: String,
}

impl From<Document> for DocumentResponse {
    fn from(value: Document) -> Self {
        Self {
            id: value.id.get(),
            title: value.title,
            content: value.content.map(ContentBody::from),
            signee: value.signee,
        }
    }
}

/// Create a document.
#[utoipa::path(
    post,
    path = "/documents",
    request_body = DocumentRequest,
    responses(
        (status = 201, description = "Document created", body = DocumentEnvelopeSchema),
        (status = 400, description = "Malformed request body", body = EmptyEnvelopeSchema),
        (status = 422, description = "Title or signee is empty", body = EmptyEnvelopeSchema),
        (status = 500, description = "Persistence failure", body = EmptyEnvelopeSchema)
    ),
    tags = ["documents"],
    operation_id = "createDocument"
)]
#[post("/documents")]
pub async fn create_document(
    state: web::Data<HttpState>,
    payload: web::Json<DocumentRequest>,
) -> ApiResult<Reply<DocumentResponse>> {
    let draft = payload.into_inner().into_draft();
    let document = state.documents.create(draft).await?;
    Ok(Reply::created(DocumentResponse::from(document)))
}

/// Replace the document identified by the path.
///
/// The path identifier wins over any `id` in the body. The reply echoes the
/// validated input rather than re-reading the row.
#[utoipa::path(
    put,
    path = "/documents/{id}",
    params(("id" = i64, Path, description = "Document identifier")),
    request_body = DocumentRequest,
    responses(
        (status = 200, description = "Document updated", body = DocumentEnvelopeSchema),
        (status = 400, description = "Malformed request body or identifier", body = EmptyEnvelopeSchema),
        (status = 404, description = "Document not found", body = EmptyEnvelopeSchema),
        (status = 422, description = "Title or signee is empty", body = EmptyEnvelopeSchema),
        (status = 500, description = "Persistence failure", body = EmptyEnvelopeSchema)
    ),
    tags = ["documents"],
    operation_id = "updateDocument"
)]
#[put("/documents/{id}")]
pub async fn update_document(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<DocumentRequest>,
) -> ApiResult<Reply<DocumentResponse>> {
    let id = parse_document_id(&path)?;
    let document = payload.into_inner().into_draft().into_document(id);
    let updated = state.documents.update(document).await?;
    Ok(Reply::ok(DocumentResponse::from(updated)))
}

/// Delete the document identified by the path.
#[utoipa::path(
    delete,
    path = "/documents/{id}",
    params(("id" = i64, Path, description = "Document identifier")),
    responses(
        (status = 200, description = "Document deleted", body = EmptyEnvelopeSchema),
        (status = 400, description = "Malformed identifier", body = EmptyEnvelopeSchema),
        (status = 404, description = "Document not found", body = EmptyEnvelopeSchema),
        (status = 500, description = "Persistence failure", body = EmptyEnvelopeSchema)
    ),
    tags = ["documents"],
    operation_id = "deleteDocument"
)]
#[delete("/documents/{id}")]
pub async fn delete_document(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<Reply<()>> {
    let id = parse_document_id(&path)?;
    state.documents.delete(id).await?;
    Ok(Reply::empty())
}

/// Fetch one document.
#[utoipa::path(
    get,
    path = "/documents/{id}",
    params(("id" = i64, Path, description = "Document identifier")),
    responses(
        (status = 200, description = "Document", body = DocumentEnvelopeSchema),
        (status = 400, description = "Malformed identifier", body = EmptyEnvelopeSchema),
        (status = 404, description = "Document not found", body = EmptyEnvelopeSchema),
        (status = 500, description = "Persistence failure", body = EmptyEnvelopeSchema)
    ),
    tags = ["documents"],
    operation_id = "getDocument"
)]
#[get("/documents/{id}")]
pub async fn get_document(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<Reply<DocumentResponse>> {
    let id = parse_document_id(&path)?;
    let document = state.documents_query.get(id).await?;
    Ok(Reply::ok(DocumentResponse::from(document)))
}

/// List every stored document.
#[utoipa::path(
    get,
    path = "/documents",
    responses(
        (status = 200, description = "All documents", body = DocumentListEnvelopeSchema),
        (status = 500, description = "Persistence failure", body = EmptyEnvelopeSchema)
    ),
    tags = ["documents"],
    operation_id = "listDocuments"
)]
#[get("/documents")]
pub async fn list_documents(state: web::Data<HttpState>) -> ApiResult<Reply<Vec<DocumentResponse>>> {
    let documents = state.documents_query.list().await?;
    Ok(Reply::ok(
        documents.into_iter().map(DocumentResponse::from).collect(),
    ))
}

#[cfg(test)]
#[path = "documents_tests.rs"]
mod tests;
