//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the document endpoints, the health probes, and the
//! envelope wrappers from [`crate::inbound::http::schemas`]. The generated
//! specification is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::documents::{ContentBody, DocumentRequest, DocumentResponse};
use crate::inbound::http::schemas::{
    DocumentEnvelopeSchema, DocumentListEnvelopeSchema, EmptyEnvelopeSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Documents API",
        description = "CRUD interface over signed documents, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::documents::create_document,
        crate::inbound::http::documents::list_documents,
        crate::inbound::http::documents::get_document,
        crate::inbound::http::documents::update_document,
        crate::inbound::http::documents::delete_document,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ContentBody,
        DocumentRequest,
        DocumentResponse,
        DocumentEnvelopeSchema,
        DocumentListEnvelopeSchema,
        EmptyEnvelopeSchema
    )),
    tags(
        (name = "documents", description = "Document lifecycle operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/documents")]
    #[case("/documents/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn openapi_registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[test]
    fn document_item_path_has_three_operations() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/documents/{id}").expect("item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }

    #[test]
    fn document_response_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("DocumentResponse").expect("DocumentResponse schema");

        for field in ["id", "title", "content", "signee"] {
            assert_object_schema_has_field(schema, field);
        }
    }
}
