//! Builders for HTTP state from the configured persistence backend.

use std::sync::Arc;

use actix_web::web;

use documents_backend::domain::DocumentService;
use documents_backend::inbound::http::state::HttpState;
use documents_backend::outbound::persistence::DieselDocumentRepository;

use super::ServerConfig;

/// Build handler state backed by the PostgreSQL document repository.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = Arc::new(DieselDocumentRepository::new(config.db_pool.clone()));
    web::Data::new(HttpState::from_service(Arc::new(DocumentService::new(
        repository,
    ))))
}
