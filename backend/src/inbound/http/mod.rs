//! HTTP inbound adapter exposing REST endpoints.

pub mod documents;
pub mod envelope;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::{HttpRequest, HttpResponse, web};

use crate::domain::Error;

pub use error::ApiResult;

/// Register the document endpoints and the JSON body configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use documents_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(documents::list_documents)
        .service(documents::create_document)
        .service(documents::get_document)
        .service(documents::update_document)
        .service(documents::delete_document);
}

/// Fallback for requests that match no route, rendered as the 404 envelope.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}
