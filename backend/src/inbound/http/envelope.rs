//! Uniform JSON envelope wrapping every HTTP reply.
//!
//! ```text
//! { "code": 201, "status": true, "data": { ... }, "error": "" }
//! { "code": 404, "status": false, "data": null, "error": "document 7 not found" }
//! ```
//!
//! `code` always equals the HTTP status of the response.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

/// Response envelope shared by successful and failed replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Numeric HTTP status code.
    pub code: u16,
    /// `true` for success, `false` for failure.
    pub status: bool,
    /// Payload, or `null` when there is none.
    pub data: Option<T>,
    /// Error message, or the empty string on success.
    pub error: String,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`.
    pub fn success(code: StatusCode, data: Option<T>) -> Self {
        Self {
            code: code.as_u16(),
            status: true,
            data,
            error: String::new(),
        }
    }

    /// Failed envelope carrying the error message and no payload.
    pub fn failure(code: StatusCode, error: impl Into<String>) -> Self {
        Self {
            code: code.as_u16(),
            status: false,
            data: None,
            error: error.into(),
        }
    }
}

/// Successful handler reply rendered as an [`Envelope`].
///
/// # Examples
/// ```
/// use documents_backend::inbound::http::envelope::Reply;
///
/// let reply = Reply::ok(vec![1, 2, 3]);
/// assert_eq!(reply.status().as_u16(), 200);
/// ```
#[derive(Debug)]
pub struct Reply<T> {
    status: StatusCode,
    data: Option<T>,
}

impl<T> Reply<T> {
    /// `200 OK` carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data: Some(data),
        }
    }

    /// `201 Created` carrying `data`.
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data: Some(data),
        }
    }

    /// HTTP status the reply will be sent with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl Reply<()> {
    /// `200 OK` with a `null` payload.
    pub fn empty() -> Self {
        Self {
            status: StatusCode::OK,
            data: None,
        }
    }
}

impl<T: Serialize> Responder for Reply<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(self.status).json(Envelope::success(self.status, self.data))
    }
}

#[cfg(test)]
mod tests {
    //! Envelope shape checks.

    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn failure_envelope_serialises_null_data() {
        let envelope = Envelope::<()>::failure(StatusCode::NOT_FOUND, "missing");
        let value = serde_json::to_value(envelope).expect("serialise envelope");
        assert_eq!(
            value,
            json!({"code": 404, "status": false, "data": null, "error": "missing"})
        );
    }

    #[rstest]
    fn success_envelope_has_empty_error() {
        let envelope = Envelope::success(StatusCode::CREATED, Some(json!({"id": 1})));
        let value = serde_json::to_value(envelope).expect("serialise envelope");
        assert_eq!(
            value,
            json!({"code": 201, "status": true, "data": {"id": 1}, "error": ""})
        );
    }

    #[actix_web::test]
    async fn empty_reply_renders_null_payload() {
        let req = TestRequest::default().to_http_request();
        let response = Reply::empty().respond_to(&req);
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body()).await.expect("read body");
        let body: Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["status"], Value::Bool(true));
        assert_eq!(body["code"], json!(200));
    }
}
