use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use gazette_core::GazetteError;

// Uniform JSON error envelope shared by every handler.
pub(crate) struct ApiFailure(pub GazetteError);

impl From<GazetteError> for ApiFailure {
    fn from(err: GazetteError) -> Self {
        Self(err)
    }
}

const fn classify(err: &GazetteError) -> (StatusCode, &'static str) {
    match err {
        GazetteError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        GazetteError::Unauthenticated { .. } => (StatusCode::UNAUTHORIZED, "unauthenticated"),
        GazetteError::Forbidden { .. } => (StatusCode::FORBIDDEN, "forbidden"),
        GazetteError::InvalidArg(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
        GazetteError::Unsupported { .. } => (StatusCode::NOT_IMPLEMENTED, "unsupported"),
        GazetteError::Store { .. } => (StatusCode::BAD_GATEWAY, "store_error"),
        GazetteError::Other(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let (status, code) = classify(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "error": { "code": code, "message": self.0.to_string() }
        }));
        (status, body).into_response()
    }
}
