//! HTTP error responses for the proxy endpoints

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::Error;

/// Error returned by JSON endpoints, always rendered as `{"error": "..."}`
#[derive(Debug)]
pub enum ProxyError {
    /// Rejected before any upstream call
    BadRequest(String),

    /// Upstream call failed; details are logged, the client sees `message`
    Upstream { message: &'static str, source: Error },
}

impl ProxyError {
    pub fn upstream(message: &'static str, source: impl Into<Error>) -> Self {
        Self::Upstream {
            message,
            source: source.into(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ProxyError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ProxyError::Upstream { message, source } => {
                log::error!("{}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
