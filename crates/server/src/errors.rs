use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::{debug, error};

/// Body text for every 404, whichever collection missed.
pub const NOT_FOUND_MESSAGE: &str = "Item not found";

/// Handler error rendered as `{"error": ...}`.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            // Malformed bodies stay a server-side failure, but a structured one.
            ServiceError::MissingField(_) | ServiceError::InvalidField { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match &self.0 {
            ServiceError::NotFound { .. } => {
                debug!(error = %self.0, "lookup miss");
                NOT_FOUND_MESSAGE.to_string()
            }
            other => {
                error!(error = %other, status = status.as_u16(), "malformed request body");
                other.to_string()
            }
        };
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}
