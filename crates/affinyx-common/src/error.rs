//! API error taxonomy and its mapping to the wire format.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors a prediction request can terminate with.
///
/// Every variant is rendered at the boundary as the uniform
/// `{success: false, error, code}` JSON body. The internal-fault variant
/// keeps its detail for the logs only; the caller sees a fixed message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("amino acid sequence must be at least 10 characters")]
    InvalidSequence,

    #[error("request timed out. please try again.")]
    Timeout,

    #[error("prediction failed. please try again.")]
    Prediction(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Prediction(err.to_string())
    }
}

impl ApiError {
    /// Machine-readable error token exposed to clients.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidSequence => "invalid_sequence",
            ApiError::Timeout => "timeout",
            ApiError::Prediction(_) => "prediction_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidSequence => StatusCode::BAD_REQUEST,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Prediction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Prediction(ref detail) = self {
            tracing::error!(error = %detail, "prediction pipeline failed");
        }

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
            "code": self.code(),
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_taxonomy() {
        assert_eq!(ApiError::InvalidSequence.code(), "invalid_sequence");
        assert_eq!(ApiError::Timeout.code(), "timeout");
        let internal = ApiError::from(anyhow::anyhow!("boom"));
        assert_eq!(internal.code(), "prediction_error");
    }

    #[test]
    fn test_statuses() {
        assert_eq!(ApiError::InvalidSequence.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
        let internal = ApiError::from(anyhow::anyhow!("boom"));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_detail_never_reaches_the_message() {
        let internal = ApiError::from(anyhow::anyhow!("connection refused on 10.0.0.3"));
        let msg = internal.to_string();
        assert_eq!(msg, "prediction failed. please try again.");
        assert!(!msg.contains("10.0.0.3"));
    }
}
