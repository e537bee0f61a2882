//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use realmeet_domain::error::{FieldViolation, RealmeetError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldViolation>>,
}

/// Maps [`RealmeetError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(RealmeetError);

impl From<RealmeetError> for ApiError {
    fn from(err: RealmeetError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            RealmeetError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: err.to_string(),
                    fields: Some(err.violations().to_vec()),
                },
            ),
            RealmeetError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: err.to_string(),
                    fields: None,
                },
            ),
            RealmeetError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal server error".to_string(),
                        fields: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
