//! Application error type and its HTTP representation.
//!
//! Every layer returns [`AppError`]. Handlers let axum render it through
//! [`IntoResponse`] as a JSON envelope:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Redirect not found", "details": {} } }
//! ```

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::db_error::{
    SLUG_UNIQUE_CONSTRAINT, is_connectivity_error, is_unique_violation_on_slug,
};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input, including an unusable target URL at resolution time.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Record absent, or owned by someone else on a by-id read.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Missing, unknown or revoked bearer token.
    #[error("{message}")]
    Unauthenticated { message: String, details: Value },

    /// Authenticated caller does not own the record it tries to modify.
    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Persistence is unreachable or misconfigured.
    #[error("{message}")]
    StoreUnavailable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unauthenticated(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthenticated {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Unique violation on the slug constraint, shared by every store.
    pub fn slug_taken() -> Self {
        Self::conflict(
            "Slug is already taken",
            json!({ "constraint": SLUG_UNIQUE_CONSTRAINT }),
        )
    }

    /// Returns true for a unique violation on the given constraint.
    pub fn is_conflict_on(&self, constraint: &str) -> bool {
        match self {
            AppError::Conflict { details, .. } => {
                details.get("constraint").and_then(Value::as_str) == Some(constraint)
            }
            _ => false,
        }
    }

    fn parts(&self) -> (StatusCode, &'static str, &str, &Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message.as_str(),
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message.as_str(), details)
            }
            AppError::Unauthenticated { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthenticated", message.as_str(), details)
            }
            AppError::Unauthorized { message, details } => {
                (StatusCode::FORBIDDEN, "unauthorized", message.as_str(), details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message.as_str(), details)
            }
            AppError::StoreUnavailable { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                message.as_str(),
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message.as_str(),
                details,
            ),
        }
    }

    /// HTTP status this error renders with.
    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    /// Serializable error payload, as embedded in the response envelope.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message: message.to_string(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();

        // RFC 6750
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", details)
    }
}

/// Classifies a database error into the application taxonomy.
///
/// - unique violations become [`AppError::Conflict`] carrying the constraint name
/// - connection-level failures become [`AppError::StoreUnavailable`]
/// - everything else is [`AppError::Internal`]
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if is_unique_violation_on_slug(&e) {
        return AppError::slug_taken();
    }

    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    if is_connectivity_error(&e) {
        tracing::error!(error = %e, "Database unreachable");
        return AppError::store_unavailable("Storage is unavailable", json!({}));
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error", json!({}))
}
