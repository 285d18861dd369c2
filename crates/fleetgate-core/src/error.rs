//! Unified application error types for FleetGate.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Expected authorization outcomes
//! (missing token, insufficient permissions, unresolvable role) are *not*
//! errors — they travel as sentinel return values so a guarded handler
//! never runs partially. Only infrastructure failures become `AppError`s
//! that cross the API boundary.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Authentication failed (missing or invalid token, bad credentials).
    Authentication,
    /// The caller does not have permission to perform the action.
    Authorization,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (duplicate entry, concurrent modification, etc.).
    Conflict,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Authorization => write!(f, "AUTHORIZATION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// Coarse categorization of persistent-store failures.
///
/// The category is safe to show to users; the raw driver error is logged
/// at the boundary and never serialized into a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StoreFailureCategory {
    /// Could not reach the store (network, pool exhaustion, timeouts).
    Connection,
    /// The store rejected the operation for lack of privilege.
    Permission,
    /// The store rejected the credentials of the application itself.
    Authentication,
    /// Anything else.
    Unknown,
}

impl StoreFailureCategory {
    /// Generic user-safe message for this category.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Connection => "Database connection failed",
            Self::Permission => "Database permission denied",
            Self::Authentication => "Database authentication failed",
            Self::Unknown => "Database operation failed",
        }
    }
}

impl fmt::Display for StoreFailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection => write!(f, "connection"),
            Self::Permission => write!(f, "permission"),
            Self::Authentication => write!(f, "authentication"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// The unified application error used throughout FleetGate.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message, safe to surface to callers.
    pub message: String,
    /// Store failure categorization, present only for `ErrorKind::Database`.
    pub store_category: Option<StoreFailureCategory>,
    /// Optional underlying cause. Logged, never serialized.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            store_category: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            store_category: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a categorized database error.
    ///
    /// The message carried here is the category's generic user-safe text;
    /// callers attach the raw driver error as the source for logging.
    pub fn store_failure(
        category: StoreFailureCategory,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind: ErrorKind::Database,
            message: category.user_message().to_string(),
            store_category: Some(category),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            store_category: self.store_category,
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
}

impl ApiErrorResponse {
    /// Build a response body with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

// Lives here (not in fleetgate-api) because the orphan rule requires the
// impl to be in the crate that defines `AppError`.
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let (status, message) = match self.kind {
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, self.message.clone()),
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, self.message.clone()),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, self.message.clone()),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, self.message.clone()),
            ErrorKind::Conflict => (StatusCode::CONFLICT, self.message.clone()),
            // The message is already the category's generic user-safe text.
            ErrorKind::Database => (StatusCode::INTERNAL_SERVER_ERROR, self.message.clone()),
            ErrorKind::Configuration | ErrorKind::Serialization | ErrorKind::Internal => {
                tracing::error!(error = %self, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, axum::Json(ApiErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failure_keeps_generic_message() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "tcp 5432 refused");
        let err = AppError::store_failure(StoreFailureCategory::Connection, inner);
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Database connection failed");
        assert!(!err.message.contains("5432"));
    }
}
