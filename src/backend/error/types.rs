/**
 * Backend Error Types
 *
 * This module defines the errors a request can end in. Each variant maps to
 * one HTTP status; clients can tell "target missing" (404) and
 * "unauthorized" (403) apart, while every other failure, including a
 * malformed request body, is a plain 500.
 *
 * # Error Categories
 *
 * - `NotFound` - the id does not resolve to a record
 * - `Forbidden` - missing identity on a guarded route, bad credentials,
 *   or a credential that fails verification anywhere it is supplied
 * - everything else - internal failure
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::{CollectionKind, StoreError};
use crate::shared::model::RecordId;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use boardcast::backend::error::BackendError;
///
/// let err = BackendError::forbidden("Authentication required");
/// assert_eq!(err.status_code().as_u16(), 403);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The targeted record does not exist
    #[error("{collection} record '{id}' not found")]
    NotFound {
        collection: CollectionKind,
        id: RecordId,
    },

    /// The request is not allowed
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// A supplied token failed verification
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failed
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Record store failure other than a missing record
    #[error("Store error: {0}")]
    Store(StoreError),

    /// Anything else, including unreadable request bodies
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { collection, id } => Self::NotFound { collection, id },
            other => Self::Store(other),
        }
    }
}

impl BackendError {
    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `Forbidden` - 403 Forbidden
    /// - `Token` - 403 Forbidden
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden { .. } | Self::Token(_) => StatusCode::FORBIDDEN,
            Self::PasswordHash(_) | Self::Store(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error message sent to the client
    ///
    /// Internal details stay in the logs; clients only learn the category.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { .. } => self.to_string(),
            Self::Forbidden { message } => message.clone(),
            Self::Token(_) => "Invalid token".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}
