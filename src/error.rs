// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Expected outcomes (bad credentials, duplicate email, too few points) are
//! plain results for the calling view to render, not errors.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Admin access required")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid session token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Field name to first message, for form views.
    pub fn field_messages(&self) -> Vec<(String, String)> {
        let AppError::Validation(errors) = self else {
            return Vec::new();
        };

        let mut messages: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    (field.to_string(), message)
                })
            })
            .collect();
        messages.sort();
        messages
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 3, message = "Too short"))]
        name: String,
    }

    #[test]
    fn test_field_messages_from_validation() {
        let err: AppError = Form {
            name: "a".to_string(),
        }
        .validate()
        .unwrap_err()
        .into();

        assert_eq!(
            err.field_messages(),
            vec![("name".to_string(), "Too short".to_string())]
        );
    }

    #[test]
    fn test_field_messages_empty_for_other_errors() {
        assert!(AppError::Unauthorized.field_messages().is_empty());
    }
}
