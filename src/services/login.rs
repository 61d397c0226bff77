// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login form submission.

use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::routes::{Navigator, Route};
use crate::services::session::SessionStore;

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login form contents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "login_email"))]
    pub email: String,
    #[validate(custom(function = "filled"))]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// What the login view shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The form was rejected before contacting the backend
    Invalid(String),
    InvalidCredentials,
    /// Logged in; the view moved to the dashboard
    LoggedIn,
}

impl LoginOutcome {
    /// Inline error for the form, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoginOutcome::Invalid(message) => Some(message),
            LoginOutcome::InvalidCredentials => Some(INVALID_CREDENTIALS),
            LoginOutcome::LoggedIn => None,
        }
    }
}

/// Check the form, then log in and go to the dashboard on success.
///
/// A missing field is reported ahead of a malformed email, and neither
/// reaches the session store.
pub async fn submit(session: &SessionStore, nav: &dyn Navigator, form: &LoginForm) -> LoginOutcome {
    if let Err(errors) = form.validate() {
        return LoginOutcome::Invalid(form_error(&errors));
    }

    if session.login(&form.email, &form.password).await {
        nav.navigate(Route::Dashboard);
        LoginOutcome::LoggedIn
    } else {
        LoginOutcome::InvalidCredentials
    }
}

fn form_error(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let all: Vec<&ValidationError> = field_errors.values().flat_map(|errs| errs.iter()).collect();

    all.iter()
        .find(|e| e.code == "required")
        .or_else(|| all.first())
        .and_then(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .unwrap_or_else(|| MISSING_FIELDS.to_string())
}

fn filled(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(MISSING_FIELDS)));
    }
    Ok(())
}

fn login_email(value: &str) -> Result<(), ValidationError> {
    filled(value)?;
    if !value.contains('@') {
        return Err(ValidationError::new("email").with_message(Cow::Borrowed(INVALID_EMAIL)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_checks() {
        let cases = [
            (LoginForm::new("", ""), Some(MISSING_FIELDS)),
            (LoginForm::new("user@example.com", ""), Some(MISSING_FIELDS)),
            (LoginForm::new("", "password123"), Some(MISSING_FIELDS)),
            // Missing password wins over a malformed email
            (LoginForm::new("not-an-email", ""), Some(MISSING_FIELDS)),
            (LoginForm::new("not-an-email", "password123"), Some(INVALID_EMAIL)),
            (LoginForm::new("user@example.com", "password123"), None),
        ];

        for (form, expected) in cases {
            let got = form.validate().err().map(|e| form_error(&e));
            assert_eq!(got.as_deref(), expected, "form {form:?}");
        }
    }
}
