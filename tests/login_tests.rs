// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use rewear::routes::Route;
use rewear::services::login::{self, INVALID_CREDENTIALS, INVALID_EMAIL, MISSING_FIELDS};
use rewear::services::{LoginForm, LoginOutcome};

mod common;

#[tokio::test]
async fn test_login_form_success_goes_to_dashboard() {
    let app = common::create_test_app();
    let form = LoginForm::new("user@example.com", "password123");

    let outcome = login::submit(&app.state.session, app.navigator.as_ref(), &form).await;

    assert_eq!(outcome, LoginOutcome::LoggedIn);
    assert_eq!(outcome.error_message(), None);
    assert_eq!(app.navigator.current(), Route::Dashboard);
    assert_eq!(app.state.session.current_user().unwrap().id, "2");
}

#[tokio::test]
async fn test_login_form_rejects_before_contacting_backend() {
    let cases = [
        (LoginForm::new("", ""), MISSING_FIELDS),
        (LoginForm::new("user@example.com", ""), MISSING_FIELDS),
        (LoginForm::new("user.example.com", "password123"), INVALID_EMAIL),
    ];

    for (form, message) in cases {
        let app = common::create_test_app();

        let outcome = login::submit(&app.state.session, app.navigator.as_ref(), &form).await;

        assert_eq!(outcome, LoginOutcome::Invalid(message.to_string()));
        assert_eq!(outcome.error_message(), Some(message));
        // No simulated call was made
        assert!(app.clock.sleeps().is_empty());
        assert_eq!(app.navigator.history(), vec![Route::Home]);
        assert!(app.state.session.current_user().is_none());
    }
}

#[tokio::test]
async fn test_login_form_bad_credentials() {
    let app = common::create_test_app();
    let form = LoginForm::new("user@example.com", "wrong");

    let outcome = login::submit(&app.state.session, app.navigator.as_ref(), &form).await;

    assert_eq!(outcome, LoginOutcome::InvalidCredentials);
    assert_eq!(outcome.error_message(), Some(INVALID_CREDENTIALS));
    assert_eq!(app.clock.sleeps().len(), 1);
    assert_eq!(app.navigator.current(), Route::Home);
    assert!(!app.state.session.is_loading());
}
