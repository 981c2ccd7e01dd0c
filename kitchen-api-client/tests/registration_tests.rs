/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Integration tests for tenant registration.


use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use kitchen_api_client::error::NETWORK_ERROR_MESSAGE;
use kitchen_api_client::form::{FormField, RegistrationForm};
use kitchen_api_client::submission::{SubmissionEvent, SubmissionState, SUCCESS_DISPLAY};
use kitchen_api_client::{ApiError, RegistrationDialog, SubmitError};
use test_helpers::*;

// ── Payload ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_no_plan_sends_no_plan_id_key() {
    let backend = Arc::new(FakeBackend::default());
    let client = spawn_backend(backend.clone()).await;

    client.submit_registration(&valid_form()).await.unwrap();

    let received = backend.received();
    assert_eq!(received.len(), 1);
    let body = received[0].as_object().unwrap();
    assert!(!body.contains_key("plan_id"));
    assert_eq!(body["name"], "Downtown Kitchen");
    assert_eq!(body["subdomain"], "downtown-kitchen");
    assert_eq!(body["admin_email"], "owner@example.com");
    assert_eq!(body["admin_password"], "correct-horse");
}

#[tokio::test]
async fn test_selected_plan_sends_integer_plan_id() {
    let backend = Arc::new(FakeBackend::default());
    let client = spawn_backend(backend.clone()).await;
    let form = RegistrationForm {
        plan: "2".to_string(),
        ..valid_form()
    };

    client.submit_registration(&form).await.unwrap();

    assert_eq!(backend.received()[0]["plan_id"], serde_json::json!(2));
}

#[tokio::test]
async fn test_invalid_form_never_reaches_network() {
    let backend = Arc::new(FakeBackend::default());
    let client = spawn_backend(backend.clone()).await;
    let form = RegistrationForm {
        subdomain: "a!b".to_string(),
        admin_password: "short".to_string(),
        ..valid_form()
    };

    match client.submit_registration(&form).await {
        Err(SubmitError::Invalid(errors)) => {
            assert!(errors.get(FormField::Subdomain).is_some());
            assert!(errors.get(FormField::AdminPassword).is_some());
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(backend.received().is_empty());
}

// ── Failures ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_structured_errors_are_listed_per_field() {
    let client = spawn_backend(Arc::new(FakeBackend::with_registration(
        StatusCode::BAD_REQUEST,
        r#"{"errors": {"subdomain": ["already taken"]}}"#,
    )))
    .await;

    let err = client.submit_registration(&valid_form()).await.unwrap_err();
    let message = err.form_message().unwrap();
    assert!(message.contains("subdomain: already taken"));
}

#[tokio::test]
async fn test_detail_is_used_without_errors() {
    let client = spawn_backend(Arc::new(FakeBackend::with_registration(
        StatusCode::FORBIDDEN,
        r#"{"detail": "Registrations are paused"}"#,
    )))
    .await;

    let err = client.submit_registration(&valid_form()).await.unwrap_err();
    assert_eq!(err.form_message().as_deref(), Some("Registrations are paused"));
}

#[tokio::test]
async fn test_server_error_without_body_reports_status() {
    let client = spawn_backend(Arc::new(FakeBackend::with_registration(
        StatusCode::BAD_GATEWAY,
        "",
    )))
    .await;

    match client.submit_registration(&valid_form()).await {
        Err(SubmitError::Api(ApiError::Rejected { status, message })) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Request failed with status 502");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_reports_network_error() {
    let err = unreachable_client()
        .submit_registration(&valid_form())
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Api(ApiError::Network(_))));
    assert_eq!(err.form_message().as_deref(), Some(NETWORK_ERROR_MESSAGE));
}

// ── Dialog flow ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rejection_returns_dialog_to_editable_state() {
    let client = spawn_backend(Arc::new(FakeBackend::with_registration(
        StatusCode::BAD_REQUEST,
        r#"{"errors": {"subdomain": "already taken", "admin_email": ["in use", "blocked"]}}"#,
    )))
    .await;
    let form = valid_form();

    let state = SubmissionState::default().apply(SubmissionEvent::Submit);
    assert!(!state.can_submit());

    let state = match client.submit_registration(&form).await {
        Ok(()) => state.apply(SubmissionEvent::Succeeded),
        Err(e) => state.apply(SubmissionEvent::Failed(e.form_message().unwrap_or_default())),
    };

    assert!(state.can_submit());
    assert_eq!(
        state.error(),
        Some("subdomain: already taken\nadmin_email: in use, blocked")
    );
    // Entered values are untouched and can be resubmitted as-is.
    assert_eq!(form, valid_form());
}

#[tokio::test]
async fn test_success_confirms_then_closes_and_clears() {
    let backend = Arc::new(FakeBackend::default());
    let client = spawn_backend(backend.clone()).await;
    let mut dialog = RegistrationDialog::default();
    dialog.set_open(true);
    dialog.form = valid_form();

    let request = dialog.submit().expect("valid form is sent");
    let result = client.register_tenant(&request).await;
    dialog.finish(&result);
    let confirmed_at = Instant::now();

    assert!(dialog.open);
    assert!(dialog.state.is_success());
    assert_eq!(backend.received().len(), 1);

    tokio::time::sleep(SUCCESS_DISPLAY).await;
    dialog.confirmation_elapsed();

    assert!(confirmed_at.elapsed() >= SUCCESS_DISPLAY);
    assert!(!dialog.open);
    assert_eq!(dialog.state, SubmissionState::default());
    assert_eq!(dialog.form, RegistrationForm::default());
    assert!(dialog.form.kitchen_name.is_empty());
    assert!(dialog.form.subdomain.is_empty());
    assert!(dialog.form.admin_email.is_empty());
    assert!(dialog.form.admin_password.is_empty());
}
