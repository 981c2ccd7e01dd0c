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

//! Error types for the tenant API client.

use thiserror::Error;

use crate::form::FieldErrors;

/// Text shown when the backend could not be reached at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Errors returned by [`KitchenApiClient`](crate::KitchenApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status. `message` is already
    /// assembled for display from the response body.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// A network or transport error; no response was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The message to put in front of the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Why a registration submit did not succeed.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Client-side validation failed; nothing was sent.
    #[error("Invalid registration form")]
    Invalid(FieldErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Form-level message, if any. Validation failures are field-scoped and
    /// produce none.
    pub fn form_message(&self) -> Option<String> {
        match self {
            SubmitError::Invalid(_) => None,
            SubmitError::Api(err) => Some(err.user_message()),
        }
    }
}
