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

//! Lifecycle of one registration dialog.
//!
//! ```text
//! Idle --Submit--> Submitting --Succeeded--> Success --ConfirmationElapsed--> Idle (closed, cleared)
//!                      |
//!                      +--Failed(msg)--> Idle { error: Some(msg) }
//! ```

use std::time::Duration;

/// How long the confirmation is shown before the dialog closes itself.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// Editable. Carries the last request-level error, if any.
    Idle { error: Option<String> },
    Submitting,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// A validated payload is about to be sent.
    Submit,
    Succeeded,
    Failed(String),
    /// [`SUCCESS_DISPLAY`] has passed since [`SubmissionEvent::Succeeded`].
    ConfirmationElapsed,
    /// The dialog was opened or closed by the user.
    Dismissed,
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle { error: None }
    }
}

impl SubmissionState {
    /// Advance the state machine. Events that make no sense in the current
    /// state leave it unchanged.
    pub fn apply(&self, event: SubmissionEvent) -> SubmissionState {
        use SubmissionEvent as E;
        use SubmissionState as S;

        match (self, event) {
            (S::Idle { .. }, E::Submit) => S::Submitting,
            (S::Submitting, E::Succeeded) => S::Success,
            (S::Submitting, E::Failed(message)) => S::Idle {
                error: Some(message),
            },
            (S::Success, E::ConfirmationElapsed) => S::default(),
            (S::Idle { .. }, E::Dismissed) => S::default(),
            (state, _) => state.clone(),
        }
    }

    /// The submit control is enabled only while editable.
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionState::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Idle { error } => error.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_returns_to_clean_idle() {
        let state = SubmissionState::default()
            .apply(SubmissionEvent::Submit)
            .apply(SubmissionEvent::Succeeded);
        assert!(state.is_success());
        assert!(!state.can_submit());

        let state = state.apply(SubmissionEvent::ConfirmationElapsed);
        assert_eq!(state, SubmissionState::Idle { error: None });
    }

    #[test]
    fn failure_keeps_message_and_allows_retry() {
        let state = SubmissionState::default()
            .apply(SubmissionEvent::Submit)
            .apply(SubmissionEvent::Failed("subdomain: already taken".into()));
        assert_eq!(state.error(), Some("subdomain: already taken"));
        assert!(state.can_submit());
        assert!(state.apply(SubmissionEvent::Submit).is_submitting());
    }

    #[test]
    fn duplicate_submit_is_ignored() {
        let state = SubmissionState::Submitting.apply(SubmissionEvent::Submit);
        assert!(state.is_submitting());
        assert!(!state.can_submit());
    }

    #[test]
    fn dismiss_clears_error_but_not_pending_work() {
        let failed = SubmissionState::Idle {
            error: Some("Network error. Please try again.".into()),
        };
        assert_eq!(failed.apply(SubmissionEvent::Dismissed).error(), None);
        assert!(SubmissionState::Success
            .apply(SubmissionEvent::Dismissed)
            .is_success());
    }
}
