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

//! Everything the registration dialog holds between renders, with the
//! transitions the UI drives it through.

use kitchen_api_types::RegisterTenantRequest;

use crate::error::ApiError;
use crate::form::{FieldErrors, RegistrationForm};
use crate::submission::{SubmissionEvent, SubmissionState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDialog {
    pub open: bool,
    pub form: RegistrationForm,
    pub field_errors: FieldErrors,
    pub state: SubmissionState,
}

impl RegistrationDialog {
    /// Open or close the dialog. Any change drops the previous request error
    /// and field errors; entered values are kept.
    pub fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        self.state = self.state.apply(SubmissionEvent::Dismissed);
        self.field_errors = FieldErrors::default();
    }

    /// Validate the form and, when it passes, move to `Submitting` and hand
    /// back the payload to send. Returns `None` when nothing must be sent.
    pub fn submit(&mut self) -> Option<RegisterTenantRequest> {
        if !self.state.can_submit() {
            return None;
        }
        match self.form.validate() {
            Ok(request) => {
                self.field_errors = FieldErrors::default();
                self.state = self.state.apply(SubmissionEvent::Submit);
                Some(request)
            }
            Err(errors) => {
                log::debug!("Registration form has {} invalid fields", errors.len());
                self.field_errors = errors;
                None
            }
        }
    }

    /// Record the outcome of the request started by [`Self::submit`].
    pub fn finish(&mut self, result: &Result<(), ApiError>) {
        let event = match result {
            Ok(()) => SubmissionEvent::Succeeded,
            Err(e) => SubmissionEvent::Failed(e.user_message()),
        };
        self.state = self.state.apply(event);
    }

    /// The confirmation has been shown long enough: close the dialog and
    /// clear every field.
    pub fn confirmation_elapsed(&mut self) {
        if !self.state.is_success() {
            return;
        }
        self.state = self.state.apply(SubmissionEvent::ConfirmationElapsed);
        self.form = RegistrationForm::default();
        self.field_errors = FieldErrors::default();
        self.open = false;
    }
}
