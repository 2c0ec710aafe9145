//! Registration form state and submit lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form page calls `begin_submit` before the POST and `finish_submit`
//! when it resolves. Busy is cleared on every outcome; the draft is reset
//! only on success so a failed entry can be retried as typed. There is no
//! guard against a second submit while one is in flight.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::api::ApiError;
use crate::net::types::{EMPTY_REGISTRATION, FieldName, Registration};
use crate::state::toast::ToastKind;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Registration successful!";
pub const SUBMIT_REJECTED_MESSAGE: &str = "Registration failed. Please try again.";
pub const SUBMIT_ERROR_MESSAGE: &str = "An error occurred. Please try again.";
pub const SUBMITTING_MESSAGE: &str = "Submitting registration...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub draft: Registration,
    pub submitting: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self { draft: EMPTY_REGISTRATION, submitting: false }
    }
}

impl FormState {
    pub fn set_field(&mut self, field: FieldName, value: String) {
        self.draft.set(field, value);
    }

    /// Mark the form busy and return the snapshot to send.
    pub fn begin_submit(&mut self) -> Registration {
        self.submitting = true;
        self.draft.clone()
    }

    /// Apply the submit outcome and return the notification to show.
    pub fn finish_submit(&mut self, outcome: &Result<(), ApiError>) -> (ToastKind, &'static str) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.draft = EMPTY_REGISTRATION;
                (ToastKind::Success, SUBMIT_SUCCESS_MESSAGE)
            }
            Err(ApiError::Status(_)) => (ToastKind::Error, SUBMIT_REJECTED_MESSAGE),
            Err(_) => (ToastKind::Error, SUBMIT_ERROR_MESSAGE),
        }
    }
}
