//! Sign-in flow state: active step, collected credentials, and the inline
//! error and loading flags the page renders from.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use crate::net::types::Credentials;

/// Which part of the sign-in flow is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SigninStep {
    /// Connection-check splash shown on page load.
    #[default]
    Splash,
    /// Email entry.
    Email,
    /// Password entry and submission.
    Password,
}

/// Sign-in flow state shared via context.
#[derive(Clone, Debug, Default)]
pub struct SigninState {
    pub step: SigninStep,
    pub credentials: Credentials,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    /// A submission is in flight; the submit control is disabled.
    pub submitting: bool,
}

impl SigninState {
    /// Splash delay elapsed; reveal the email step.
    pub fn leave_splash(&mut self) {
        self.step = SigninStep::Email;
    }

    /// Accept a validated email and advance to the password step.
    pub fn commit_email(&mut self, email: String) {
        self.credentials.email = email;
        self.email_error = None;
        self.step = SigninStep::Password;
    }

    pub fn set_email_error(&mut self, message: &str) {
        self.email_error = Some(message.to_owned());
    }

    pub fn clear_email_error(&mut self) {
        self.email_error = None;
    }

    pub fn set_password_error(&mut self, message: &str) {
        self.password_error = Some(message.to_owned());
    }

    pub fn clear_password_error(&mut self) {
        self.password_error = None;
    }

    /// Drop the stored password and any password error, keeping the email.
    pub fn clear_password(&mut self) {
        self.credentials.password = String::new();
        self.password_error = None;
    }

    /// Show the email step again for a different address.
    pub fn return_to_email(&mut self) {
        self.step = SigninStep::Email;
    }

    /// Accept a validated password and mark the request as in flight.
    pub fn begin_submit(&mut self, password: String) {
        self.credentials.password = password;
        self.password_error = None;
        self.submitting = true;
    }

    /// Record the explanation for a rejected or failed submission.
    pub fn fail_submit(&mut self, message: String) {
        self.password_error = Some(message);
    }

    /// The request settled, one way or the other; re-enable submission.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
