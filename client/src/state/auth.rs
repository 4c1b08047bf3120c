//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The login page also tracks which step of
//! the two-factor flow it is on.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{LoginOutcome, User};

/// Which form the login page shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginStage {
    /// Email + password form.
    #[default]
    Credentials,
    /// Six-digit authenticator code form, bound to the token issued by the
    /// credentials step.
    Totp { mfa_token: String },
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    /// `true` until the first `/api/auth/me` round trip completes.
    pub loading: bool,
    pub stage: LoginStage,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, stage: LoginStage::Credentials, submitting: false, error: None }
    }
}

impl AuthState {
    /// Record the `/api/auth/me` result.
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Mark a form submission in flight.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    /// Apply the credentials step result. Returns `true` when the session
    /// is established and the caller should reload the user.
    pub fn apply_login(&mut self, result: Result<LoginOutcome, String>) -> bool {
        self.submitting = false;
        match result {
            Ok(LoginOutcome::SignedIn) => {
                self.stage = LoginStage::Credentials;
                true
            }
            Ok(LoginOutcome::MfaRequired { mfa_token }) => {
                self.stage = LoginStage::Totp { mfa_token };
                false
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }

    /// Apply the TOTP step result. Returns `true` on success.
    ///
    /// A rejected code keeps the TOTP stage so the user can retry with the
    /// same token.
    pub fn apply_verify(&mut self, result: Result<(), String>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.stage = LoginStage::Credentials;
                true
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }

    /// Abandon the TOTP step and return to the credentials form.
    pub fn restart(&mut self) {
        self.stage = LoginStage::Credentials;
        self.error = None;
        self.submitting = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.restart();
    }
}
