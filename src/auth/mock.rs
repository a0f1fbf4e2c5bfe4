// src/auth/mock.rs
//! Stand-in authentication. Any non-blank credentials are accepted after a
//! fixed delay that imitates a network round trip.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

pub const MISSING_FIELDS: &str = "Please fill in all fields.";
pub const MISSING_EMAIL: &str = "Please enter your email address.";

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// How long every auth request waits before answering.
    pub delay: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl LoginForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            email: field(fields, "email"),
            password: field(fields, "password"),
        }
    }
}

impl SignupForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            full_name: field(fields, "full_name"),
            email: field(fields, "email"),
            phone: field(fields, "phone"),
            password: field(fields, "password"),
        }
    }
}

impl ForgotPasswordForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            email: field(fields, "email"),
        }
    }
}

fn field(fields: &HashMap<String, String>, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

/// The single user-facing failure: a required field was left blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct AuthRejected(pub &'static str);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub display_name: String,
    pub email: String,
}

pub struct AuthService {
    cfg: AuthConfig,
}

impl AuthService {
    pub fn new(cfg: AuthConfig) -> Self {
        Self { cfg }
    }

    /// Trim + lowercase. No format check beyond what the form input does.
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    fn simulate_round_trip(&self) {
        if !self.cfg.delay.is_zero() {
            debug!(delay_ms = self.cfg.delay.as_millis() as u64, "simulating auth round trip");
            thread::sleep(self.cfg.delay);
        }
    }

    pub fn login(&self, form: &LoginForm) -> Result<SignedIn, AuthRejected> {
        self.simulate_round_trip();

        if is_blank(&form.email) || is_blank(&form.password) {
            return Err(AuthRejected(MISSING_FIELDS));
        }

        let email = Self::normalize_email(&form.email);
        info!(%email, "login accepted");
        Ok(SignedIn {
            display_name: email.clone(),
            email,
        })
    }

    pub fn signup(&self, form: &SignupForm) -> Result<SignedIn, AuthRejected> {
        self.simulate_round_trip();

        let required = [&form.full_name, &form.email, &form.phone, &form.password];
        if required.iter().any(|v| is_blank(v)) {
            return Err(AuthRejected(MISSING_FIELDS));
        }

        let email = Self::normalize_email(&form.email);
        info!(%email, "account created");
        Ok(SignedIn {
            display_name: form.full_name.trim().to_string(),
            email,
        })
    }

    /// Nothing is sent; the caller just tells the user to check their inbox.
    pub fn forgot_password(&self, form: &ForgotPasswordForm) -> Result<String, AuthRejected> {
        self.simulate_round_trip();

        if is_blank(&form.email) {
            return Err(AuthRejected(MISSING_EMAIL));
        }

        let email = Self::normalize_email(&form.email);
        info!(%email, "password reset requested");
        Ok(email)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
