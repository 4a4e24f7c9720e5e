use crate::forms::FormError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// something@something.something, no whitespace, a single `@`
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordRecoveryForm {
    pub email: String,
}

impl PasswordRecoveryForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !EMAIL_REGEX.is_match(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}
