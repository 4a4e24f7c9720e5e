use crate::config::FormRules;
use crate::forms::FormError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self, rules: &FormRules) -> Result<(), FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if self.password.chars().count() < rules.min_password_len {
            return Err(FormError::PasswordTooShort {
                min: rules.min_password_len,
            });
        }
        Ok(())
    }
}
