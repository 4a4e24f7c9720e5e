use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum login password length, in characters
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;
/// `(DD) DDDDD-DDD`, i.e. 10 digits
pub const DEFAULT_MIN_PHONE_LEN: usize = 14;
/// `NNNNN-NNN`
pub const DEFAULT_MIN_POSTAL_CODE_LEN: usize = 9;

/// Submit-time thresholds of the signup screens.
///
/// Phone and postal code minimums apply to the masked value held by the field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FormRules {
    pub min_password_len: usize,
    pub min_phone_len: usize,
    pub min_postal_code_len: usize,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            min_phone_len: DEFAULT_MIN_PHONE_LEN,
            min_postal_code_len: DEFAULT_MIN_POSTAL_CODE_LEN,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid form rules: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{field}` must be greater than zero")]
    ZeroLength { field: &'static str },
}

impl FormRules {
    /// Reads rules from JSON. Missing fields keep their default.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let rules: FormRules = serde_json::from_str(input)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min_password_len", self.min_password_len),
            ("min_phone_len", self.min_phone_len),
            ("min_postal_code_len", self.min_postal_code_len),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::ZeroLength { field });
            }
        }
        Ok(())
    }

    pub fn min_password_len(&self, min_password_len: usize) -> Self {
        self.mutate_clone(|x| x.min_password_len = min_password_len)
    }

    pub fn min_phone_len(&self, min_phone_len: usize) -> Self {
        self.mutate_clone(|x| x.min_phone_len = min_phone_len)
    }

    pub fn min_postal_code_len(&self, min_postal_code_len: usize) -> Self {
        self.mutate_clone(|x| x.min_postal_code_len = min_postal_code_len)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
