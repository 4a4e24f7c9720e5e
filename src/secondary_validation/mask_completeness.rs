use crate::config::{DEFAULT_MIN_PHONE_LEN, DEFAULT_MIN_POSTAL_CODE_LEN};
use crate::mask::{format_phone, format_postal_code};
use crate::secondary_validation::Validator;

/// Accepts phones whose mask is at least `min_len` characters long.
///
/// With the default of 14 that means an area code plus at least 8 digits.
pub struct PhoneMask {
    pub min_len: usize,
}

impl Default for PhoneMask {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_PHONE_LEN,
        }
    }
}

impl Validator for PhoneMask {
    fn is_valid_match(&self, input: &str) -> bool {
        format_phone(input).len() >= self.min_len
    }
}

/// Accepts postal codes whose mask is at least `min_len` characters long.
pub struct PostalCodeMask {
    pub min_len: usize,
}

impl Default for PostalCodeMask {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_POSTAL_CODE_LEN,
        }
    }
}

impl Validator for PostalCodeMask {
    fn is_valid_match(&self, input: &str) -> bool {
        format_postal_code(input).len() >= self.min_len
    }
}
