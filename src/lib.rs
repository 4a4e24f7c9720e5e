// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod config;
mod document;
mod forms;
mod mask;
mod observability;
mod secondary_validation;
mod str_utils;

// This is the public API of the brdoc library
pub use config::{
    ConfigError, FormRules, DEFAULT_MIN_PASSWORD_LEN, DEFAULT_MIN_PHONE_LEN,
    DEFAULT_MIN_POSTAL_CODE_LEN,
};
pub use document::{Cnpj, Cpf, DocumentError, TaxId};
pub use forms::{
    AccountType, FormError, FormValidator, FormValidatorBuilder, LoginForm, PasswordRecoveryForm,
    RegistrationForm,
};
pub use mask::{
    format_phone, format_postal_code, format_tax_id, TaxIdKind, PHONE_MASKED_LEN,
    POSTAL_CODE_MASKED_LEN,
};
pub use observability::labels::{Labels, NO_LABEL};
pub use secondary_validation::{
    is_valid_cnpj, is_valid_cpf, is_valid_tax_id, BrazilianCnpjChecksum, BrazilianCpfChecksum,
    DocumentValidator, PhoneMask, PostalCodeMask, Validator,
};
pub use str_utils::extract_digits;
