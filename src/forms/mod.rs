//! Submit-time rules of the signup screens.
//!
//! Each form checks its preconditions in a fixed order and reports only the
//! first one that fails, as a [FormError] whose message is the text shown to
//! the user.

mod error;
mod login;
mod metrics;
mod password_recovery;
mod registration;
mod validator;

pub use error::FormError;
pub use login::LoginForm;
pub use password_recovery::PasswordRecoveryForm;
pub use registration::RegistrationForm;
pub use validator::{FormValidator, FormValidatorBuilder};

use crate::mask::TaxIdKind;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Who is signing up. Volunteers identify with a CPF, churches with a CNPJ.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AccountType {
    #[default]
    Volunteer,
    Church,
}

impl AccountType {
    pub fn tax_id_kind(&self) -> TaxIdKind {
        match self {
            AccountType::Volunteer => TaxIdKind::Individual,
            AccountType::Church => TaxIdKind::Organization,
        }
    }
}

/// Used as the `form` metric label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum FormKind {
    Registration,
    Login,
    PasswordRecovery,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_account_type() {
        assert_eq!(AccountType::default(), AccountType::Volunteer);
        assert_eq!(AccountType::Volunteer.tax_id_kind(), TaxIdKind::Individual);
        assert_eq!(AccountType::Church.tax_id_kind(), TaxIdKind::Organization);
        assert_eq!(AccountType::from_str("church"), Ok(AccountType::Church));
        assert_eq!(AccountType::Church.to_string(), "church");
    }

    #[test]
    fn test_form_kind_label() {
        let label: &'static str = FormKind::PasswordRecovery.into();
        assert_eq!(label, "password_recovery");
    }
}
