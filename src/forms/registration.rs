use crate::config::FormRules;
use crate::document::{DocumentError, TaxId};
use crate::forms::{AccountType, FormError};
use crate::mask::{format_phone, format_postal_code, format_tax_id};
use serde::{Deserialize, Serialize};

/// State of the sign-up screen.
///
/// The masked fields (`tax_id`, `phone`, `postal_code`) are meant to be
/// written through their setters, which store the mask of whatever was typed.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RegistrationForm {
    pub account_type: AccountType,
    pub full_name: String,
    pub tax_id: String,
    pub phone: String,
    pub postal_code: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(account_type: AccountType) -> Self {
        Self {
            account_type,
            ..Default::default()
        }
    }

    /// Switching between CPF and CNPJ discards what was typed so far.
    /// Selecting the type already in use keeps the tax id.
    pub fn set_account_type(&mut self, account_type: AccountType) {
        if self.account_type != account_type {
            self.tax_id.clear();
        }
        self.account_type = account_type;
    }

    pub fn set_tax_id(&mut self, input: &str) {
        self.tax_id = format_tax_id(input, self.account_type.tax_id_kind());
    }

    pub fn set_phone(&mut self, input: &str) {
        self.phone = format_phone(input);
    }

    pub fn set_postal_code(&mut self, input: &str) {
        self.postal_code = format_postal_code(input);
    }

    /// Longest value the tax id field accepts: a complete mask.
    pub fn tax_id_max_len(&self) -> usize {
        self.account_type.tax_id_kind().masked_len()
    }

    pub fn parsed_tax_id(&self) -> Result<TaxId, DocumentError> {
        TaxId::parse(&self.tax_id, self.account_type.tax_id_kind())
    }

    /// A typed tax id that does not validate.
    pub fn tax_id_highlighted(&self) -> bool {
        !self.tax_id.is_empty() && self.parsed_tax_id().is_err()
    }

    pub fn phone_highlighted(&self, rules: &FormRules) -> bool {
        !self.phone.is_empty() && char_len(&self.phone) < rules.min_phone_len
    }

    pub fn postal_code_highlighted(&self, rules: &FormRules) -> bool {
        !self.postal_code.is_empty()
            && char_len(&self.postal_code) < rules.min_postal_code_len
    }

    fn has_empty_field(&self) -> bool {
        [
            &self.full_name,
            &self.tax_id,
            &self.phone,
            &self.postal_code,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| field.is_empty())
    }

    pub fn validate(&self, rules: &FormRules) -> Result<(), FormError> {
        if self.has_empty_field() {
            return Err(FormError::MissingFields);
        }
        self.parsed_tax_id()?;
        if char_len(&self.phone) < rules.min_phone_len {
            return Err(FormError::InvalidPhone);
        }
        if char_len(&self.postal_code) < rules.min_postal_code_len {
            return Err(FormError::InvalidPostalCode);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Field lengths are measured in characters, not bytes.
fn char_len(field: &str) -> usize {
    field.chars().count()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mask::TaxIdKind;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new(AccountType::Volunteer);
        form.full_name = "Maria da Silva".to_string();
        form.set_tax_id("52998224725");
        form.set_phone("11987654321");
        form.set_postal_code("01310100");
        form.email = "maria@example.com".to_string();
        form.password = "segredo123".to_string();
        form.confirm_password = "segredo123".to_string();
        form
    }

    #[test]
    fn test_setters_store_masks() {
        let form = filled_form();
        assert_eq!(form.tax_id, "529.982.247-25");
        assert_eq!(form.phone, "(11) 98765-4321");
        assert_eq!(form.postal_code, "01310-100");
        assert_eq!(form.tax_id_max_len(), 14);
    }

    #[test]
    fn test_switching_account_type_clears_tax_id() {
        let mut form = filled_form();
        form.set_account_type(AccountType::Volunteer);
        assert_eq!(form.tax_id, "529.982.247-25");

        form.set_account_type(AccountType::Church);
        assert_eq!(form.tax_id, "");
        assert_eq!(form.tax_id_max_len(), 18);

        form.set_tax_id("11222333000181");
        assert_eq!(form.tax_id, "11.222.333/0001-81");
        assert_eq!(form.validate(&FormRules::default()), Ok(()));
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(filled_form().validate(&FormRules::default()), Ok(()));
    }

    #[test]
    fn test_first_failure_wins() {
        let rules = FormRules::default();

        let mut form = filled_form();
        form.email.clear();
        form.set_tax_id("123");
        assert_eq!(form.validate(&rules), Err(FormError::MissingFields));

        let mut form = filled_form();
        form.set_tax_id("52998224724");
        form.set_phone("119");
        assert!(matches!(
            form.validate(&rules),
            Err(FormError::InvalidTaxId(DocumentError::CheckDigitMismatch {
                kind: TaxIdKind::Individual,
                ..
            }))
        ));

        let mut form = filled_form();
        form.set_phone("119876543");
        form.set_postal_code("0131");
        assert_eq!(form.validate(&rules), Err(FormError::InvalidPhone));

        let mut form = filled_form();
        form.set_postal_code("0131010");
        form.confirm_password = "outra".to_string();
        assert_eq!(form.validate(&rules), Err(FormError::InvalidPostalCode));

        let mut form = filled_form();
        form.confirm_password = "outra".to_string();
        assert_eq!(form.validate(&rules), Err(FormError::PasswordMismatch));
    }

    #[test]
    fn test_cpf_rejected_for_church() {
        let mut form = filled_form();
        form.set_account_type(AccountType::Church);
        form.set_tax_id("52998224725");
        let error = form.validate(&FormRules::default()).unwrap_err();
        assert_eq!(error.to_string(), "CNPJ inválido");
    }

    #[test]
    fn test_highlights() {
        let rules = FormRules::default();
        let mut form = RegistrationForm::default();
        assert!(!form.tax_id_highlighted());
        assert!(!form.phone_highlighted(&rules));
        assert!(!form.postal_code_highlighted(&rules));

        form.set_tax_id("5299822");
        form.set_phone("11987");
        form.set_postal_code("0131");
        assert!(form.tax_id_highlighted());
        assert!(form.phone_highlighted(&rules));
        assert!(form.postal_code_highlighted(&rules));

        form.set_tax_id("52998224725");
        form.set_phone("1198765432");
        form.set_postal_code("01310100");
        assert!(!form.tax_id_highlighted());
        assert!(!form.phone_highlighted(&rules));
        assert!(!form.postal_code_highlighted(&rules));
    }

    #[test]
    fn test_lengths_count_characters() {
        let rules = FormRules::default();

        // 7 characters, 14 bytes
        let mut form = filled_form();
        form.phone = "ççççççç".to_string();
        assert!(form.phone_highlighted(&rules));
        assert_eq!(form.validate(&rules), Err(FormError::InvalidPhone));

        // 5 characters, 9 bytes
        let mut form = filled_form();
        form.postal_code = "çççç-".to_string();
        assert!(form.postal_code_highlighted(&rules));
        assert_eq!(form.validate(&rules), Err(FormError::InvalidPostalCode));
    }

    #[test]
    fn test_deserialize_partial_form() {
        let form: RegistrationForm =
            serde_json::from_str(r#"{"account_type": "church", "full_name": "Igreja Central"}"#)
                .unwrap();
        assert_eq!(form.account_type, AccountType::Church);
        assert_eq!(form.full_name, "Igreja Central");
        assert_eq!(form.validate(&FormRules::default()), Err(FormError::MissingFields));
    }
}
