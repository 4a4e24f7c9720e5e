use crate::document::DocumentError;
use strum::IntoStaticStr;
use thiserror::Error;

/// First failed precondition of a form. `Display` is the alert message.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FormError {
    #[error("Por favor, preencha todos os campos")]
    MissingFields,

    /// "CPF inválido" or "CNPJ inválido"
    #[error("{} inválido", .0.kind().document_name())]
    InvalidTaxId(#[from] DocumentError),

    #[error("Telefone inválido")]
    InvalidPhone,

    #[error("CEP inválido")]
    InvalidPostalCode,

    #[error("As senhas não coincidem")]
    PasswordMismatch,

    #[error("A senha deve ter no mínimo {min} caracteres")]
    PasswordTooShort { min: usize },

    #[error("Por favor, digite seu e-mail")]
    MissingEmail,

    #[error("Por favor, digite um e-mail válido")]
    InvalidEmail,
}

impl FormError {
    /// Stable snake_case name of the variant, e.g. `invalid_tax_id`.
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}
