use crate::mask::TaxIdKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("{} must have {expected} digits, found {actual}", .kind.document_name())]
    WrongLength {
        kind: TaxIdKind,
        expected: usize,
        actual: usize,
    },

    #[error("{} cannot be a single repeated digit", .kind.document_name())]
    RepeatedDigits { kind: TaxIdKind },

    #[error(
        "{} check digit at position {position} should be {expected}, found {actual}",
        .kind.document_name()
    )]
    CheckDigitMismatch {
        kind: TaxIdKind,
        position: usize,
        expected: u32,
        actual: u32,
    },

    #[error("{} base digits must be between 0 and 9", .kind.document_name())]
    InvalidBase { kind: TaxIdKind },
}

impl DocumentError {
    pub fn kind(&self) -> TaxIdKind {
        match self {
            DocumentError::WrongLength { kind, .. }
            | DocumentError::RepeatedDigits { kind }
            | DocumentError::CheckDigitMismatch { kind, .. }
            | DocumentError::InvalidBase { kind } => *kind,
        }
    }
}
