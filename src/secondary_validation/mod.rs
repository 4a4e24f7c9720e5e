mod brazilian_cnpj_checksum;
mod brazilian_cpf_checksum;
mod mask_completeness;

pub use crate::secondary_validation::brazilian_cnpj_checksum::BrazilianCnpjChecksum;
pub use crate::secondary_validation::brazilian_cpf_checksum::BrazilianCpfChecksum;
pub use crate::secondary_validation::mask_completeness::{PhoneMask, PostalCodeMask};

use crate::mask::TaxIdKind;
use serde::{Deserialize, Serialize};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, input: &str) -> bool;
}

/// Serializable choice of validator, e.g. `{"type": "BrazilianCpfChecksum"}`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum DocumentValidator {
    BrazilianCpfChecksum,
    BrazilianCnpjChecksum,
    PhoneMask,
    PostalCodeMask,
}

impl DocumentValidator {
    /// The checksum validator matching a tax id kind.
    pub fn for_tax_id(kind: TaxIdKind) -> Self {
        match kind {
            TaxIdKind::Individual => DocumentValidator::BrazilianCpfChecksum,
            TaxIdKind::Organization => DocumentValidator::BrazilianCnpjChecksum,
        }
    }
}

impl Validator for DocumentValidator {
    fn is_valid_match(&self, input: &str) -> bool {
        match self {
            DocumentValidator::BrazilianCpfChecksum => BrazilianCpfChecksum.is_valid_match(input),
            DocumentValidator::BrazilianCnpjChecksum => {
                BrazilianCnpjChecksum.is_valid_match(input)
            }
            DocumentValidator::PhoneMask => PhoneMask::default().is_valid_match(input),
            DocumentValidator::PostalCodeMask => PostalCodeMask::default().is_valid_match(input),
        }
    }
}

/// True for a CPF with a valid checksum, punctuation ignored.
pub fn is_valid_cpf(input: &str) -> bool {
    BrazilianCpfChecksum.is_valid_match(input)
}

/// True for a CNPJ with a valid checksum, punctuation ignored.
pub fn is_valid_cnpj(input: &str) -> bool {
    BrazilianCnpjChecksum.is_valid_match(input)
}

pub fn is_valid_tax_id(input: &str, kind: TaxIdKind) -> bool {
    DocumentValidator::for_tax_id(kind).is_valid_match(input)
}
