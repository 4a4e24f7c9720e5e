//! Progressive display masks for numeric identifiers.
//!
//! Every mask re-derives its output from the digits of the input alone, so
//! masking an already masked value is a no-op and a value typed one digit at a
//! time only ever grows at the end.

mod phone;
mod postal_code;
mod tax_id;

pub use phone::{format_phone, PHONE_MASKED_LEN};
pub use postal_code::{format_postal_code, POSTAL_CODE_MASKED_LEN};
pub use tax_id::format_tax_id;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Selects which Brazilian tax identifier a value holds.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaxIdKind {
    /// CPF, `NNN.NNN.NNN-NN`
    Individual,
    /// CNPJ, `NN.NNN.NNN/NNNN-NN`
    Organization,
}

impl TaxIdKind {
    /// Number of digits of a complete identifier, check digits included.
    pub fn digit_count(&self) -> usize {
        match self {
            TaxIdKind::Individual => 11,
            TaxIdKind::Organization => 14,
        }
    }

    /// Length of the complete mask.
    pub fn masked_len(&self) -> usize {
        match self {
            TaxIdKind::Individual => 14,
            TaxIdKind::Organization => 18,
        }
    }

    /// Short name of the document, as shown to users.
    pub fn document_name(&self) -> &'static str {
        match self {
            TaxIdKind::Individual => "CPF",
            TaxIdKind::Organization => "CNPJ",
        }
    }
}
