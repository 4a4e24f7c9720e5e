//! Tax identifiers that are known to carry valid check digits.
//!
//! `Cpf` and `Cnpj` can only be built through [`Cpf::parse`] / [`Cnpj::parse`]
//! or by completing a base with computed check digits. They display as the
//! full mask (`{:#}` prints the bare digits) and serialize as that mask.

mod error;

pub use error::DocumentError;

use crate::mask::{format_tax_id, TaxIdKind};
use crate::secondary_validation::{BrazilianCnpjChecksum, BrazilianCpfChecksum};
use crate::str_utils::digit_values;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub struct Cpf([u8; 11]);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub struct Cnpj([u8; 14]);

impl Cpf {
    /// Accepts masked or bare input; anything that is not a digit is ignored.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        let digits = digit_values(input);
        BrazilianCpfChecksum::verify(&digits)?;
        Ok(Self(to_array(&digits)))
    }

    /// Completes the first nine digits with their check digits.
    pub fn from_base(base: [u8; 9]) -> Result<Self, DocumentError> {
        let mut digits = base_values(&base, TaxIdKind::Individual)?;
        for _ in 0..2 {
            let check_digit = BrazilianCpfChecksum::check_digit(&digits);
            digits.push(check_digit);
        }
        BrazilianCpfChecksum::verify(&digits)?;
        Ok(Self(to_array(&digits)))
    }

    pub fn digits(&self) -> &[u8; 11] {
        &self.0
    }

    pub fn check_digits(&self) -> [u8; 2] {
        [self.0[9], self.0[10]]
    }
}

impl Cnpj {
    /// Accepts masked or bare input; anything that is not a digit is ignored.
    pub fn parse(input: &str) -> Result<Self, DocumentError> {
        let digits = digit_values(input);
        BrazilianCnpjChecksum::verify(&digits)?;
        Ok(Self(to_array(&digits)))
    }

    /// Completes the first twelve digits (registration number and branch)
    /// with their check digits.
    pub fn from_base(base: [u8; 12]) -> Result<Self, DocumentError> {
        let mut digits = base_values(&base, TaxIdKind::Organization)?;
        let (first, second) = BrazilianCnpjChecksum::check_digits(&digits);
        digits.extend([first, second]);
        BrazilianCnpjChecksum::verify(&digits)?;
        Ok(Self(to_array(&digits)))
    }

    pub fn digits(&self) -> &[u8; 14] {
        &self.0
    }

    pub fn check_digits(&self) -> [u8; 2] {
        [self.0[12], self.0[13]]
    }

    /// The four digits after `/`; `0001` is the head office.
    pub fn branch(&self) -> [u8; 4] {
        [self.0[8], self.0[9], self.0[10], self.0[11]]
    }
}

fn base_values(base: &[u8], kind: TaxIdKind) -> Result<Vec<u32>, DocumentError> {
    if base.iter().any(|digit| *digit > 9) {
        return Err(DocumentError::InvalidBase { kind });
    }
    Ok(base.iter().map(|digit| u32::from(*digit)).collect())
}

/// Callers have already checked that `digits` has exactly `N` decimal digits.
fn to_array<const N: usize>(digits: &[u32]) -> [u8; N] {
    let mut array = [0; N];
    for (slot, digit) in array.iter_mut().zip(digits) {
        *slot = *digit as u8;
    }
    array
}

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8], kind: TaxIdKind) -> fmt::Result {
    let bare: String = digits.iter().map(|digit| char::from(b'0' + digit)).collect();
    if f.alternate() {
        f.write_str(&bare)
    } else {
        f.write_str(&format_tax_id(&bare, kind))
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0, TaxIdKind::Individual)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0, TaxIdKind::Organization)
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A CPF or a CNPJ, tagged with its kind when serialized:
/// `{"kind": "individual", "value": "529.982.247-25"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TaxId {
    Individual(Cpf),
    Organization(Cnpj),
}

impl TaxId {
    pub fn parse(input: &str, kind: TaxIdKind) -> Result<Self, DocumentError> {
        match kind {
            TaxIdKind::Individual => Cpf::parse(input).map(TaxId::Individual),
            TaxIdKind::Organization => Cnpj::parse(input).map(TaxId::Organization),
        }
    }

    pub fn kind(&self) -> TaxIdKind {
        match self {
            TaxId::Individual(_) => TaxIdKind::Individual,
            TaxId::Organization(_) => TaxIdKind::Organization,
        }
    }

    pub fn digits(&self) -> &[u8] {
        match self {
            TaxId::Individual(cpf) => cpf.digits().as_slice(),
            TaxId::Organization(cnpj) => cnpj.digits().as_slice(),
        }
    }

    pub fn masked(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxId::Individual(cpf) => fmt::Display::fmt(cpf, f),
            TaxId::Organization(cnpj) => fmt::Display::fmt(cnpj, f),
        }
    }
}

impl From<Cpf> for TaxId {
    fn from(cpf: Cpf) -> Self {
        TaxId::Individual(cpf)
    }
}

impl From<Cnpj> for TaxId {
    fn from(cnpj: Cnpj) -> Self {
        TaxId::Organization(cnpj)
    }
}
