use crate::document::DocumentError;
use crate::mask::TaxIdKind;
use crate::secondary_validation::Validator;
use crate::str_utils::{all_identical, digit_values};

pub struct BrazilianCpfChecksum;

const BRAZILIAN_CPF_DIGIT_COUNT: usize = 11;
const BRAZILIAN_CPF_CHECK_POSITIONS: [usize; 2] = [9, 10];

impl BrazilianCpfChecksum {
    /// Check digit for the digits preceding it. Weights run from
    /// `digits.len() + 1` down to 2.
    pub(crate) fn check_digit(digits: &[u32]) -> u32 {
        let first_weight = digits.len() as u32 + 1;
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(idx, digit)| digit * (first_weight - idx as u32))
            .sum();
        let remainder = (sum * 10) % 11;
        if remainder == 10 {
            0
        } else {
            remainder
        }
    }

    pub(crate) fn verify(digits: &[u32]) -> Result<(), DocumentError> {
        let kind = TaxIdKind::Individual;
        if digits.len() != BRAZILIAN_CPF_DIGIT_COUNT {
            return Err(DocumentError::WrongLength {
                kind,
                expected: BRAZILIAN_CPF_DIGIT_COUNT,
                actual: digits.len(),
            });
        }
        // 000.000.000-00, 111.111.111-11, ... pass the checksum but are not issued
        if all_identical(digits) {
            return Err(DocumentError::RepeatedDigits { kind });
        }
        for position in BRAZILIAN_CPF_CHECK_POSITIONS {
            let expected = Self::check_digit(&digits[..position]);
            if expected != digits[position] {
                return Err(DocumentError::CheckDigitMismatch {
                    kind,
                    position,
                    expected,
                    actual: digits[position],
                });
            }
        }
        Ok(())
    }
}

impl Validator for BrazilianCpfChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn is_valid_match(&self, input: &str) -> bool {
        Self::verify(&digit_values(input)).is_ok()
    }
}
