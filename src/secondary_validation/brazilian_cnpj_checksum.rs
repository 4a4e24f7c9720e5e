use crate::document::DocumentError;
use crate::mask::TaxIdKind;
use crate::secondary_validation::Validator;
use crate::str_utils::{all_identical, digit_values};

pub struct BrazilianCnpjChecksum;

const BRAZILIAN_CNPJ_DIGIT_COUNT: usize = 14;
const BRAZILIAN_CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const BRAZILIAN_CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

impl BrazilianCnpjChecksum {
    /// Check digit for `digits` under `weights` (zipped, so the shorter wins).
    pub(crate) fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
        let sum: u32 = digits
            .iter()
            .zip(weights)
            .map(|(digit, weight)| digit * weight)
            .sum();
        let remainder = sum % 11;
        if remainder < 2 {
            0
        } else {
            11 - remainder
        }
    }

    /// Both check digits for the 12 base digits.
    pub(crate) fn check_digits(base: &[u32]) -> (u32, u32) {
        let first = Self::check_digit(base, &BRAZILIAN_CNPJ_FIRST_WEIGHTS);
        let mut with_first = base.to_vec();
        with_first.push(first);
        let second = Self::check_digit(&with_first, &BRAZILIAN_CNPJ_SECOND_WEIGHTS);
        (first, second)
    }

    pub(crate) fn verify(digits: &[u32]) -> Result<(), DocumentError> {
        let kind = TaxIdKind::Organization;
        if digits.len() != BRAZILIAN_CNPJ_DIGIT_COUNT {
            return Err(DocumentError::WrongLength {
                kind,
                expected: BRAZILIAN_CNPJ_DIGIT_COUNT,
                actual: digits.len(),
            });
        }
        if all_identical(digits) {
            return Err(DocumentError::RepeatedDigits { kind });
        }

        let checks: [(usize, &[u32]); 2] = [
            (12, &BRAZILIAN_CNPJ_FIRST_WEIGHTS),
            (13, &BRAZILIAN_CNPJ_SECOND_WEIGHTS),
        ];
        for (position, weights) in checks {
            let expected = Self::check_digit(&digits[..position], weights);
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

impl Validator for BrazilianCnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn is_valid_match(&self, input: &str) -> bool {
        Self::verify(&digit_values(input)).is_ok()
    }
}

#[cfg(test)]
mod test {
    use crate::document::DocumentError;
    use crate::mask::TaxIdKind;
    use crate::secondary_validation::*;

    #[test]
    fn test_valid_brazilian_cnpj_ids() {
        let valid_ids = vec![
            "11222333000181",
            "11.222.333/0001-81",
            "00.623.904/0001-73",
            "00623904000173",
        ];
        for id in valid_ids {
            assert!(BrazilianCnpjChecksum.is_valid_match(id), "{id}");
        }
    }

    #[test]
    fn test_invalid_brazilian_cnpj_ids() {
        let invalid_ids = vec![
            // valid cpf
            "012.345.678-90",
            // wrong checksum
            "00.623.904/0001-71",
            "00.623.904/0001-53",
            "11222333000182",
            "11222333000191",
            // repeated digits
            "00000000000000",
            "11.111.111/1111-11",
            // wrong length
            "00.623.904/0131001-53",
            "1122233300018",
            "",
        ];
        for id in invalid_ids {
            assert!(!BrazilianCnpjChecksum.is_valid_match(id), "{id}");
        }
    }

    #[test]
    fn test_mutating_check_digits_is_rejected() {
        let valid = "11222333000181";
        for idx in [12, 13] {
            for replacement in '0'..='9' {
                let mut mutated: Vec<char> = valid.chars().collect();
                if mutated[idx] == replacement {
                    continue;
                }
                mutated[idx] = replacement;
                let mutated: String = mutated.into_iter().collect();
                assert!(!BrazilianCnpjChecksum.is_valid_match(&mutated), "{mutated}");
            }
        }
    }

    #[test]
    fn test_check_digits() {
        assert_eq!(
            BrazilianCnpjChecksum::check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]),
            (8, 1)
        );
        assert_eq!(
            BrazilianCnpjChecksum::check_digits(&[0, 0, 6, 2, 3, 9, 0, 4, 0, 0, 0, 1]),
            (7, 3)
        );
    }

    #[test]
    fn test_verify_reports_first_failing_check_digit() {
        let digits = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1, 8, 2];
        assert_eq!(
            BrazilianCnpjChecksum::verify(&digits),
            Err(DocumentError::CheckDigitMismatch {
                kind: TaxIdKind::Organization,
                position: 13,
                expected: 1,
                actual: 2,
            })
        );
    }
}
