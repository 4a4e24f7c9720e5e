use crate::str_utils::{clamped_slice, extract_digits};

/// Length of `NNNNN-NNN`
pub const POSTAL_CODE_MASKED_LEN: usize = 9;

/// Masks a CEP as `NNNNN-NNN`, dropping digits past the eighth.
pub fn format_postal_code(input: &str) -> String {
    let digits = extract_digits(input);
    if digits.len() <= 5 {
        return digits;
    }
    format!("{}-{}", &digits[..5], clamped_slice(&digits, 5, 8))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_postal_code() {
        let test_cases = vec![
            ("", ""),
            ("0131", "0131"),
            ("01310", "01310"),
            ("013101", "01310-1"),
            ("01310100", "01310-100"),
            ("0131010099", "01310-100"),
            ("01310-100", "01310-100"),
            ("CEP: 01.310/100", "01310-100"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(format_postal_code(input), expected, "input: {input:?}");
        }
        assert_eq!(format_postal_code("01310100").len(), POSTAL_CODE_MASKED_LEN);
    }
}
