use crate::str_utils::{clamped_slice, extract_digits};

/// Length of `(DD) DDDDD-DDDD`
pub const PHONE_MASKED_LEN: usize = 15;

/// Masks a phone number as `(DD) DDDDD-DDDD`.
///
/// The area code is opened as soon as one digit is typed and closed from the
/// third digit on. Digits past the eleventh are dropped.
pub fn format_phone(input: &str) -> String {
    let digits = extract_digits(input);
    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!(
            "({}) {}-{}",
            &digits[..2],
            &digits[2..7],
            clamped_slice(&digits, 7, 11)
        ),
    }
}
