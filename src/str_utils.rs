use std::str::Chars;

/// Keeps the ASCII digits `0`-`9` of `input`, in order, and drops everything else.
pub fn extract_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of the ASCII digits found in `input`.
pub(crate) fn digit_values(input: &str) -> Vec<u32> {
    let mut chars = input.chars();
    let mut digits = vec![];
    while let Some(digit) = get_next_digit(&mut chars) {
        digits.push(digit);
    }
    digits
}

fn get_next_digit(chars: &mut Chars<'_>) -> Option<u32> {
    for char in chars.by_ref() {
        // `to_digit(10)` only accepts ASCII digits
        if let Some(digit) = char.to_digit(10) {
            return Some(digit);
        }
    }
    None
}

/// True when every digit equals the first one. Callers check the length first.
pub(crate) fn all_identical(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// `&input[start..end]` with both bounds clamped to the input length.
///
/// Only used on digit strings, so byte offsets are char boundaries.
pub(crate) fn clamped_slice(input: &str, start: usize, end: usize) -> &str {
    let end = end.min(input.len());
    let start = start.min(end);
    &input[start..end]
}
