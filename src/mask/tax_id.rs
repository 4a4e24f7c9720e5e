use crate::mask::TaxIdKind;
use crate::str_utils::extract_digits;

/// Masks the digits of `input` as a CPF (`NNN.NNN.NNN-NN`) or a CNPJ
/// (`NN.NNN.NNN/NNNN-NN`).
///
/// A separator is only written once a digit follows it. Digits past the full
/// length are absorbed by the group before `-`, which always precedes the last
/// two digits: `123456789012` masks to `123.456.7890-12`.
pub fn format_tax_id(input: &str, kind: TaxIdKind) -> String {
    let digits = extract_digits(input);
    match kind {
        TaxIdKind::Individual => mask_groups(&digits, &[3, 3, 3], &['.', '.', '-']),
        TaxIdKind::Organization => mask_groups(&digits, &[2, 3, 3, 4], &['.', '.', '/', '-']),
    }
}

/// Writes the fixed-width `groups`, each followed by its separator when more
/// digits remain. The last separator is reserved for the final (up to) two
/// digits, so the last group stretches over any excess.
fn mask_groups(digits: &str, groups: &[usize], separators: &[char]) -> String {
    let mut masked = String::with_capacity(digits.len() + separators.len());
    let mut rest = digits;

    for (idx, &width) in groups.iter().enumerate() {
        let is_last_group = idx + 1 == groups.len();
        let width = if is_last_group && rest.len() > width + 2 {
            rest.len() - 2
        } else {
            width
        };

        if rest.len() <= width {
            break;
        }
        let (group, tail) = rest.split_at(width);
        masked.push_str(group);
        masked.push(separators[idx]);
        rest = tail;
    }
    masked.push_str(rest);
    masked
}
