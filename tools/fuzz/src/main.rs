use afl::fuzz;
use brdoc::{
    extract_digits, format_phone, format_postal_code, format_tax_id, is_valid_cnpj, is_valid_cpf,
    Cnpj, Cpf, TaxIdKind,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

/// Input layout: `<text>,<rng seed>`
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_kind(rng: &mut StdRng) -> TaxIdKind {
    if rng.gen_bool(0.5) {
        TaxIdKind::Individual
    } else {
        TaxIdKind::Organization
    }
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let digits = extract_digits(input);
    let kind = gen_kind(&mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Digits: {:?}", digits);
        println!("Kind: {:?}", kind);
    }

    // masks keep the digits and are idempotent
    let masked = format_tax_id(input, kind);
    assert_eq!(extract_digits(&masked), digits);
    assert_eq!(format_tax_id(&masked, kind), masked);

    let phone = format_phone(input);
    assert_eq!(format_phone(&phone), phone);
    assert!(phone.len() <= brdoc::PHONE_MASKED_LEN);

    let postal_code = format_postal_code(input);
    assert_eq!(format_postal_code(&postal_code), postal_code);
    assert!(postal_code.len() <= brdoc::POSTAL_CODE_MASKED_LEN);

    // validity only depends on the digits
    assert_eq!(is_valid_cpf(input), is_valid_cpf(&digits));
    assert_eq!(is_valid_cnpj(input), is_valid_cnpj(&digits));
    assert_eq!(is_valid_cpf(input), Cpf::parse(input).is_ok());
    assert_eq!(is_valid_cnpj(input), Cnpj::parse(input).is_ok());
    if let Ok(cpf) = Cpf::parse(input) {
        assert_eq!(cpf.to_string(), format_tax_id(&digits, TaxIdKind::Individual));
    }

    // typing a complete identifier digit by digit only ever appends
    let typed_len = rng.gen_range(0..=kind.digit_count()).min(digits.len());
    let mut shown = String::new();
    for end in 1..=typed_len {
        let next = format_tax_id(&format!("{}{}", shown, &digits[end - 1..end]), kind);
        assert!(next.starts_with(&shown));
        shown = next;
    }
}
