use afl::fuzz;
use nic_cedula::{
    check_letter, validate, CedulaValidator, InvalidReason, NicaraguanCedulaChecksum, Validator,
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

/// Input format: `<candidate>,<rng seed bytes>`. Without a comma the whole
/// input is the candidate.
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes).unwrap_or((bytes, &[][..]));
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    check_surfaces_agree(input_str);
    check_generated(StdRng::seed_from_u64(rng_seed));

    Some(())
}

fn check_surfaces_agree(input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let result = validate(input);

    #[cfg(feature = "manual_test")]
    println!("Result: {:?}", result);

    let mut validator = CedulaValidator::new();
    validator.set_cedula(input);
    assert_eq!(validator.validate(), result);
    assert_eq!(validator.is_valid(), result.is_ok());
    assert_eq!(NicaraguanCedulaChecksum.is_valid_match(input), result.is_ok());

    if let Ok(cedula) = result {
        // the display form must validate to the same value
        assert_eq!(validate(&cedula.to_string()), Ok(cedula));
    }
}

/// Build a well formed cédula from the rng, then corrupt the letter.
fn check_generated(mut rng: StdRng) {
    let body = format!(
        "{:03}{:02}{:02}{:02}{:04}",
        rng.gen_range(0..1000),
        rng.gen_range(1..=31),
        rng.gen_range(1..=12),
        rng.gen_range(0..100),
        rng.gen_range(0..10000),
    );
    let letter = check_letter(&body).unwrap();

    let cedula = format!("{body}{letter}");
    assert!(validate(&cedula).is_ok(), "{cedula}");
    assert!(validate(&cedula.to_lowercase()).is_ok(), "{cedula}");

    let wrong_letter = if letter == 'A' { 'B' } else { 'A' };
    assert_eq!(
        validate(&format!("{body}{wrong_letter}")),
        Err(InvalidReason::ChecksumMismatch)
    );
}
