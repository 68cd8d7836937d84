use afl::fuzz;
use cedula_check::{format_input, normalize, validate, Cedula, InvalidReason, ValidationVerdict};

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

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    let verdict = validate(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Normalized: {:?}", normalize(input));
        println!("Verdict: {:?}", verdict);
    }

    // pure function
    assert_eq!(verdict, validate(input));

    // the value type agrees with the verdict
    match Cedula::parse(input) {
        Ok(cedula) => {
            assert_eq!(verdict, ValidationVerdict::Valid);
            assert_eq!(cedula.digits(), normalize(input));
            assert_eq!(validate(&cedula.to_string()), ValidationVerdict::Valid);
        }
        Err(reason) => assert_eq!(verdict.reason(), Some(reason)),
    }

    if normalize(input).chars().count() != 11 {
        assert_eq!(verdict.reason(), Some(InvalidReason::WrongLength));
    }

    let formatted = format_input(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Formatted: {:?}", formatted);
    }

    assert_eq!(format_input(&formatted), formatted);
    assert!(normalize(&formatted).len() <= 11);
    // formatting never changes the verdict of a valid identifier
    if verdict.is_valid() {
        assert_eq!(validate(&formatted), ValidationVerdict::Valid);
    }
}
