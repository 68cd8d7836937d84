mod module10_checksum;

pub use crate::secondary_validation::module10_checksum::{
    compute_check_digit, validate, Module10Checksum,
};
pub(crate) use crate::secondary_validation::module10_checksum::{
    validate_normalized, IDENTIFIER_LENGTH, PAYLOAD_LENGTH,
};
use crate::verdict::ValidationVerdict;

/// Separator allowed between digit groups of an identifier
pub const SEPARATOR: char = '-';

pub trait Validator: Send + Sync {
    fn validate(&self, input: &str) -> ValidationVerdict;

    fn is_valid_match(&self, input: &str) -> bool {
        self.validate(input).is_valid()
    }
}

/// Remove every separator from the input, keeping the other characters in order
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| *c != SEPARATOR).collect()
}

/// Double a digit and fold the result back into a single digit
#[inline]
fn double_and_fold(digit: u32) -> u32 {
    if digit > 4 {
        digit * 2 - 9
    } else {
        digit * 2
    }
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;

    #[test]
    fn normalize_only_strips_hyphens() {
        assert_eq!(normalize("001-1234567-8"), "00112345678");
        assert_eq!(normalize("--"), "");
        assert_eq!(normalize(" 001 1234567 8 "), " 001 1234567 8 ");
        assert_eq!(normalize("a–b"), "a–b");
    }

    #[test]
    fn folded_doubles() {
        let folded: Vec<u32> = (0..10).map(double_and_fold).collect();
        assert_eq!(folded, vec![0, 2, 4, 6, 8, 1, 3, 5, 7, 9]);
    }
}
