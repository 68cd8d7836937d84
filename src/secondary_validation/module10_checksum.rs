use crate::secondary_validation::{double_and_fold, normalize, Validator};
use crate::verdict::{InvalidReason, ValidationVerdict};

pub(crate) const IDENTIFIER_LENGTH: usize = 11;
pub(crate) const PAYLOAD_LENGTH: usize = IDENTIFIER_LENGTH - 1;

/// Module 10 check digit of the national identity number (cédula).
///
/// Unlike the credit card Luhn checksum, the doubled digits are the ones at odd
/// positions counted from the left of the 10 digit payload.
pub struct Module10Checksum;

impl Validator for Module10Checksum {
    fn validate(&self, input: &str) -> ValidationVerdict {
        validate(input)
    }
}

/// Validate an identifier such as `001-1234567-3`. Hyphens are ignored wherever they are.
pub fn validate(identifier: &str) -> ValidationVerdict {
    validate_normalized(identifier).into()
}

/// Returns the normalized 11 digits when the identifier is valid
pub(crate) fn validate_normalized(identifier: &str) -> Result<String, InvalidReason> {
    let normalized = normalize(identifier);

    // count chars, not bytes, so multi-byte characters are reported as non digits
    if normalized.chars().count() != IDENTIFIER_LENGTH {
        return Err(InvalidReason::WrongLength);
    }
    if !normalized.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidReason::NonDigitCharacter);
    }

    // only ASCII digits are left, so byte offsets are char offsets
    let (payload, check_digit) = normalized.split_at(PAYLOAD_LENGTH);
    let expected_check_digit = compute_check_digit(payload);
    let actual_check_digit = check_digit.chars().next().and_then(|c| c.to_digit(10));

    match (expected_check_digit, actual_check_digit) {
        (Some(expected), Some(actual)) if expected == actual => Ok(normalized),
        _ => Err(InvalidReason::ChecksumMismatch),
    }
}

/// Compute the check digit of a 10 digit payload.
///
/// Returns `None` if the payload is not exactly 10 ASCII digits.
pub fn compute_check_digit(payload: &str) -> Option<u32> {
    if payload.len() != PAYLOAD_LENGTH || !payload.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut sum: u32 = 0;
    for (idx, c) in payload.chars().enumerate() {
        let digit = c.to_digit(10)?;
        if idx % 2 == 1 {
            sum += double_and_fold(digit);
        } else {
            sum += digit;
        }
    }

    Some((10 - (sum % 10)) % 10)
}
