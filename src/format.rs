use crate::secondary_validation::{IDENTIFIER_LENGTH, PAYLOAD_LENGTH, SEPARATOR};

/// Number of digits before the first separator
const FIRST_GROUP_LENGTH: usize = 3;

/// Format the current content of an input field as `DDD-DDDDDDD-D` while it is being typed.
///
/// Non-digit characters are dropped and only the first 11 digits are kept. The first
/// separator appears once there are more than 3 digits and the second one once the check
/// digit is typed. Formatting an already formatted value returns it unchanged.
pub fn format_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(IDENTIFIER_LENGTH)
        .collect();

    if digits.len() <= FIRST_GROUP_LENGTH {
        return digits;
    }

    let mut formatted = String::with_capacity(IDENTIFIER_LENGTH + 2);
    formatted.push_str(&digits[..FIRST_GROUP_LENGTH]);
    formatted.push(SEPARATOR);
    if digits.len() <= PAYLOAD_LENGTH {
        formatted.push_str(&digits[FIRST_GROUP_LENGTH..]);
    } else {
        formatted.push_str(&digits[FIRST_GROUP_LENGTH..PAYLOAD_LENGTH]);
        formatted.push(SEPARATOR);
        formatted.push_str(&digits[PAYLOAD_LENGTH..]);
    }
    formatted
}
