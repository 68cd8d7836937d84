use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::format::format_input;
use crate::secondary_validation::{validate_normalized, PAYLOAD_LENGTH};
use crate::verdict::InvalidReason;

/// A national identity number whose check digit has been verified.
///
/// Holds the 11 normalized digits. Displays and serializes as `DDD-DDDDDDD-D`.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub struct Cedula {
    digits: String,
}

impl Cedula {
    pub fn parse(input: &str) -> Result<Self, InvalidReason> {
        let digits = validate_normalized(input)?;
        Ok(Cedula { digits })
    }

    /// The 11 digits without separators
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The first 10 digits, over which the check digit is computed
    pub fn payload(&self) -> &str {
        &self.digits[..PAYLOAD_LENGTH]
    }

    pub fn check_digit(&self) -> u32 {
        u32::from(self.digits.as_bytes()[PAYLOAD_LENGTH] - b'0')
    }
}

impl FromStr for Cedula {
    type Err = InvalidReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cedula::parse(s)
    }
}

impl fmt::Display for Cedula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_input(&self.digits))
    }
}

#[cfg(test)]
mod test {
    use crate::cedula::Cedula;
    use crate::verdict::InvalidReason;

    #[test]
    fn parse_valid_cedula() {
        let cedula: Cedula = "0-0-1-1234567-3".parse().unwrap();
        assert_eq!(cedula.digits(), "00112345673");
        assert_eq!(cedula.payload(), "0011234567");
        assert_eq!(cedula.check_digit(), 3);
        assert_eq!(cedula.to_string(), "001-1234567-3");
    }

    #[test]
    fn parse_reports_the_reason() {
        assert_eq!(Cedula::parse("12345"), Err(InvalidReason::WrongLength));
        assert_eq!(
            Cedula::parse("abc-1234567-8"),
            Err(InvalidReason::NonDigitCharacter)
        );
        assert_eq!(
            Cedula::parse("001-1234567-8"),
            Err(InvalidReason::ChecksumMismatch)
        );
    }

    #[test]
    fn separators_do_not_change_equality() {
        assert_eq!(
            Cedula::parse("00112345673").unwrap(),
            Cedula::parse("001-1234567-3").unwrap()
        );
    }

    #[test]
    fn serializes_formatted() {
        let cedula = Cedula::parse("00000000000").unwrap();
        let json = serde_json::to_string(&cedula).unwrap();
        assert_eq!(json, r#""000-0000000-0""#);
        assert_eq!(serde_json::from_str::<Cedula>(&json).unwrap(), cedula);
    }

    #[test]
    fn deserializing_an_invalid_cedula_fails() {
        let err = serde_json::from_str::<Cedula>(r#""001-1234567-8""#).unwrap_err();
        assert!(err
            .to_string()
            .contains("The check digit does not match the computed one"));
    }
}
