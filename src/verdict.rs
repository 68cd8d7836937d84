use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoStaticStr};
use thiserror::Error;

/// Why an identifier was rejected.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Error,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum InvalidReason {
    #[error("The identifier must contain exactly 11 digits")]
    WrongLength,

    #[error("The identifier may only contain digits and hyphens")]
    NonDigitCharacter,

    #[error("The check digit does not match the computed one")]
    ChecksumMismatch,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ValidationVerdict {
    Valid,
    Invalid { reason: InvalidReason },
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationVerdict::Valid)
    }

    /// The rejection reason, `None` for a valid identifier
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationVerdict::Valid => None,
            ValidationVerdict::Invalid { reason } => Some(*reason),
        }
    }
}

impl From<InvalidReason> for ValidationVerdict {
    fn from(reason: InvalidReason) -> Self {
        ValidationVerdict::Invalid { reason }
    }
}

impl<T> From<Result<T, InvalidReason>> for ValidationVerdict {
    fn from(result: Result<T, InvalidReason>) -> Self {
        match result {
            Ok(_) => ValidationVerdict::Valid,
            Err(reason) => reason.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::verdict::{InvalidReason, ValidationVerdict};
    use serde_test::{assert_tokens, Token};

    #[test]
    fn reason_is_only_set_on_invalid_verdicts() {
        assert_eq!(ValidationVerdict::Valid.reason(), None);
        assert!(ValidationVerdict::Valid.is_valid());

        let verdict = ValidationVerdict::from(InvalidReason::ChecksumMismatch);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.reason(), Some(InvalidReason::ChecksumMismatch));
    }

    #[test]
    fn verdict_from_result() {
        assert_eq!(
            ValidationVerdict::from(Ok::<(), InvalidReason>(())),
            ValidationVerdict::Valid
        );
        assert_eq!(
            ValidationVerdict::from(Err::<(), _>(InvalidReason::WrongLength)),
            ValidationVerdict::Invalid {
                reason: InvalidReason::WrongLength
            }
        );
    }

    #[test]
    fn reason_names() {
        let name: &'static str = InvalidReason::NonDigitCharacter.into();
        assert_eq!(name, "non_digit_character");
        assert_eq!(InvalidReason::WrongLength.as_ref(), "wrong_length");
        assert_eq!(
            InvalidReason::ChecksumMismatch.to_string(),
            "The check digit does not match the computed one"
        );
    }

    #[test]
    fn reason_serde_tokens() {
        assert_tokens(
            &InvalidReason::ChecksumMismatch,
            &[Token::UnitVariant {
                name: "InvalidReason",
                variant: "ChecksumMismatch",
            }],
        );
    }

    #[test]
    fn verdict_json_is_tagged() {
        let verdict = ValidationVerdict::Invalid {
            reason: InvalidReason::WrongLength,
        };
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(json, r#"{"type":"Invalid","reason":"WrongLength"}"#);
        assert_eq!(
            serde_json::from_str::<ValidationVerdict>(&json).unwrap(),
            verdict
        );
        assert_eq!(
            serde_json::to_string(&ValidationVerdict::Valid).unwrap(),
            r#"{"type":"Valid"}"#
        );
    }
}
