use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::verdict::ValidationVerdict;

pub const VALID_MESSAGE: &str = "CÉDULA ES CORRECTA";
pub const INVALID_MESSAGE: &str = "CÉDULA ES INCORRECTA";

/// Classes always set on a rendered result
const BASE_CLASS_NAME: &str = "resultado show";

/// Success/failure flag of a rendered result. Its string form is the class used to style it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
pub enum ResultStyle {
    #[serde(rename = "correcta")]
    #[strum(serialize = "correcta")]
    Correct,
    #[serde(rename = "incorrecta")]
    #[strum(serialize = "incorrecta")]
    Incorrect,
}

/// User facing rendering of a [ValidationVerdict]
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub message: &'static str,
    pub style: ResultStyle,
}

impl Presentation {
    pub fn is_success(&self) -> bool {
        self.style == ResultStyle::Correct
    }

    /// Full class list of the result element, e.g. `resultado show correcta`
    pub fn class_name(&self) -> String {
        format!("{} {}", BASE_CLASS_NAME, self.style)
    }
}

impl From<ValidationVerdict> for Presentation {
    fn from(verdict: ValidationVerdict) -> Self {
        match verdict {
            ValidationVerdict::Valid => Presentation {
                message: VALID_MESSAGE,
                style: ResultStyle::Correct,
            },
            ValidationVerdict::Invalid { .. } => Presentation {
                message: INVALID_MESSAGE,
                style: ResultStyle::Incorrect,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use crate::presentation::*;
    use crate::verdict::{InvalidReason, ValidationVerdict};
    use strum::IntoEnumIterator;

    #[test]
    fn valid_verdict_is_rendered_as_success() {
        let presentation = Presentation::from(ValidationVerdict::Valid);
        assert_eq!(presentation.message, "CÉDULA ES CORRECTA");
        assert!(presentation.is_success());
        assert_eq!(presentation.class_name(), "resultado show correcta");
    }

    #[test]
    fn every_invalid_verdict_has_the_same_rendering() {
        for reason in InvalidReason::iter() {
            let presentation = Presentation::from(ValidationVerdict::from(reason));
            assert_eq!(presentation.message, "CÉDULA ES INCORRECTA");
            assert_eq!(presentation.style, ResultStyle::Incorrect);
            assert_eq!(presentation.class_name(), "resultado show incorrecta");
        }
    }

    #[test]
    fn presentation_json() {
        let presentation = Presentation::from(ValidationVerdict::Valid);
        assert_eq!(
            serde_json::to_value(presentation).unwrap(),
            serde_json::json!({"message": "CÉDULA ES CORRECTA", "style": "correcta"})
        );
    }
}
