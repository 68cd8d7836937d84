use crate::observability::labels::{Labels, NO_LABEL};
use crate::verdict::{InvalidReason, ValidationVerdict};
use metrics::{counter, Counter};

pub const VALIDATION_COUNT: &str = "validation.count";

pub(crate) const OUTCOME: &str = "outcome";
pub(crate) const REASON: &str = "reason";

pub struct ValidationMetrics {
    pub valid: Counter,
    pub wrong_length: Counter,
    pub non_digit_character: Counter,
    pub checksum_mismatch: Counter,
}

impl ValidationMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidationMetrics {
            valid: counter!(
                VALIDATION_COUNT,
                labels.clone_with_labels(&[(OUTCOME, "valid")])
            ),
            wrong_length: invalid_counter(labels, InvalidReason::WrongLength),
            non_digit_character: invalid_counter(labels, InvalidReason::NonDigitCharacter),
            checksum_mismatch: invalid_counter(labels, InvalidReason::ChecksumMismatch),
        }
    }

    pub fn record(&self, verdict: ValidationVerdict) {
        let counter = match verdict.reason() {
            None => &self.valid,
            Some(InvalidReason::WrongLength) => &self.wrong_length,
            Some(InvalidReason::NonDigitCharacter) => &self.non_digit_character,
            Some(InvalidReason::ChecksumMismatch) => &self.checksum_mismatch,
        };
        counter.increment(1);
    }
}

fn invalid_counter(labels: &Labels, reason: InvalidReason) -> Counter {
    let reason: &'static str = reason.into();
    counter!(
        VALIDATION_COUNT,
        labels.clone_with_labels(&[(OUTCOME, "invalid"), (REASON, reason)])
    )
}

impl Default for ValidationMetrics {
    fn default() -> Self {
        ValidationMetrics::new(&NO_LABEL)
    }
}
