use crate::observability::labels::Labels;
use crate::secondary_validation::{Module10Checksum, Validator};
use crate::validator::metrics::ValidationMetrics;
use crate::verdict::ValidationVerdict;

pub mod config;
pub mod error;
pub mod metrics;


/// Validates national identity numbers and counts the outcomes.
///
/// Build one from a [config::ValidatorConfig] to attach labels to its metrics, or use
/// [CedulaValidator::default] for unlabelled metrics.
#[derive(Default)]
pub struct CedulaValidator {
    metrics: ValidationMetrics,
}

impl CedulaValidator {
    pub fn new(labels: &Labels) -> Self {
        CedulaValidator {
            metrics: ValidationMetrics::new(labels),
        }
    }
}

impl Validator for CedulaValidator {
    fn validate(&self, input: &str) -> ValidationVerdict {
        let verdict = Module10Checksum.validate(input);
        self.metrics.record(verdict);
        verdict
    }
}
