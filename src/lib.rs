// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod cedula;
mod format;
mod observability;
mod presentation;
mod secondary_validation;
mod validator;
mod verdict;

// This is the public API of the library
pub use cedula::Cedula;
pub use format::format_input;
pub use observability::labels::Labels;
pub use presentation::{Presentation, ResultStyle, INVALID_MESSAGE, VALID_MESSAGE};
pub use secondary_validation::{
    compute_check_digit, normalize, validate, Module10Checksum, Validator, SEPARATOR,
};
pub use validator::{
    config::ValidatorConfig, error::ValidatorConfigError, metrics::ValidationMetrics,
    metrics::VALIDATION_COUNT, CedulaValidator,
};
pub use verdict::{InvalidReason, ValidationVerdict};
