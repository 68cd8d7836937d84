use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidatorConfigError {
    #[error("Metric label keys must not be empty")]
    EmptyLabelKey,

    #[error("The metric label key `{0}` is reserved")]
    ReservedLabelKey(String),
}
