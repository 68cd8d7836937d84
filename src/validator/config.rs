use crate::observability::labels::Labels;
use crate::validator::error::ValidatorConfigError;
use crate::validator::metrics::{OUTCOME, REASON};
use crate::validator::CedulaValidator;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ValidatorConfig {
    /// Added to every metric emitted by the validator
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn validate(&self) -> Result<(), ValidatorConfigError> {
        for key in self.labels.keys() {
            if key.is_empty() {
                return Err(ValidatorConfigError::EmptyLabelKey);
            }
            if key == OUTCOME || key == REASON {
                return Err(ValidatorConfigError::ReservedLabelKey(key.to_string()));
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<CedulaValidator, ValidatorConfigError> {
        self.validate()?;
        Ok(CedulaValidator::new(&self.labels))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
