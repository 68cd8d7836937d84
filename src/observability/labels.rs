use std::collections::BTreeMap;

use metrics::{IntoLabels, Label, SharedString};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Holder of multiple [Label] providing some methods to easily clone and adds new labels in it.
///
/// (De)serializes as a map of label keys to values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    /// Clone the actual [Labels] with additional key-value labels
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(additional_labels.iter().map(Label::from));
        Labels(tags)
    }

    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    pub fn empty() -> Self {
        NO_LABEL
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(Label::key)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

impl Serialize for Labels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for label in &self.0 {
            map.serialize_entry(label.key(), label.value())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Labels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let labels = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(Labels(
            labels
                .into_iter()
                .map(|(key, value)| Label::new(key, value))
                .collect(),
        ))
    }
}
