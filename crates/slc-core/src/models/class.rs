use serde::{Deserialize, Serialize};

/// One of the two user-defined categories being distinguished.
///
/// Properties are unique; insertion order is kept for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: Vec<String>,
}

impl Class {
    pub fn new<N, I, P>(name: N, properties: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }
}
