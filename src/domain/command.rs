use crate::domain::Timestamps;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named get/put operation exposed uniformly for every device of a profile.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    #[serde(flatten)]
    pub timestamps: Timestamps,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Value>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            ..Default::default()
        }
    }
}
