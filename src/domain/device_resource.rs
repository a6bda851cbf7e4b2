use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A named, typed data point a device exposes. Its value properties are carried opaquely.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceResource {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub properties: Value,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl DeviceResource {
    pub fn new(name: impl Into<String>) -> Self {
        DeviceResource {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A profile level grouping of resource operations, exposed as a single device command.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileResource {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub get: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub set: Vec<Value>,
}

impl ProfileResource {
    pub fn new(name: impl Into<String>) -> Self {
        ProfileResource {
            name: name.into(),
            ..Default::default()
        }
    }
}
