use crate::domain::Timestamps;
use std::fmt::{Display, Formatter};

/// Legacy record listing the data fields a scheduled device action is expected to report.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct DeviceReport {
    pub timestamps: Timestamps,
    pub id: String,
    pub name: String,
    pub device: String,
    pub action: String,
    pub expected: Vec<String>,
}

impl DeviceReport {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Display for DeviceReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(err) => write!(f, "{}", err),
        }
    }
}
