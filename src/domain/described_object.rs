use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// Epoch millisecond timestamps shared by most entities. Zero means "not set".
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub created: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub modified: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub origin: i64,
}

impl Timestamps {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        to_date_time(self.created)
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        to_date_time(self.modified)
    }

    pub fn is_empty(&self) -> bool {
        self.created == 0 && self.modified == 0 && self.origin == 0
    }
}

fn to_date_time(millis: i64) -> Option<DateTime<Utc>> {
    match millis {
        0 => None,
        millis => DateTime::from_timestamp_millis(millis),
    }
}

/// Free-form metadata composed into entities and inlined at the top level of their wire form.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribedObject {
    #[serde(flatten)]
    pub timestamps: Timestamps,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}
