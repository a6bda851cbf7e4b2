use crate::codec::field::Field;
use crate::domain::{DeviceReport, Timestamps};
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for DeviceReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Incoming {
            #[serde(flatten)]
            timestamps: Timestamps,
            #[serde(default)]
            id: Field<String>,
            #[serde(default)]
            name: Field<String>,
            #[serde(default)]
            device: Field<String>,
            #[serde(default)]
            action: Field<String>,
            #[serde(default)]
            expected: Field<Vec<String>>,
        }

        let incoming = Incoming::deserialize(deserializer)?;
        Ok(DeviceReport {
            timestamps: incoming.timestamps,
            id: incoming.id.into_value(),
            name: incoming.name.into_value(),
            device: incoming.device.into_value(),
            action: incoming.action.into_value(),
            expected: incoming.expected.into_value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_nulls_as_empty_values() {
        let json = r#"{"id":"","name":null,"device":null,"action":null,"expected":null}"#;

        let report = DeviceReport::from_json(json).unwrap();

        assert_eq!(report, DeviceReport::default());
    }

    #[test]
    fn decodes_a_report() {
        let json = r#"{"created":7,"id":"a1","name":"hourly","device":"thermostat-01","action":"every-hour","expected":["temperature","humidity"]}"#;

        let report = DeviceReport::from_json(json).unwrap();

        assert_eq!(report.timestamps.created, 7);
        assert_eq!(report.name, "hourly");
        assert_eq!(report.device, "thermostat-01");
        assert_eq!(report.action, "every-hour");
        assert_eq!(report.expected, vec!["temperature".to_string(), "humidity".to_string()]);
    }

    #[test]
    fn rejects_type_mismatches() {
        assert!(DeviceReport::from_json(r#"{"expected":"temperature"}"#).is_err());
    }
}
