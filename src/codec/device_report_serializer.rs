use crate::codec::field::Field;
use crate::domain::{DeviceReport, Timestamps};
use serde::{Serialize, Serializer};

// Unlike profiles, reports keep every key: the id and expected fields verbatim, other empty strings as null
impl Serialize for DeviceReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Outgoing<'a> {
            #[serde(flatten)]
            timestamps: &'a Timestamps,
            id: &'a str,
            name: Field<&'a str>,
            device: Field<&'a str>,
            action: Field<&'a str>,
            expected: &'a [String],
        }

        Outgoing {
            timestamps: &self.timestamps,
            id: &self.id,
            name: Field::null_if_zero(self.name.as_str()),
            device: Field::null_if_zero(self.device.as_str()),
            action: Field::null_if_zero(self.action.as_str()),
            expected: &self.expected,
        }
        .serialize(serializer)
    }
}
