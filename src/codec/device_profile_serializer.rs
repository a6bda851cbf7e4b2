use crate::codec::field::Field;
use crate::domain::{Command, DescribedObject, DeviceProfile, DeviceResource, ProfileResource};
use serde::{Serialize, Serializer};

// Zero values are omitted so a consumer merging a partial update can tell "not supplied" from a supplied value
impl Serialize for DeviceProfile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Outgoing<'a> {
            #[serde(flatten)]
            described_object: &'a DescribedObject,
            #[serde(skip_serializing_if = "Field::is_absent")]
            id: Field<&'a str>,
            #[serde(skip_serializing_if = "Field::is_absent")]
            name: Field<&'a str>,
            #[serde(skip_serializing_if = "Field::is_absent")]
            manufacturer: Field<&'a str>,
            #[serde(skip_serializing_if = "Field::is_absent")]
            model: Field<&'a str>,
            #[serde(skip_serializing_if = "Field::is_absent")]
            labels: Field<&'a [String]>,
            #[serde(skip_serializing_if = "Field::is_absent")]
            device_resources: Field<&'a [DeviceResource]>,
            #[serde(skip_serializing_if = "Field::is_absent")]
            device_commands: Field<&'a [ProfileResource]>,
            #[serde(skip_serializing_if = "Field::is_absent")]
            core_commands: Field<&'a [Command]>,
        }

        Outgoing {
            described_object: &self.described_object,
            id: Field::absent_if_zero(self.id.as_str()),
            name: Field::absent_if_zero(self.name.as_str()),
            manufacturer: Field::absent_if_zero(self.manufacturer.as_str()),
            model: Field::absent_if_zero(self.model.as_str()),
            labels: Field::absent_if_zero(self.labels.as_slice()),
            device_resources: Field::absent_if_zero(self.device_resources.as_slice()),
            device_commands: Field::absent_if_zero(self.device_commands.as_slice()),
            core_commands: Field::absent_if_zero(self.core_commands.as_slice()),
        }
        .serialize(serializer)
    }
}
