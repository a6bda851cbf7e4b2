use crate::codec::field::Field;
use crate::domain::{Command, DescribedObject, DeviceProfile, DeviceResource, ProfileResource};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Wire form of a profile as received. Missing keys and `null` decode to zero values instead of failing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IncomingDeviceProfile {
    #[serde(flatten)]
    described_object: DescribedObject,
    #[serde(default)]
    id: Field<String>,
    #[serde(default)]
    name: Field<String>,
    #[serde(default)]
    manufacturer: Field<String>,
    #[serde(default)]
    model: Field<String>,
    #[serde(default)]
    labels: Field<Vec<String>>,
    #[serde(default)]
    device_resources: Field<Vec<DeviceResource>>,
    #[serde(default)]
    device_commands: Field<Vec<ProfileResource>>,
    #[serde(default)]
    core_commands: Field<Vec<Command>>,
}

impl IncomingDeviceProfile {
    /// Converts into an unvalidated profile.
    pub(crate) fn into_profile(self) -> DeviceProfile {
        DeviceProfile::builder()
            .id(self.id.into_value())
            .name(self.name.into_value())
            .description(self.described_object.description)
            .timestamps(self.described_object.timestamps)
            .manufacturer(self.manufacturer.into_value())
            .model(self.model.into_value())
            .labels(self.labels.into_value())
            .device_resources(self.device_resources.into_value())
            .device_commands(self.device_commands.into_value())
            .core_commands(self.core_commands.into_value())
            .build()
    }
}

impl<'de> Deserialize<'de> for DeviceProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut profile = IncomingDeviceProfile::deserialize(deserializer)?.into_profile();
        profile.validate().map_err(Error::custom)?;
        Ok(profile)
    }
}
