use crate::codec::IncomingDeviceProfile;
use crate::domain::validation::{self, ContractError};
use crate::domain::{Command, DescribedObject, DeviceResource, ProfileResource, Timestamps};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::trace;

/// Template describing the resources and commands of a class of devices.
///
/// Decoding a profile validates it as the last step, so a decoded profile is always [`Validation::Validated`].
/// A profile built directly starts out [`Validation::Unvalidated`].
///
/// Once validated, [`DeviceProfile::validate`] is a no-op, even when fields were changed in the meantime.
/// Use [`DeviceProfile::revalidate`] or [`DeviceProfile::check`] after mutating a profile.
#[derive(Clone, Default, Debug)]
pub struct DeviceProfile {
    pub described_object: DescribedObject,
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub labels: Vec<String>,
    pub device_resources: Vec<DeviceResource>,
    pub device_commands: Vec<ProfileResource>,
    pub core_commands: Vec<Command>,
    validation: Validation,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Validation {
    #[default]
    Unvalidated,
    Validated,
}

impl DeviceProfile {
    pub fn builder() -> DeviceProfileBuilder {
        DeviceProfileBuilder::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let incoming = serde_json::from_str::<IncomingDeviceProfile>(json)?;
        Self::accept(incoming)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ProfileError> {
        let incoming = serde_json::from_slice::<IncomingDeviceProfile>(bytes)?;
        Self::accept(incoming)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        let incoming = serde_yaml::from_str::<IncomingDeviceProfile>(yaml)?;
        Self::accept(incoming)
    }

    fn accept(incoming: IncomingDeviceProfile) -> Result<Self, ProfileError> {
        let mut profile = incoming.into_profile();
        profile.validate()?;
        Ok(profile)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Validates the profile unless it has been validated before.
    pub fn validate(&mut self) -> Result<(), ContractError> {
        if self.validation == Validation::Validated {
            trace!(profile = self.name, "Device profile already validated");
            return Ok(());
        }

        validation::check(self)?;
        self.validation = Validation::Validated;
        Ok(())
    }

    /// Runs every rule against the current field values. The validation state is neither consulted nor updated.
    pub fn check(&self) -> Result<(), ContractError> {
        validation::check(self)
    }

    pub fn revalidate(&mut self) -> Result<(), ContractError> {
        self.invalidate();
        self.validate()
    }

    pub fn invalidate(&mut self) {
        self.validation = Validation::Unvalidated;
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    pub fn is_validated(&self) -> bool {
        self.validation == Validation::Validated
    }
}

// The validation state is bookkeeping, not part of the profile's value
impl PartialEq for DeviceProfile {
    fn eq(&self, other: &Self) -> bool {
        self.described_object == other.described_object
            && self.id == other.id
            && self.name == other.name
            && self.manufacturer == other.manufacturer
            && self.model == other.model
            && self.labels == other.labels
            && self.device_resources == other.device_resources
            && self.device_commands == other.device_commands
            && self.core_commands == other.core_commands
    }
}

impl Display for DeviceProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_json() {
            Ok(json) => f.write_str(&json),
            Err(err) => write!(f, "{}", err),
        }
    }
}

#[derive(Default)]
pub struct DeviceProfileBuilder {
    profile: DeviceProfile,
}

impl DeviceProfileBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.profile.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.profile.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.profile.described_object.description = description.into();
        self
    }

    pub fn timestamps(mut self, timestamps: Timestamps) -> Self {
        self.profile.described_object.timestamps = timestamps;
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.profile.manufacturer = manufacturer.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.profile.model = model.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.profile.labels.push(label.into());
        self
    }

    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.profile.labels = labels;
        self
    }

    pub fn device_resource(mut self, resource: DeviceResource) -> Self {
        self.profile.device_resources.push(resource);
        self
    }

    pub fn device_resources(mut self, resources: Vec<DeviceResource>) -> Self {
        self.profile.device_resources = resources;
        self
    }

    pub fn device_command(mut self, command: ProfileResource) -> Self {
        self.profile.device_commands.push(command);
        self
    }

    pub fn device_commands(mut self, commands: Vec<ProfileResource>) -> Self {
        self.profile.device_commands = commands;
        self
    }

    pub fn core_command(mut self, command: Command) -> Self {
        self.profile.core_commands.push(command);
        self
    }

    pub fn core_commands(mut self, commands: Vec<Command>) -> Self {
        self.profile.core_commands = commands;
        self
    }

    pub fn build(self) -> DeviceProfile {
        self.profile
    }

    pub fn try_build(self) -> Result<DeviceProfile, ContractError> {
        let mut profile = self.profile;
        profile.validate()?;
        Ok(profile)
    }
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("json deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml deserialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl ProfileError {
    pub fn is_contract_invalid(&self) -> bool {
        matches!(self, ProfileError::Contract(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn thermostat() -> DeviceProfile {
        DeviceProfile::builder()
            .id("6c4f4d1e-0d9c-4a8e-a2c6-1d9bd8a1f2a0")
            .name("thermostat")
            .description("Smart thermostat")
            .timestamps(Timestamps {
                created: 1_700_000_000_000,
                modified: 1_700_000_360_000,
                origin: 0,
            })
            .manufacturer("Acme")
            .model("T-1000")
            .label("hvac")
            .label("climate")
            .device_resource(DeviceResource::new("temperature"))
            .device_command(ProfileResource::new("temperature"))
            .core_command(Command::new("temperature"))
            .build()
    }

    #[test]
    fn built_profiles_start_unvalidated() {
        let profile = thermostat();
        assert_eq!(profile.validation(), Validation::Unvalidated);
        assert!(!profile.is_validated());
    }

    #[test]
    fn validate_records_success() {
        let mut profile = thermostat();

        assert_eq!(profile.validate(), Ok(()));
        assert!(profile.is_validated());
    }

    #[test]
    fn validate_does_not_record_failure() {
        let mut profile = DeviceProfile::builder().model("T-1000").build();

        assert_eq!(profile.validate(), Err(ContractError::BlankIdentity));
        assert_eq!(profile.validation(), Validation::Unvalidated);
    }

    #[test]
    fn validate_is_memoized_across_mutation() {
        let mut profile = thermostat();
        assert_eq!(profile.validate(), Ok(()));

        profile.core_commands.push(Command::new("temperature"));

        assert_eq!(profile.validate(), Ok(()));
        assert!(profile.is_validated());
    }

    #[test]
    fn check_and_revalidate_see_mutations() {
        let mut profile = thermostat();
        profile.validate().unwrap();

        profile.core_commands.push(Command::new("temperature"));

        let duplicate = ContractError::DuplicateCommandName {
            name: "temperature".to_string(),
        };
        assert_eq!(profile.check(), Err(duplicate.clone()));
        assert!(profile.is_validated());
        assert_eq!(profile.revalidate(), Err(duplicate));
        assert!(!profile.is_validated());
    }

    #[test]
    fn try_build_validates() {
        assert!(DeviceProfile::builder().name("thermostat").try_build().unwrap().is_validated());
        assert_eq!(DeviceProfile::builder().try_build(), Err(ContractError::BlankIdentity));
    }

    #[test]
    fn equality_ignores_the_validation_state() {
        let mut validated = thermostat();
        validated.validate().unwrap();

        assert_eq!(validated, thermostat());
    }

    #[test]
    fn round_trips_through_json() {
        let profile = thermostat();

        let decoded = DeviceProfile::from_json(&profile.to_json().unwrap()).unwrap();

        assert_eq!(decoded, profile);
        assert!(decoded.is_validated());
    }

    #[test]
    fn round_trips_through_yaml() {
        let profile = thermostat();

        let decoded = DeviceProfile::from_yaml(&profile.to_yaml().unwrap()).unwrap();

        assert_eq!(decoded, profile);
        assert!(decoded.is_validated());
    }

    #[test]
    fn decodes_from_bytes() {
        let profile = DeviceProfile::from_slice(br#"{"name":"thermostat"}"#).unwrap();
        assert_eq!(profile, DeviceProfile::builder().name("thermostat").build());
    }

    #[test]
    fn structural_errors_are_not_contract_errors() {
        let err = DeviceProfile::from_json(r#"{"coreCommands":"not-an-array"}"#).unwrap_err();

        assert!(matches!(err, ProfileError::Json(_)));
        assert!(!err.is_contract_invalid());
    }

    #[test]
    fn malformed_json_is_a_structural_error() {
        assert!(matches!(DeviceProfile::from_json(r#"{"name":"#), Err(ProfileError::Json(_))));
        assert!(matches!(DeviceProfile::from_json("[]"), Err(ProfileError::Json(_))));
    }

    #[test]
    fn decode_fails_on_contract_violations() {
        let err = DeviceProfile::from_json(r#"{"manufacturer":"Acme"}"#).unwrap_err();

        assert!(err.is_contract_invalid());
        assert_eq!(err.to_string(), "contract invalid: id and name both blank");
    }

    #[test]
    fn decode_fails_on_duplicate_command_names() {
        let json = r#"{"name":"thermostat","coreCommands":[{"name":"A"},{"name":"A"}]}"#;

        let err = DeviceProfile::from_json(json).unwrap_err();

        assert!(matches!(err, ProfileError::Contract(ContractError::DuplicateCommandName { .. })));
    }

    #[test]
    fn displays_as_json() {
        let profile = DeviceProfile::builder().name("thermostat").manufacturer("").build();
        assert_eq!(profile.to_string(), r#"{"name":"thermostat"}"#);
    }
}
