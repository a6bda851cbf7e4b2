use crate::domain::device_profile::DeviceProfile;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

type Rule = fn(&DeviceProfile) -> Result<(), ContractError>;

// Evaluated in order, the first failing rule is reported
const RULES: [(&str, Rule); 5] = [
    ("unique_command_names", unique_command_names),
    ("identity", identity),
    ("named_device_resources", named_device_resources),
    ("named_device_commands", named_device_commands),
    ("named_core_commands", named_core_commands),
];

pub(crate) fn check(profile: &DeviceProfile) -> Result<(), ContractError> {
    for (rule, predicate) in RULES {
        if let Err(err) = predicate(profile) {
            debug!(rule, profile = profile.name, "🚫 Rejected device profile: {}", err);
            return Err(err);
        }
    }
    Ok(())
}

fn unique_command_names(profile: &DeviceProfile) -> Result<(), ContractError> {
    let mut seen = HashSet::with_capacity(profile.core_commands.len());
    match profile.core_commands.iter().find(|command| !seen.insert(command.name.as_str())) {
        Some(duplicate) => Err(ContractError::DuplicateCommandName {
            name: duplicate.name.clone(),
        }),
        None => Ok(()),
    }
}

fn identity(profile: &DeviceProfile) -> Result<(), ContractError> {
    if profile.id.is_empty() && profile.name.is_empty() {
        return Err(ContractError::BlankIdentity);
    }
    Ok(())
}

fn named_device_resources(profile: &DeviceProfile) -> Result<(), ContractError> {
    first_empty(profile.device_resources.iter().map(|resource| resource.name.as_str())).map_or(Ok(()), |index| {
        Err(ContractError::BlankName {
            entity: "device resource",
            index,
        })
    })
}

fn named_device_commands(profile: &DeviceProfile) -> Result<(), ContractError> {
    first_empty(profile.device_commands.iter().map(|command| command.name.as_str())).map_or(Ok(()), |index| {
        Err(ContractError::BlankName {
            entity: "device command",
            index,
        })
    })
}

fn named_core_commands(profile: &DeviceProfile) -> Result<(), ContractError> {
    first_empty(profile.core_commands.iter().map(|command| command.name.as_str())).map_or(Ok(()), |index| {
        Err(ContractError::BlankName {
            entity: "core command",
            index,
        })
    })
}

fn first_empty<'a>(mut names: impl Iterator<Item = &'a str>) -> Option<usize> {
    names.position(str::is_empty)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("contract invalid: id and name both blank")]
    BlankIdentity,
    #[error("contract invalid: duplicate command names, '{name}' is used more than once")]
    DuplicateCommandName { name: String },
    #[error("contract invalid: {entity} at index {index} has a blank name")]
    BlankName { entity: &'static str, index: usize },
}
