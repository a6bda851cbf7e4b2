mod command;
mod described_object;
pub mod device_profile;
pub mod device_report;
mod device_resource;
pub mod validation;

pub use command::Command;
pub use described_object::{DescribedObject, Timestamps};
pub use device_profile::{DeviceProfile, DeviceProfileBuilder, ProfileError, Validation};
pub use device_report::DeviceReport;
pub use device_resource::{DeviceResource, ProfileResource};
pub use validation::ContractError;
