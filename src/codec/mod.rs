mod device_profile_deserializer;
mod device_profile_serializer;
mod device_report_deserializer;
mod device_report_serializer;
mod field;

pub(crate) use device_profile_deserializer::IncomingDeviceProfile;
