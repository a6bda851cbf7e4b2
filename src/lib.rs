pub mod app_config;
mod codec;
pub mod domain;
mod extensions;
pub mod profile_loader;
