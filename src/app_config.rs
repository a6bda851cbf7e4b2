use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    profiles: Profiles,
    #[serde(default)]
    logging: Logging,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(config::Environment::with_prefix("DEVICE_CONTRACTS").separator("__")),
        )
    }

    fn load_from(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn profiles(&self) -> &Profiles {
        &self.profiles
    }

    pub fn logging(&self) -> &Logging {
        &self.logging
    }
}

#[derive(Debug, Deserialize)]
pub struct Profiles {
    directory: String,
    #[serde(default = "default_extensions")]
    extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["json".to_string(), "yaml".to_string(), "yml".to_string()]
}

impl Profiles {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

#[derive(Debug, Deserialize)]
pub struct Logging {
    level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Logging { level: "info".to_string() }
    }
}

impl Logging {
    /// Falls back to INFO when the configured level is not recognized.
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    fn load(toml: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::load_from(Config::builder().add_source(config::File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn loads_all_sections() {
        let config = load(
            r#"
            [profiles]
            directory = "/etc/profiles"
            extensions = ["json"]

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.profiles().directory(), "/etc/profiles");
        assert_eq!(config.profiles().extensions(), &["json".to_string()]);
        assert_eq!(config.logging().level(), Level::DEBUG);
    }

    #[test]
    fn applies_defaults() {
        let config = load("[profiles]\ndirectory = \"profiles\"").unwrap();

        assert_eq!(config.profiles().extensions(), default_extensions().as_slice());
        assert_eq!(config.logging().level(), Level::INFO);
    }

    #[test]
    fn falls_back_to_info_for_unknown_levels() {
        let config = load("[profiles]\ndirectory = \"profiles\"\n[logging]\nlevel = \"loud\"").unwrap();
        assert_eq!(config.logging().level(), Level::INFO);
    }

    #[test]
    fn requires_a_profile_directory() {
        assert!(load("[logging]\nlevel = \"info\"").is_err());
    }
}
