use device_contracts::app_config::AppConfig;
use device_contracts::profile_loader::load_profiles_from;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt().with_max_level(config.logging().level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let profiles = load_profiles_from(config.profiles().directory(), config.profiles().extensions()).await?;

    for profile in &profiles {
        debug!(profile = profile.name, "{}", profile);
        info!(
            "📄 '{}' by '{}': {} resources, {} device commands, {} core commands",
            profile.name,
            profile.manufacturer,
            profile.device_resources.len(),
            profile.device_commands.len(),
            profile.core_commands.len()
        );
    }

    info!("🔥 {} accepted {} device profiles", env!("CARGO_PKG_NAME"), profiles.len());
    Ok(())
}
