use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use alttext_config::Config;
use anyhow::Context;

/// Load a JSON profile, or the environment-derived defaults when no path is given.
///
/// Fields missing from the profile keep their defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No profile given, using defaults");
        return Ok(Config::new());
    };

    tracing::info!("Loading profile {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(config)
}
