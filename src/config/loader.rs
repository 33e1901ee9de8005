//! Cluster config loader
//!
//! Loads the YAML config and persists provider switches back to it.

use super::{ClusterConfig, Provider};
use crate::GeneratorError;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Load the cluster config from a YAML file
pub async fn load_config(path: impl AsRef<Path>) -> Result<ClusterConfig, GeneratorError> {
    let path = path.as_ref();
    debug!("Loading cluster config from {}", path.display());

    let content = fs::read_to_string(path).await?;
    ClusterConfig::from_yaml(&content)
}

/// Set the `provider` field in the stored config and rewrite the whole file.
///
/// The mutation happens on the raw YAML value tree so every other field,
/// including ones this tool does not model, survives the round trip.
pub async fn set_provider(
    path: impl AsRef<Path>,
    provider: Provider,
) -> Result<(), GeneratorError> {
    let path = path.as_ref();
    debug!("Setting provider to {} in {}", provider, path.display());

    let content = fs::read_to_string(path).await?;
    let mut document: serde_yaml::Value = serde_yaml::from_str(&content)?;

    let mapping = document.as_mapping_mut().ok_or_else(|| {
        GeneratorError::config(format!("{} is not a YAML mapping", path.display()))
    })?;
    mapping.insert(
        serde_yaml::Value::from("provider"),
        serde_yaml::Value::from(provider.to_string()),
    );

    let rewritten = serde_yaml::to_string(&document)?;
    fs::write(path, rewritten).await?;

    Ok(())
}
