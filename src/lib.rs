//! vagrantgen library
//!
//! Renders a declarative YAML cluster configuration (provider, network
//! layout, per-VM sizing and roles) into a Vagrantfile.
//!
//! # Design Principles
//!
//! - **Safety First**: No unsafe code (`#![forbid(unsafe_code)]`)
//! - **Pure rendering**: the Vagrantfile is a pure function of the loaded
//!   configuration and a timestamp; all IO happens at the edges
//! - **Faithful output**: the emitted block syntax matches what downstream
//!   Vagrant tooling expects, byte for byte

pub mod config;
pub mod render;

mod error;

pub use config::{ClusterConfig, Provider};
pub use error::GeneratorError;

use chrono::Local;
use std::path::Path;
use tracing::info;

/// Load the cluster config, render the Vagrantfile, and overwrite the
/// output file. Returns the active provider for the caller's confirmation
/// message.
pub async fn generate(
    config_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<Provider, GeneratorError> {
    let config = config::loader::load_config(config_path).await?;

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S %z").to_string();
    let content = render::render_vagrantfile(&config, &generated_at)?;

    let output_path = output_path.as_ref();
    tokio::fs::write(output_path, content).await?;
    info!(
        "Wrote {} for provider {}",
        output_path.display(),
        config.provider
    );

    Ok(config.provider)
}
