//! Cluster configuration parsing and types
//!
//! Handles parsing of the YAML cluster config driving Vagrantfile generation.

pub mod loader;

use crate::GeneratorError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Virtualization backend the generated Vagrantfile targets.
///
/// A closed set: anything outside it is rejected before any file is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "virtualbox")]
    Virtualbox,
    #[serde(rename = "vmware_workstation")]
    VmwareWorkstation,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Virtualbox => write!(f, "virtualbox"),
            Provider::VmwareWorkstation => write!(f, "vmware_workstation"),
        }
    }
}

impl FromStr for Provider {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "virtualbox" => Ok(Provider::Virtualbox),
            "vmware_workstation" => Ok(Provider::VmwareWorkstation),
            _ => Err(GeneratorError::InvalidProvider),
        }
    }
}

/// Main cluster configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterConfig {
    /// Active provider name
    pub provider: Provider,

    /// Per-provider settings, keyed by provider name
    pub providers: HashMap<String, ProviderConfig>,

    /// VM definitions in document order
    #[serde(deserialize_with = "ordered_vms")]
    pub vms: Vec<(String, VmConfig)>,
}

impl ClusterConfig {
    /// Parse a cluster config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, GeneratorError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Settings for the active provider
    pub fn active_provider_config(&self) -> Result<&ProviderConfig, GeneratorError> {
        self.providers.get(&self.provider.to_string()).ok_or_else(|| {
            GeneratorError::config(format!(
                "no settings for provider '{}' in providers map",
                self.provider
            ))
        })
    }
}

/// Per-provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base box image identifier
    #[serde(rename = "box")]
    pub box_name: String,

    /// Vagrant network mode, e.g. "private_network"
    pub network_type: String,

    /// Adapter option keys for the two cluster networks
    pub network_options: NetworkOptions,
}

/// Adapter option keys, one per preconfigured network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkOptions {
    pub network1: String,
    pub network2: String,
}

impl NetworkOptions {
    /// Adapter key for a network index (1 or 2)
    pub fn for_index(&self, index: u8) -> &str {
        if index == 1 { &self.network1 } else { &self.network2 }
    }
}

/// Per-VM settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VmConfig {
    pub hostname: String,

    /// Roles, used only for the comment above the VM block
    #[serde(default)]
    pub roles: Vec<String>,

    /// IP on network 1; takes precedence when both are set
    pub ip_network1: Option<String>,

    /// IP on network 2
    pub ip_network2: Option<String>,

    pub memory: MemorySize,

    pub cpus: u64,
}

impl VmConfig {
    /// The network index (1 or 2) this VM attaches to and its IP.
    ///
    /// Exclusivity is not validated: a VM with neither field renders an
    /// empty IP on network 2, mirroring the input rather than rejecting it.
    pub fn network_assignment(&self) -> (u8, &str) {
        match &self.ip_network1 {
            Some(ip) => (1, ip.as_str()),
            None => (2, self.ip_network2.as_deref().unwrap_or("")),
        }
    }
}

/// Memory size (config may spell it as a string or a bare number)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemorySize {
    Text(String),
    Number(u64),
}

impl std::fmt::Display for MemorySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemorySize::Text(s) => write!(f, "{}", s),
            MemorySize::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Deserialize the vms mapping preserving document order
fn ordered_vms<'de, D>(deserializer: D) -> Result<Vec<(String, VmConfig)>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let mapping = serde_yaml::Mapping::deserialize(deserializer)?;
    mapping
        .into_iter()
        .map(|(key, value)| {
            let name: String = serde_yaml::from_value(key).map_err(D::Error::custom)?;
            let vm: VmConfig = serde_yaml::from_value(value).map_err(D::Error::custom)?;
            Ok((name, vm))
        })
        .collect()
}
