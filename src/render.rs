//! Vagrantfile renderer
//!
//! Turns a `ClusterConfig` into Vagrantfile text: a header with the global
//! and provider settings, one define block per VM, and a fixed Ansible
//! provisioning footer. Each fragment is a pure function of its inputs so
//! the caller controls concatenation and the embedded timestamp.

use crate::GeneratorError;
use crate::config::{ClusterConfig, Provider, ProviderConfig, VmConfig};
use std::fmt::Write;

/// Fixed IPs of the two cluster-wide network declarations
const NETWORK1_IP: &str = "192.168.50.10";
const NETWORK2_IP: &str = "192.168.60.10";

/// Render the complete Vagrantfile: header, one block per VM in document
/// order, footer. `generated_at` is embedded verbatim in the banner.
pub fn render_vagrantfile(
    config: &ClusterConfig,
    generated_at: &str,
) -> Result<String, GeneratorError> {
    let provider_config = config.active_provider_config()?;

    let mut content = render_header(config.provider, provider_config, generated_at);
    for (name, vm) in &config.vms {
        content.push_str(&render_vm(name, vm, config.provider, provider_config));
    }
    content.push_str(&render_footer());

    Ok(content)
}

/// Global section: banner comment, box, the two fixed network declarations,
/// and the fixed "login-node" provider stanza (kept verbatim from the
/// original template, independent of the VM map).
pub fn render_header(
    provider: Provider,
    provider_config: &ProviderConfig,
    generated_at: &str,
) -> String {
    let mut content = String::new();

    writeln!(content, "# -*- mode: ruby -*-").unwrap();
    writeln!(content, "# vi: set ft=ruby :").unwrap();
    writeln!(content, "# Generated by vagrantgen").unwrap();
    writeln!(content, "# Provider: {}", provider).unwrap();
    writeln!(content, "# Generated on: {}", generated_at).unwrap();
    writeln!(content).unwrap();

    writeln!(content, "Vagrant.configure(\"2\") do |config|").unwrap();
    writeln!(content, "  # Global configuration").unwrap();
    writeln!(content, "  config.vm.box = \"{}\"", provider_config.box_name).unwrap();
    writeln!(content, "  config.vm.box_check_update = false").unwrap();
    writeln!(content).unwrap();

    writeln!(content, "  # Network configuration").unwrap();
    writeln!(
        content,
        "  config.vm.network \"{}\", ip: \"{}\", {}: \"network1\"",
        provider_config.network_type, NETWORK1_IP, provider_config.network_options.network1
    )
    .unwrap();
    writeln!(
        content,
        "  config.vm.network \"{}\", ip: \"{}\", {}: \"network2\"",
        provider_config.network_type, NETWORK2_IP, provider_config.network_options.network2
    )
    .unwrap();
    writeln!(content).unwrap();

    writeln!(content, "  # Provider configuration").unwrap();
    writeln!(content, "  config.vm.provider \"{}\" do |provider|", provider).unwrap();
    writeln!(content, "    provider.name = \"login-node\"").unwrap();
    writeln!(content, "    provider.memory = \"1024\"").unwrap();
    writeln!(content, "    provider.cpus = 2").unwrap();
    writeln!(content, "    provider.gui = false").unwrap();
    writeln!(content, "  end").unwrap();
    writeln!(content).unwrap();

    content
}

/// One `config.vm.define` block. The block variable is the VM name with
/// hyphens replaced by underscores; the quoted name keeps the hyphens.
pub fn render_vm(
    name: &str,
    vm: &VmConfig,
    provider: Provider,
    provider_config: &ProviderConfig,
) -> String {
    let ident = name.replace('-', "_");
    let (network_index, ip) = vm.network_assignment();
    let adapter_key = provider_config.network_options.for_index(network_index);

    let mut content = String::new();

    writeln!(content, "# {} - {}", vm.hostname, vm.roles.join(", ")).unwrap();
    writeln!(content, "config.vm.define \"{}\" do |{}|", name, ident).unwrap();
    writeln!(content, "  {}.vm.hostname = \"{}\"", ident, vm.hostname).unwrap();
    writeln!(
        content,
        "  {}.vm.network \"{}\", ip: \"{}\", {}: \"network{}\"",
        ident, provider_config.network_type, ip, adapter_key, network_index
    )
    .unwrap();
    writeln!(content, "  {}.vm.provider \"{}\" do |provider|", ident, provider).unwrap();
    writeln!(content, "    provider.name = \"{}\"", name).unwrap();
    writeln!(content, "    provider.memory = \"{}\"", vm.memory).unwrap();
    writeln!(content, "    provider.cpus = {}", vm.cpus).unwrap();
    writeln!(content, "  end").unwrap();
    writeln!(content, "end").unwrap();
    writeln!(content).unwrap();

    content
}

/// Fixed Ansible provisioning block and the closing `end`s.
pub fn render_footer() -> String {
    let mut content = String::new();

    writeln!(content, "  # Provision all nodes with Ansible").unwrap();
    writeln!(content, "  config.vm.provision \"ansible\" do |ansible|").unwrap();
    writeln!(content, "    ansible.playbook = \"playbooks/site.yml\"").unwrap();
    writeln!(content, "    ansible.inventory_path = \"inventory/hosts\"").unwrap();
    writeln!(content, "    ansible.limit = \"all\"").unwrap();
    writeln!(content, "    ansible.extra_vars = {{").unwrap();
    writeln!(content, "      ansible_user: \"vagrant\",").unwrap();
    writeln!(
        content,
        "      ansible_ssh_private_key_file: \"~/.vagrant.d/insecure_private_key\""
    )
    .unwrap();
    writeln!(content, "    }}").unwrap();
    writeln!(content, "  end").unwrap();
    writeln!(content, "end").unwrap();

    content
}
