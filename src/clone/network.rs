//! Virtual network adapter binding.

use tracing::debug;

use crate::directive::{DirectiveBuilder, DirectiveValue, quote};
use crate::inventory::network::reachable_switches;
use crate::inventory::{LogicalNetwork, NetworkLookup, ResolvedHost, SwitchRef};
use crate::request::VlanSelector;

/// Binding of the clone's network adapter to a VM network on a host switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAdapterDirective {
    /// Host switch the adapter is connected to.
    pub switch: SwitchRef,
    /// Uid of the VM network the adapter is attached to.
    pub vm_network_uid: String,
    /// Name of the VM network the adapter is attached to.
    pub vm_network_name: String,
}

impl NetworkAdapterDirective {
    /// Renders the PowerShell fragment that binds the adapter.
    ///
    /// Expects `$VM` to hold the virtual machine being configured.
    pub fn render(&self) -> String {
        let mut lookup = DirectiveBuilder::new();
        lookup.push("ID", DirectiveValue::Quoted(self.vm_network_uid.clone()));

        let mut binding = DirectiveBuilder::new();
        binding.push_variable("VMNetwork", "VMNetwork");
        binding.push("VirtualNetwork", DirectiveValue::Quoted(self.switch.name.clone()));

        format!(
            "$VMNetwork = Get-SCVMNetwork {}; \
            Get-SCVirtualNetworkAdapter -VM $VM | Set-SCVirtualNetworkAdapter {}| Out-Null; ",
            lookup.into_directive().render().trim_end(),
            binding.into_directive().render(),
        )
    }

    /// Short human-readable description, used in logs.
    pub fn describe(&self) -> String {
        format!("{} via switch {}", quote(&self.vm_network_name), quote(&self.switch.name))
    }
}

/// Picks the VM network an adapter is attached to for `network`.
///
/// A network with a parent is already a VM network and is used as is. A
/// top-level logical network is bound through its first child VM network
/// in inventory order, or directly when it has no children.
fn select_vm_network<'a>(
    networks: &'a dyn NetworkLookup,
    network: &'a LogicalNetwork,
) -> &'a LogicalNetwork {
    if network.parent.is_some() {
        return network;
    }

    match networks.child_networks(&network.uid).into_iter().next() {
        Some(child) => {
            debug!("logical network {} bound through VM network {}", network.name, child.name);
            child
        }
        None => {
            debug!("logical network {} has no VM network, binding it directly", network.name);
            network
        }
    }
}

/// Compiles the network selection of a request into an adapter binding.
///
/// Returns `None` when no network is selected, the selected network is
/// unknown, or none of the switches reachable from it is attached to the
/// host. None of these is an error; the clone simply gets no binding.
pub fn compile_network_adapter(
    vlan: Option<&VlanSelector>,
    host: &ResolvedHost,
    networks: &dyn NetworkLookup,
) -> Option<NetworkAdapterDirective> {
    let vlan = vlan?;

    let Some(network) = networks.find_network(&vlan.id) else {
        debug!("network {} ({}) not found, omitting adapter binding", vlan.id, vlan.name);
        return None;
    };

    let reachable = reachable_switches(networks, network);
    let Some(switch) = host.find_switch(|uid| reachable.contains(uid)) else {
        debug!(
            "host {} has no switch reaching network {}, omitting adapter binding",
            host.name, network.name
        );
        return None;
    };

    let vm_network = select_vm_network(networks, network);
    let directive = NetworkAdapterDirective {
        switch: switch.clone(),
        vm_network_uid: vm_network.uid.clone(),
        vm_network_name: vm_network.name.clone(),
    };
    debug!("network adapter binding: {}", directive.describe());
    Some(directive)
}
