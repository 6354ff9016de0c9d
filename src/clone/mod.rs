//! Clone task compilation.
//!
//! This module turns a [`ProvisionRequest`] and its resolved placement into
//! the [`CloneTaskParameters`] handed to the SCVMM executor:
//!
//! - [`mount_point`] resolves the datastore location into a native path
//! - [`cpu`] compiles CPU count, limit and reservation flags
//! - [`network`] compiles the network adapter binding
//!
//! Every step is a pure function of its inputs. A value that cannot be
//! derived is left absent rather than reported as an error.

pub mod cpu;
pub mod mount_point;
pub mod network;

use serde::Serialize;
use tracing::info;

use crate::inventory::{NetworkLookup, ResolvedDatastore, ResolvedHost};
use crate::request::ProvisionRequest;

pub use cpu::compile_cpu_directive;
pub use mount_point::{MountPoint, MountPointKind, capture_mount_point, resolve_mount_point};
pub use network::{NetworkAdapterDirective, compile_network_adapter};

/// Parameters for a single clone operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloneTaskParameters {
    /// Name of the new virtual machine.
    pub name: String,
    /// Host the virtual machine is placed on.
    pub host: ResolvedHost,
    /// Native storage path, absent if the datastore has none.
    pub mount_point: Option<String>,
    /// CPU flags, possibly empty.
    pub cpu_script: String,
    /// Network adapter binding, absent if no binding applies.
    pub network_script: Option<String>,
}

/// Assembles the clone parameters for `request` on the resolved placement.
///
/// `name` and `host` are copied verbatim. The mount point, CPU directive and
/// network binding are compiled independently; none of them is validated
/// against cluster limits here.
#[tracing::instrument(skip_all, fields(name = %request.target_name, host = %host.name))]
pub fn prepare_clone_task(
    request: &ProvisionRequest,
    host: &ResolvedHost,
    datastore: Option<&ResolvedDatastore>,
    networks: &dyn NetworkLookup,
) -> CloneTaskParameters {
    let mount_point = datastore
        .and_then(|ds| resolve_mount_point(&ds.name))
        .map(|mount| mount.native_path());

    let cpu_script = compile_cpu_directive(
        request.number_of_sockets,
        request.cpu_limit,
        request.cpu_reserve,
    )
    .render();

    let network_script = compile_network_adapter(request.vlan.as_ref(), host, networks)
        .map(|directive| directive.render());

    info!(
        "prepared clone task (mount point: {}, network binding: {})",
        mount_point.as_deref().unwrap_or("none"),
        if network_script.is_some() { "yes" } else { "no" }
    );

    CloneTaskParameters {
        name: request.target_name.clone(),
        host: host.clone(),
        mount_point,
        cpu_script,
        network_script,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{LogicalNetwork, NetworkTopology, SwitchRef};
    use crate::request::VlanSelector;

    fn host() -> ResolvedHost {
        ResolvedHost {
            name: "hv01".to_string(),
            ems_ref: "test_ref".to_string(),
            switches: vec![SwitchRef {
                uid: "sw1".to_string(),
                name: "switch1".to_string(),
            }],
        }
    }

    #[test]
    fn test_default_options_copy_name_and_host() {
        let request = ProvisionRequest {
            cpu_limit: Some(-1),
            cpu_reserve: Some(0),
            ..ProvisionRequest::new("clone test")
        };
        let host = host();

        let params = prepare_clone_task(&request, &host, None, &NetworkTopology::default());

        assert_eq!(params.name, "clone test");
        assert_eq!(params.host, host);
        assert_eq!(params.mount_point, None);
        assert_eq!(params.cpu_script, "");
        assert_eq!(params.network_script, None);
    }

    #[test]
    fn test_unparseable_datastore_leaves_mount_point_absent() {
        let request = ProvisionRequest {
            number_of_sockets: Some(2),
            ..ProvisionRequest::new("vm1")
        };
        let datastore = ResolvedDatastore {
            name: "nfs-datastore-1".to_string(),
        };

        let params =
            prepare_clone_task(&request, &host(), Some(&datastore), &NetworkTopology::default());

        assert_eq!(params.mount_point, None);
        assert_eq!(params.cpu_script, "-CPUCount 2 ");
    }

    #[test]
    fn test_all_parts_compiled() {
        let topology = NetworkTopology::new([LogicalNetwork {
            uid: "ln".to_string(),
            name: "virtualnetwork1".to_string(),
            parent: None,
            switches: vec!["sw1".to_string()],
        }]);
        let request = ProvisionRequest {
            number_of_sockets: Some(2),
            cpu_limit: Some(40),
            vlan: Some(VlanSelector {
                id: "ln".to_string(),
                name: "virtualnetwork1".to_string(),
            }),
            ..ProvisionRequest::new("vm1")
        };
        let datastore = ResolvedDatastore {
            name: "file://server.local/C:/ClusterStorage/CLUSP04%20Prod%20Volume%203-1"
                .to_string(),
        };

        let params = prepare_clone_task(&request, &host(), Some(&datastore), &topology);

        assert_eq!(
            params.mount_point.as_deref(),
            Some("C:\\ClusterStorage\\CLUSP04 Prod Volume 3-1")
        );
        assert_eq!(params.cpu_script, "-CPUCount 2 -CPUMaximumPercent 40 ");
        assert!(params.network_script.unwrap().contains("'switch1'"));
    }
}
