use anyhow::Result;
use camino::Utf8PathBuf;
use scvmm_clone::CloneError;
use scvmm_clone::config::{Manifest, load_manifest};
use scvmm_clone::inventory::{LogicalNetwork, ResolvedHost, SwitchRef};
use tempfile::TempDir;

#[allow(dead_code)]
pub const LOGICAL_NETWORK_UID: &str = "53f38ddc-450e-4f43-abde-881ac44608e3";
#[allow(dead_code)]
pub const VM_NETWORK_UID: &str = "243f2689-f6ef-401e-b875-41ba4c351c60";

/// Writes `yaml` into a temporary manifest file.
///
/// The returned `TempDir` must be kept alive while the path is in use.
#[allow(dead_code)]
pub fn write_manifest(yaml: &str) -> Result<(TempDir, Utf8PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = Utf8PathBuf::from_path_buf(dir.path().join("manifest.yaml"))
        .map_err(|p| anyhow::anyhow!("non-UTF-8 temp path: {}", p.display()))?;
    std::fs::write(&path, yaml)?;
    Ok((dir, path))
}

/// Loads a manifest from inline YAML through a temporary file.
#[allow(dead_code)]
pub fn load_manifest_from_yaml(yaml: &str) -> Result<Manifest, CloneError> {
    let (_dir, path) = write_manifest(yaml).expect("failed to write temporary manifest");
    load_manifest(&path)
}

/// Test helper to create a host with the given `(uid, name)` switches.
#[allow(dead_code)]
pub fn create_host(switches: &[(&str, &str)]) -> ResolvedHost {
    ResolvedHost {
        name: "hv01.example.com".to_string(),
        ems_ref: "test_ref".to_string(),
        switches: switches
            .iter()
            .map(|(uid, name)| SwitchRef {
                uid: uid.to_string(),
                name: name.to_string(),
            })
            .collect(),
    }
}

/// Logical network `virtualnetwork1` on switch `sw1` with a child VM network.
#[allow(dead_code)]
pub fn create_networks() -> Vec<LogicalNetwork> {
    vec![
        LogicalNetwork {
            uid: LOGICAL_NETWORK_UID.to_string(),
            name: "virtualnetwork1".to_string(),
            parent: None,
            switches: vec!["sw1".to_string()],
        },
        LogicalNetwork {
            uid: VM_NETWORK_UID.to_string(),
            name: "virtualnetwork1-vm-network".to_string(),
            parent: Some(LOGICAL_NETWORK_UID.to_string()),
            switches: vec![],
        },
    ]
}

/// A complete manifest exercising every compiled field.
#[allow(dead_code)]
pub const FULL_MANIFEST: &str = r#"---
request:
  target_name: clone test
  source:
    name: template1
    ems_ref: template-ref
  number_of_sockets: 2
  cpu_limit: 40
  cpu_reserve: 15
  vlan:
    id: 53f38ddc-450e-4f43-abde-881ac44608e3
    name: virtualnetwork1
placement:
  host: hv01.example.com
  datastore: file://server.local/C:/ClusterStorage/CLUSP04%20Prod%20Volume%203-1
inventory:
  hosts:
  - name: hv01.example.com
    ems_ref: test_ref
    switches:
    - uid: sw1
      name: switch1
  datastores:
  - name: file://server.local/C:/ClusterStorage/CLUSP04%20Prod%20Volume%203-1
  networks:
  - uid: 53f38ddc-450e-4f43-abde-881ac44608e3
    name: virtualnetwork1
    switches:
    - sw1
  - uid: 243f2689-f6ef-401e-b875-41ba4c351c60
    name: virtualnetwork1-vm-network
    parent: 53f38ddc-450e-4f43-abde-881ac44608e3
"#;
