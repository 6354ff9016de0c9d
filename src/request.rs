//! Declared options of a single clone request.

use serde::{Deserialize, Serialize};

/// Sentinel for `cpu_limit` meaning "no limit".
pub const NO_CPU_LIMIT: i32 = -1;

/// Sentinel for `cpu_reserve` meaning "no reservation".
pub const NO_CPU_RESERVE: i32 = 0;

/// User-declared options for one clone operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionRequest {
    /// Name of the virtual machine to create.
    pub target_name: String,
    /// Template the clone is created from.
    #[serde(default)]
    pub source: Option<TemplateRef>,
    /// Number of virtual CPU sockets.
    #[serde(default)]
    pub number_of_sockets: Option<u32>,
    /// Maximum CPU percentage (`-1` means no limit).
    #[serde(default)]
    pub cpu_limit: Option<i32>,
    /// Reserved CPU percentage (`0` means no reservation).
    #[serde(default)]
    pub cpu_reserve: Option<i32>,
    /// Selected network, if any.
    #[serde(default)]
    pub vlan: Option<VlanSelector>,
}

impl ProvisionRequest {
    /// Creates a request with only the target name set.
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            source: None,
            number_of_sockets: None,
            cpu_limit: None,
            cpu_reserve: None,
            vlan: None,
        }
    }
}

/// Network selection as `(id, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanSelector {
    pub id: String,
    pub name: String,
}

/// Reference to the VM template being cloned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRef {
    pub name: String,
    pub ems_ref: String,
}
