//! Resolved infrastructure objects consumed by the clone compilers.
//!
//! These are read-only snapshots produced by the request-resolution layer
//! (see [`crate::config::Manifest::resolve`]).

pub mod network;

use serde::{Deserialize, Serialize};

pub use network::{LogicalNetwork, NetworkLookup, NetworkTopology};

/// A virtual switch attached to a host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwitchRef {
    pub uid: String,
    pub name: String,
}

/// The target hypervisor host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHost {
    pub name: String,
    /// Provider-side identifier of the host.
    pub ems_ref: String,
    /// Virtual switches available on the host.
    #[serde(default)]
    pub switches: Vec<SwitchRef>,
}

impl ResolvedHost {
    /// Returns the first attached switch whose uid satisfies `predicate`.
    pub fn find_switch(&self, mut predicate: impl FnMut(&str) -> bool) -> Option<&SwitchRef> {
        self.switches.iter().find(|switch| predicate(&switch.uid))
    }
}

/// The target datastore.
///
/// `name` is a URI-like location string such as
/// `file://server.local/C:/ClusterStorage/Volume1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDatastore {
    pub name: String,
}
