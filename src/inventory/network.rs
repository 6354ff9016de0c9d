//! Logical network topology and switch reachability.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A logical network or VM network.
///
/// A VM network is a child of a logical network; switch associations
/// declared on an ancestor are inherited by its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalNetwork {
    pub uid: String,
    pub name: String,
    /// Uid of the parent network.
    #[serde(default)]
    pub parent: Option<String>,
    /// Uids of switches this network is directly reachable through.
    #[serde(default)]
    pub switches: Vec<String>,
}

/// Lookup of network records by uid.
pub trait NetworkLookup {
    fn find_network(&self, uid: &str) -> Option<&LogicalNetwork>;

    /// Returns the networks whose parent is `parent_uid`, in a stable order.
    fn child_networks(&self, parent_uid: &str) -> Vec<&LogicalNetwork>;
}

/// In-memory network topology in inventory order, indexed by uid.
#[derive(Debug, Clone, Default)]
pub struct NetworkTopology {
    networks: Vec<LogicalNetwork>,
    index: HashMap<String, usize>,
}

impl NetworkTopology {
    /// Builds a topology from network records.
    ///
    /// When two records share a uid, the later one replaces the earlier
    /// one in place.
    pub fn new(networks: impl IntoIterator<Item = LogicalNetwork>) -> Self {
        let mut topology = Self::default();
        for network in networks {
            let existing = topology.index.get(&network.uid).copied();
            match existing {
                Some(pos) => topology.networks[pos] = network,
                None => {
                    topology
                        .index
                        .insert(network.uid.clone(), topology.networks.len());
                    topology.networks.push(network);
                }
            }
        }
        topology
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl NetworkLookup for NetworkTopology {
    fn find_network(&self, uid: &str) -> Option<&LogicalNetwork> {
        self.index.get(uid).map(|&pos| &self.networks[pos])
    }

    fn child_networks(&self, parent_uid: &str) -> Vec<&LogicalNetwork> {
        self.networks
            .iter()
            .filter(|network| network.parent.as_deref() == Some(parent_uid))
            .collect()
    }
}

/// Collects the switch uids reachable from `network`.
///
/// Walks the parent chain and unions the switches of every ancestor. A
/// parent that cannot be found ends the walk, and a cycle is visited once.
pub fn reachable_switches<'a>(
    lookup: &'a dyn NetworkLookup,
    network: &'a LogicalNetwork,
) -> BTreeSet<&'a str> {
    let mut switches = BTreeSet::new();
    let mut visited = HashSet::new();
    let mut current = Some(network);

    while let Some(net) = current {
        if !visited.insert(net.uid.as_str()) {
            debug!("parent cycle detected at network {}", net.uid);
            break;
        }
        switches.extend(net.switches.iter().map(String::as_str));
        current = net
            .parent
            .as_deref()
            .and_then(|parent| lookup.find_network(parent));
    }

    switches
}
