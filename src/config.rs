//! Clone manifest loading, validation and placement resolution.
//!
//! A manifest bundles the clone request, the chosen placement (host and
//! optional datastore) and the inventory those names are resolved against.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;

use camino::Utf8Path;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::CloneError;
use crate::inventory::{LogicalNetwork, NetworkTopology, ResolvedDatastore, ResolvedHost};
use crate::request::{NO_CPU_LIMIT, ProvisionRequest};

/// Top-level manifest.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub request: ProvisionRequest,
    pub placement: PlacementConfig,
    #[serde(default)]
    pub inventory: Inventory,
}

/// Names of the placement targets chosen for the clone.
#[derive(Debug, Deserialize)]
pub struct PlacementConfig {
    /// Name of the target host.
    pub host: String,
    /// Location string of the target datastore.
    #[serde(default)]
    pub datastore: Option<String>,
}

/// Infrastructure known to the manifest.
#[derive(Debug, Default, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub hosts: Vec<ResolvedHost>,
    #[serde(default)]
    pub datastores: Vec<ResolvedDatastore>,
    #[serde(default)]
    pub networks: Vec<LogicalNetwork>,
}

/// Placement targets resolved from the inventory.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub host: &'a ResolvedHost,
    pub datastore: Option<&'a ResolvedDatastore>,
}

impl Manifest {
    /// Looks up the placement host and datastore in the inventory.
    pub fn resolve(&self) -> Result<Placement<'_>, CloneError> {
        let host = self
            .inventory
            .hosts
            .iter()
            .find(|host| host.name == self.placement.host)
            .ok_or_else(|| {
                CloneError::Resolution(format!(
                    "host '{}' not found in inventory",
                    self.placement.host
                ))
            })?;

        let datastore = match &self.placement.datastore {
            Some(name) => Some(
                self.inventory
                    .datastores
                    .iter()
                    .find(|ds| &ds.name == name)
                    .ok_or_else(|| {
                        CloneError::Resolution(format!(
                            "datastore '{}' not found in inventory",
                            name
                        ))
                    })?,
            ),
            None => None,
        };

        debug!("resolved placement: host {}, datastore {:?}", host.name, datastore);
        Ok(Placement { host, datastore })
    }

    /// Builds the network topology from the inventory.
    pub fn topology(&self) -> NetworkTopology {
        let topology = NetworkTopology::new(self.inventory.networks.iter().cloned());
        if topology.is_empty() {
            debug!("inventory declares no networks");
        } else {
            debug!("network topology with {} network(s)", topology.len());
        }
        topology
    }

    /// Validates the manifest.
    ///
    /// These checks belong upstream of compilation: the compilers accept any
    /// value and never fail.
    pub fn validate(&self) -> Result<(), CloneError> {
        self.validate_request()?;
        self.validate_networks()?;
        self.resolve()?;
        Ok(())
    }

    fn validate_request(&self) -> Result<(), CloneError> {
        let request = &self.request;

        if request.target_name.trim().is_empty() {
            return Err(CloneError::Validation("target_name must not be empty".to_string()));
        }

        if request.number_of_sockets == Some(0) {
            return Err(CloneError::Validation(
                "number_of_sockets must be at least 1".to_string(),
            ));
        }

        if let Some(limit) = request.cpu_limit
            && limit != NO_CPU_LIMIT
            && !(1..=100).contains(&limit)
        {
            return Err(CloneError::Validation(format!(
                "cpu_limit must be {} (no limit) or between 1 and 100, got {}",
                NO_CPU_LIMIT, limit
            )));
        }

        if let Some(reserve) = request.cpu_reserve
            && !(0..=100).contains(&reserve)
        {
            return Err(CloneError::Validation(format!(
                "cpu_reserve must be between 0 and 100, got {}",
                reserve
            )));
        }

        if let Some(source) = &request.source
            && source.ems_ref.trim().is_empty()
        {
            return Err(CloneError::Validation(format!(
                "source template '{}' must have a non-empty ems_ref",
                source.name
            )));
        }

        Ok(())
    }

    fn validate_networks(&self) -> Result<(), CloneError> {
        let mut uids = HashSet::new();
        for network in &self.inventory.networks {
            if !uids.insert(network.uid.as_str()) {
                return Err(CloneError::Validation(format!(
                    "duplicate network uid '{}'",
                    network.uid
                )));
            }
        }

        for network in &self.inventory.networks {
            if let Some(parent) = &network.parent
                && !uids.contains(parent.as_str())
            {
                return Err(CloneError::Validation(format!(
                    "network '{}' refers to unknown parent '{}'",
                    network.name, parent
                )));
            }
        }

        Ok(())
    }
}

/// Loads a manifest from a YAML file.
pub fn load_manifest(path: &Utf8Path) -> Result<Manifest, CloneError> {
    let file = File::open(path).map_err(|e| CloneError::io(path.as_str(), e))?;
    let reader = BufReader::new(file);
    let manifest: Manifest = serde_yaml::from_reader(reader)
        .map_err(|e| CloneError::Config(format!("YAML parse error in {}: {}", path, e)))?;
    info!("loaded manifest for {}", manifest.request.target_name);
    Ok(manifest)
}
