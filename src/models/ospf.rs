//! OSPF router description: router ID, areas, networks and interfaces.

use serde::{Deserialize, Serialize};

/// An OSPF-enabled interface as described in the input file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OspfInterface {
    /// Descriptive name of the interface section.
    pub name: String,
    /// Fortigate interface name.
    pub interface: String,
    pub cost: u32,
    /// Lower-cased authentication mode, `none` when unset.
    pub authentication: String,
    pub passive: bool,
    pub priority: u8,
}

impl OspfInterface {
    pub fn new(name: &str) -> OspfInterface {
        OspfInterface {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

impl Default for OspfInterface {
    fn default() -> Self {
        OspfInterface {
            name: String::new(),
            interface: String::new(),
            cost: 1,
            authentication: "none".to_string(),
            passive: false,
            priority: 1,
        }
    }
}

/// Everything read from one description file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OspfConfig {
    pub router_id: String,
    pub areas: Vec<String>,
    /// Network lines exactly as they appeared in the file.
    pub networks: Vec<String>,
    pub interfaces: Vec<OspfInterface>,
}

impl OspfConfig {
    /// Area used for `config network` entries.
    pub fn network_area(&self) -> &str {
        self.areas
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_AREA)
    }
}

/// Backbone area, used when the description lists none.
pub const DEFAULT_AREA: &str = "0.0.0.0";
