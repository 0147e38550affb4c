//! Address owner (monitoring agent) data model.

use super::AddressSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an inventory agent.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentType {
    #[serde(rename = "Enterprise")]
    Enterprise,
    #[serde(rename = "Enterprise Cluster")]
    EnterpriseCluster,
    #[serde(rename = "Cloud")]
    Cloud,
}

impl AgentType {
    /// Enterprise agents and enterprise clusters.
    pub fn is_enterprise(self) -> bool {
        matches!(self, AgentType::Enterprise | AgentType::EnterpriseCluster)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentType::Enterprise => "Enterprise",
            AgentType::EnterpriseCluster => "Enterprise Cluster",
            AgentType::Cloud => "Cloud",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical owner of addresses after selection and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// Inventory identifier.
    pub agent_id: u64,
    /// Display name, used for list annotations.
    pub name: String,
    pub agent_type: AgentType,
    pub location: String,
    pub country_id: String,
    /// Selected addresses, canonical order.
    pub addresses: AddressSet,
}
