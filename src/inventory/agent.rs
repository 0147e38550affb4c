//! Inventory records as stored in the agents JSON document.

use crate::models::AgentType;
use serde::{Deserialize, Serialize};

/// Top level of the inventory document: `{"agents": [...]}`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub agents: Vec<Agent>,
}

/// One monitoring agent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub agent_id: u64,
    pub agent_name: String,
    pub agent_type: AgentType,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub country_id: String,
    /// Private addresses for enterprise agents, the egress addresses for cloud agents.
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    #[serde(default)]
    pub public_ip_addresses: Vec<String>,
    /// Only populated for enterprise clusters.
    #[serde(default)]
    pub cluster_members: Vec<ClusterMember>,
}

/// A node of an enterprise cluster.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterMember {
    pub member_id: Option<u64>,
    pub name: String,
    pub ip_addresses: Vec<String>,
    pub public_ip_addresses: Vec<String>,
}
