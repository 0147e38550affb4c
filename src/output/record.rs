//! Flat per-owner record shared by the CSV, JSON and XML writers.

use crate::models::{Aggregate, AggregateKind, Policy};
use crate::processing::{FamilySummary, OwnerSummary};
use serde::Serialize;

/// One owner with all address and aggregate lists rendered to text.
///
/// Field order is the document order of the JSON and XML outputs.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub agent_id: u64,
    pub agent_name: String,
    pub agent_type: String,
    pub location: String,
    pub country_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv4_address: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv6_address: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv4_subnet_strict: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv6_subnet_strict: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv4_subnet_loose: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv6_subnet_loose: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv4_range_strict: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv6_range_strict: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv4_range_loose: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv6_range_loose: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv4_block_strict: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv6_block_strict: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv4_block_loose: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipv6_block_loose: Vec<String>,
}

fn texts(aggregates: &[Aggregate]) -> Vec<String> {
    aggregates.iter().map(ToString::to_string).collect()
}

fn rendered(family: &FamilySummary, kind: AggregateKind, policy: Policy) -> Vec<String> {
    texts(family.aggregates(kind, policy))
}

impl From<&OwnerSummary<'_>> for AgentRecord {
    fn from(summary: &OwnerSummary<'_>) -> Self {
        let owner = summary.owner;
        let (v4, v6) = (&summary.v4, &summary.v6);
        AgentRecord {
            agent_id: owner.agent_id,
            agent_name: owner.name.clone(),
            agent_type: owner.agent_type.to_string(),
            location: owner.location.clone(),
            country_id: owner.country_id.clone(),
            ipv4_address: v4.addresses.iter().map(ToString::to_string).collect(),
            ipv6_address: v6.addresses.iter().map(ToString::to_string).collect(),
            ipv4_subnet_strict: rendered(v4, AggregateKind::Subnet, Policy::Strict),
            ipv6_subnet_strict: rendered(v6, AggregateKind::Subnet, Policy::Strict),
            ipv4_subnet_loose: rendered(v4, AggregateKind::Subnet, Policy::Loose),
            ipv6_subnet_loose: rendered(v6, AggregateKind::Subnet, Policy::Loose),
            ipv4_range_strict: rendered(v4, AggregateKind::Range, Policy::Strict),
            ipv6_range_strict: rendered(v6, AggregateKind::Range, Policy::Strict),
            ipv4_range_loose: rendered(v4, AggregateKind::Range, Policy::Loose),
            ipv6_range_loose: rendered(v6, AggregateKind::Range, Policy::Loose),
            ipv4_block_strict: rendered(v4, AggregateKind::Block, Policy::Strict),
            ipv6_block_strict: rendered(v6, AggregateKind::Block, Policy::Strict),
            ipv4_block_loose: rendered(v4, AggregateKind::Block, Policy::Loose),
            ipv6_block_loose: rendered(v6, AggregateKind::Block, Policy::Loose),
        }
    }
}

impl AgentRecord {
    /// Address and aggregate lists with their element names, in document order.
    pub fn lists(&self) -> [(&'static str, &[String]); 14] {
        [
            ("ipv4Address", self.ipv4_address.as_slice()),
            ("ipv6Address", self.ipv6_address.as_slice()),
            ("ipv4SubnetStrict", self.ipv4_subnet_strict.as_slice()),
            ("ipv6SubnetStrict", self.ipv6_subnet_strict.as_slice()),
            ("ipv4SubnetLoose", self.ipv4_subnet_loose.as_slice()),
            ("ipv6SubnetLoose", self.ipv6_subnet_loose.as_slice()),
            ("ipv4RangeStrict", self.ipv4_range_strict.as_slice()),
            ("ipv6RangeStrict", self.ipv6_range_strict.as_slice()),
            ("ipv4RangeLoose", self.ipv4_range_loose.as_slice()),
            ("ipv6RangeLoose", self.ipv6_range_loose.as_slice()),
            ("ipv4BlockStrict", self.ipv4_block_strict.as_slice()),
            ("ipv6BlockStrict", self.ipv6_block_strict.as_slice()),
            ("ipv4BlockLoose", self.ipv4_block_loose.as_slice()),
            ("ipv6BlockLoose", self.ipv6_block_loose.as_slice()),
        ]
    }

    /// CSV cells in column order: all IPv4 lists, then all IPv6 lists.
    pub fn csv_columns(&self) -> [&[String]; 14] {
        [
            self.ipv4_address.as_slice(),
            self.ipv4_subnet_strict.as_slice(),
            self.ipv4_subnet_loose.as_slice(),
            self.ipv4_range_strict.as_slice(),
            self.ipv4_range_loose.as_slice(),
            self.ipv4_block_strict.as_slice(),
            self.ipv4_block_loose.as_slice(),
            self.ipv6_address.as_slice(),
            self.ipv6_subnet_strict.as_slice(),
            self.ipv6_subnet_loose.as_slice(),
            self.ipv6_range_strict.as_slice(),
            self.ipv6_range_loose.as_slice(),
            self.ipv6_block_strict.as_slice(),
            self.ipv6_block_loose.as_slice(),
        ]
    }
}

/// One record per owner summary.
pub fn agent_records(summaries: &[OwnerSummary<'_>]) -> Vec<AgentRecord> {
    summaries.iter().map(AgentRecord::from).collect()
}
