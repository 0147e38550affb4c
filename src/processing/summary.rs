//! Per-family and per-owner summaries built from the aggregators.

use super::{aggregate_blocks, aggregate_ranges, aggregate_subnets};
use crate::models::{Address, AddressSet, Aggregate, AggregateKind, Family, Owner, Policy};

/// Union of every owner's addresses, IPv4 first.
pub fn combined_addresses(owners: &[Owner]) -> AddressSet {
    owners
        .iter()
        .flat_map(|owner| owner.addresses.iter().copied())
        .collect()
}

/// Aggregate one family-pure, sorted slice.
pub fn aggregate(addresses: &[Address], kind: AggregateKind, policy: Policy) -> Vec<Aggregate> {
    match kind {
        AggregateKind::Subnet => into_aggregates(aggregate_subnets(addresses, policy)),
        AggregateKind::Range => into_aggregates(aggregate_ranges(addresses, policy)),
        AggregateKind::Block => into_aggregates(aggregate_blocks(addresses, policy)),
    }
}

fn into_aggregates<T: Into<Aggregate>>(items: Vec<T>) -> Vec<Aggregate> {
    items.into_iter().map(Into::into).collect()
}

/// Aggregate each family of `set` on its own and concatenate, IPv4 first.
pub fn summarize(set: &AddressSet, kind: AggregateKind, policy: Policy) -> Vec<Aggregate> {
    let mut aggregates = aggregate(set.v4(), kind, policy);
    aggregates.extend(aggregate(set.v6(), kind, policy));
    aggregates
}

/// Addresses of one family with every (kind, policy) aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySummary {
    pub addresses: Vec<Address>,
    pub subnets_strict: Vec<Aggregate>,
    pub subnets_loose: Vec<Aggregate>,
    pub ranges_strict: Vec<Aggregate>,
    pub ranges_loose: Vec<Aggregate>,
    pub blocks_strict: Vec<Aggregate>,
    pub blocks_loose: Vec<Aggregate>,
}

impl FamilySummary {
    pub fn new(addresses: &[Address]) -> FamilySummary {
        FamilySummary {
            addresses: addresses.to_vec(),
            subnets_strict: aggregate(addresses, AggregateKind::Subnet, Policy::Strict),
            subnets_loose: aggregate(addresses, AggregateKind::Subnet, Policy::Loose),
            ranges_strict: aggregate(addresses, AggregateKind::Range, Policy::Strict),
            ranges_loose: aggregate(addresses, AggregateKind::Range, Policy::Loose),
            blocks_strict: aggregate(addresses, AggregateKind::Block, Policy::Strict),
            blocks_loose: aggregate(addresses, AggregateKind::Block, Policy::Loose),
        }
    }

    pub fn aggregates(&self, kind: AggregateKind, policy: Policy) -> &[Aggregate] {
        match (kind, policy) {
            (AggregateKind::Subnet, Policy::Strict) => &self.subnets_strict,
            (AggregateKind::Subnet, Policy::Loose) => &self.subnets_loose,
            (AggregateKind::Range, Policy::Strict) => &self.ranges_strict,
            (AggregateKind::Range, Policy::Loose) => &self.ranges_loose,
            (AggregateKind::Block, Policy::Strict) => &self.blocks_strict,
            (AggregateKind::Block, Policy::Loose) => &self.blocks_loose,
        }
    }
}

/// Detail view of one owner, each family aggregated independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSummary<'a> {
    pub owner: &'a Owner,
    pub v4: FamilySummary,
    pub v6: FamilySummary,
}

impl<'a> OwnerSummary<'a> {
    pub fn new(owner: &'a Owner) -> OwnerSummary<'a> {
        OwnerSummary {
            owner,
            v4: FamilySummary::new(owner.addresses.v4()),
            v6: FamilySummary::new(owner.addresses.v6()),
        }
    }

    pub fn family(&self, family: Family) -> &FamilySummary {
        match family {
            Family::V4 => &self.v4,
            Family::V6 => &self.v6,
        }
    }
}

/// One [`OwnerSummary`] per owner, in owner order.
pub fn summarize_owners(owners: &[Owner]) -> Vec<OwnerSummary<'_>> {
    let summaries: Vec<OwnerSummary<'_>> = owners.iter().map(OwnerSummary::new).collect();
    log::info!("Summarized {} owners", summaries.len());
    summaries
}
