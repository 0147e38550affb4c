//! Containment queries against aggregates.
//!
//! Used by the presentation layer to annotate an aggregate with the owners
//! whose addresses it covers. Nothing here mutates its inputs.

use crate::models::{Address, Aggregate, IpBlock, IpRange, Owner, Subnet};

/// Anything that can answer "is this address inside me".
pub trait Membership {
    fn contains_address(&self, addr: &Address) -> bool;
}

impl Membership for Address {
    fn contains_address(&self, addr: &Address) -> bool {
        self == addr
    }
}

impl Membership for Subnet {
    fn contains_address(&self, addr: &Address) -> bool {
        self.contains(addr)
    }
}

impl Membership for IpRange {
    fn contains_address(&self, addr: &Address) -> bool {
        self.contains(addr)
    }
}

impl Membership for IpBlock {
    fn contains_address(&self, addr: &Address) -> bool {
        self.contains(addr)
    }
}

impl Membership for Aggregate {
    fn contains_address(&self, addr: &Address) -> bool {
        self.contains(addr)
    }
}

/// Prefix match for subnets, inclusive interval test for ranges and blocks.
/// Addresses of the other family are never contained.
pub fn contains_address(aggregate: &impl Membership, addr: &Address) -> bool {
    aggregate.contains_address(addr)
}

/// Addresses covered by `aggregate`, in input order.
pub fn find_contributors<'a, M: Membership>(
    addresses: impl IntoIterator<Item = &'a Address>,
    aggregate: &M,
) -> Vec<Address> {
    addresses
        .into_iter()
        .filter(|a| aggregate.contains_address(a))
        .copied()
        .collect()
}

/// Owners with at least one address covered by `aggregate`, in input order.
pub fn owners_covered_by<'a, M: Membership>(owners: &'a [Owner], aggregate: &M) -> Vec<&'a Owner> {
    owners
        .iter()
        .filter(|owner| owner.addresses.iter().any(|a| aggregate.contains_address(a)))
        .collect()
}
