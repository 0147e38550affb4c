//! Aggregate kinds, policies and the aggregate sum type.

use super::{Address, Family, IpBlock, IpRange, Subnet};
use std::fmt;

/// Shape of the summarized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateKind {
    Subnet,
    Range,
    Block,
}

/// Strict aggregates cover only member addresses; loose ones may cover more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Strict,
    Loose,
}

/// One entry of an aggregate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Subnet(Subnet),
    Range(IpRange),
    Block(IpBlock),
}

impl Aggregate {
    pub fn kind(&self) -> AggregateKind {
        match self {
            Aggregate::Subnet(_) => AggregateKind::Subnet,
            Aggregate::Range(_) => AggregateKind::Range,
            Aggregate::Block(_) => AggregateKind::Block,
        }
    }

    pub fn family(&self) -> Family {
        self.start().family()
    }

    /// Lowest address covered.
    pub fn start(&self) -> Address {
        match self {
            Aggregate::Subnet(s) => s.lo(),
            Aggregate::Range(r) => r.start(),
            Aggregate::Block(b) => b.start(),
        }
    }

    /// Highest address covered.
    pub fn end(&self) -> Address {
        match self {
            Aggregate::Subnet(s) => s.hi(),
            Aggregate::Range(r) => r.end(),
            Aggregate::Block(b) => b.end(),
        }
    }

    pub fn contains(&self, addr: &Address) -> bool {
        match self {
            Aggregate::Subnet(s) => s.contains(addr),
            Aggregate::Range(r) => r.contains(addr),
            Aggregate::Block(b) => b.contains(addr),
        }
    }
}

impl From<Subnet> for Aggregate {
    fn from(subnet: Subnet) -> Self {
        Aggregate::Subnet(subnet)
    }
}

impl From<IpRange> for Aggregate {
    fn from(range: IpRange) -> Self {
        Aggregate::Range(range)
    }
}

impl From<IpBlock> for Aggregate {
    fn from(block: IpBlock) -> Self {
        Aggregate::Block(block)
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Aggregate::Subnet(s) => fmt::Display::fmt(s, f),
            Aggregate::Range(r) => fmt::Display::fmt(r, f),
            Aggregate::Block(b) => fmt::Display::fmt(b, f),
        }
    }
}
