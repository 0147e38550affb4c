//! Contiguous address range and wildcard block models.

use super::{Address, Family};
use crate::render;
use std::fmt;

/// Inclusive interval of addresses of one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IpRange {
    start: Address,
    end: Address,
}

impl IpRange {
    /// # Panics
    /// If `start` and `end` differ in family or `start > end`.
    pub fn new(start: Address, end: Address) -> IpRange {
        assert_interval(start, end);
        IpRange { start, end }
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn family(&self) -> Family {
        self.start.family()
    }

    pub fn is_singleton(&self) -> bool {
        self.start == self.end
    }

    /// `start <= addr <= end` for an address of the same family.
    pub fn contains(&self, addr: &Address) -> bool {
        addr.family() == self.family() && self.start <= *addr && *addr <= self.end
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_range(self))
    }
}

/// Range rendered with one bracketed varying component, e.g. `10.0.0.[1-3]`.
///
/// Containment follows the inclusive integer interval from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IpBlock {
    start: Address,
    end: Address,
}

impl IpBlock {
    /// # Panics
    /// If `start` and `end` differ in family or `start > end`.
    pub fn new(start: Address, end: Address) -> IpBlock {
        assert_interval(start, end);
        IpBlock { start, end }
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn family(&self) -> Family {
        self.start.family()
    }

    pub fn is_singleton(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, addr: &Address) -> bool {
        addr.family() == self.family() && self.start <= *addr && *addr <= self.end
    }
}

impl From<IpRange> for IpBlock {
    fn from(range: IpRange) -> Self {
        IpBlock {
            start: range.start,
            end: range.end,
        }
    }
}

impl From<IpBlock> for IpRange {
    fn from(block: IpBlock) -> Self {
        IpRange {
            start: block.start,
            end: block.end,
        }
    }
}

impl fmt::Display for IpBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_block(self))
    }
}

fn assert_interval(start: Address, end: Address) {
    assert_eq!(
        start.family(),
        end.family(),
        "range {start} - {end} mixes address families"
    );
    assert!(start <= end, "range start {start} > end {end}");
}
