//! Wildcard block summarization.
//!
//! An IPv4 block varies along exactly one octet, the last or the third. The
//! first address that extends a block fixes which one; later addresses must
//! extend along the same octet. IPv6 blocks are ranges with block rendering.

use super::ranges::aggregate_ranges;
use super::scan::{run_length, scan, single_family};
use crate::models::{Address, Family, IpBlock, Policy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    LastOctet,
    ThirdOctet,
}

impl Axis {
    /// Whether `next` extends along this axis from `reference`.
    ///
    /// Strict blocks compare against the previous member and need the
    /// successor value; loose blocks compare against the block start and
    /// accept any value.
    fn extends(self, policy: Policy, reference: &[u8; 4], next: &[u8; 4]) -> bool {
        let (varying, fixed_equal) = match self {
            Axis::LastOctet => (3, reference[..3] == next[..3]),
            Axis::ThirdOctet => (2, reference[..2] == next[..2] && reference[3] == next[3]),
        };
        fixed_equal
            && match policy {
                Policy::Strict => reference[varying].checked_add(1) == Some(next[varying]),
                Policy::Loose => reference[varying] != next[varying],
            }
    }
}

fn octets(addr: &Address) -> [u8; 4] {
    (addr.to_bits() as u32).to_be_bytes()
}

/// Summarize sorted, de-duplicated, family-pure addresses into blocks.
pub fn aggregate_blocks(addresses: &[Address], policy: Policy) -> Vec<IpBlock> {
    let Some(family) = single_family(addresses) else {
        return Vec::new();
    };
    let blocks = match family {
        Family::V4 => scan(addresses, |rest| v4_block_step(rest, policy)),
        Family::V6 => aggregate_ranges(addresses, policy)
            .into_iter()
            .map(IpBlock::from)
            .collect(),
    };
    log::debug!(
        "aggregate_blocks({family}, {policy:?}): {} addresses -> {} blocks",
        addresses.len(),
        blocks.len()
    );
    blocks
}

fn v4_block_step(rest: &[Address], policy: Policy) -> (IpBlock, usize) {
    let start = octets(&rest[0]);
    let mut axis: Option<Axis> = None;
    let len = run_length(rest, |_, prev, next| {
        let next = octets(next);
        let reference = match policy {
            Policy::Strict => octets(prev),
            Policy::Loose => start,
        };
        let found = [Axis::LastOctet, Axis::ThirdOctet]
            .into_iter()
            .filter(|candidate| axis.map_or(true, |fixed| fixed == *candidate))
            .find(|candidate| candidate.extends(policy, &reference, &next));
        axis = found;
        found.is_some()
    });
    (IpBlock::new(rest[0], rest[len - 1]), len)
}
