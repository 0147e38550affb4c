//! Contiguous range summarization.

use super::scan::{run_length, scan, single_family};
use crate::config::LOOSE_RANGE_STEP;
use crate::models::{Address, Family, IpRange, Policy};

/// Summarize sorted, de-duplicated, family-pure addresses into ranges.
pub fn aggregate_ranges(addresses: &[Address], policy: Policy) -> Vec<IpRange> {
    let Some(family) = single_family(addresses) else {
        return Vec::new();
    };
    let ranges = scan(addresses, |rest| {
        let start = rest[0];
        let len = run_length(rest, |steps, prev, next| {
            range_joins(family, policy, &start, steps, prev, next)
        });
        (IpRange::new(start, rest[len - 1]), len)
    });
    log::debug!(
        "aggregate_ranges({family}, {policy:?}): {} addresses -> {} ranges",
        addresses.len(),
        ranges.len()
    );
    ranges
}

/// Whether `next`, `steps` positions after `start`, extends the run ending at `prev`.
fn range_joins(
    family: Family,
    policy: Policy,
    start: &Address,
    steps: usize,
    prev: &Address,
    next: &Address,
) -> bool {
    match (family, policy) {
        (Family::V4, Policy::Strict) => next.to_bits() == prev.to_bits() + 1,
        // Never crosses a /64 boundary
        (Family::V6, Policy::Strict) => {
            next.upper64() == prev.upper64() && prev.lower64().checked_add(1) == Some(next.lower64())
        }
        // Gap allowance grows with the run
        (Family::V4, Policy::Loose) => {
            next.to_bits() - start.to_bits() < steps as u128 * LOOSE_RANGE_STEP
        }
        (Family::V6, Policy::Loose) => next.upper64() == start.upper64(),
    }
}
