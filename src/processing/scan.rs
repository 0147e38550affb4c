//! Greedy left-to-right scan shared by the aggregators.
//!
//! Each aggregator supplies a step that looks at the not yet covered tail of
//! the sorted addresses and returns one aggregate plus how many leading
//! addresses it consumed. The scan threads the position through; no cursor
//! state survives between steps.

use crate::models::{Address, Family};

/// Run `step` over `addresses` until every address is covered.
pub(crate) fn scan<T>(
    addresses: &[Address],
    mut step: impl FnMut(&[Address]) -> (T, usize),
) -> Vec<T> {
    let mut aggregates = Vec::new();
    let mut rest = addresses;
    while !rest.is_empty() {
        let (aggregate, consumed) = step(rest);
        assert!(
            (1..=rest.len()).contains(&consumed),
            "step consumed {consumed} of {} addresses, should never happen.",
            rest.len()
        );
        aggregates.push(aggregate);
        rest = &rest[consumed..];
    }
    aggregates
}

/// Length of the run at the start of `rest`.
///
/// `joins(steps, prev, next)` decides whether `next` extends the run, where
/// `steps` is the position of `next` relative to the run start.
pub(crate) fn run_length(
    rest: &[Address],
    mut joins: impl FnMut(usize, &Address, &Address) -> bool,
) -> usize {
    1 + rest
        .windows(2)
        .enumerate()
        .take_while(|(n, pair)| joins(n + 1, &pair[0], &pair[1]))
        .count()
}

/// Family shared by all `addresses`, or `None` when empty.
///
/// # Panics
/// If the addresses mix families. Aggregation input must be family-pure.
pub(crate) fn single_family(addresses: &[Address]) -> Option<Family> {
    let family = addresses.first()?.family();
    assert!(
        addresses.iter().all(|a| a.family() == family),
        "mixed address families passed to aggregation"
    );
    debug_assert!(
        addresses.windows(2).all(|pair| pair[0] < pair[1]),
        "aggregation input must be sorted and de-duplicated"
    );
    Some(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addrs(texts: &[&str]) -> Vec<Address> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_scan_consumes_everything() {
        let a = addrs(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        let chunks = scan(&a, |rest| (rest.len(), rest.len().min(2)));
        assert_eq!(chunks, vec![3, 1]);
        assert!(scan(&[], |rest| (rest.len(), 1)).is_empty());
    }

    #[test]
    fn test_run_length_passes_steps() {
        let a = addrs(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.9"]);
        let mut seen = Vec::new();
        let len = run_length(&a, |steps, _, next| {
            seen.push(steps);
            next.to_bits() < a[0].to_bits() + 5
        });
        assert_eq!(len, 3);
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(run_length(&a[3..], |_, _, _| true), 1);
    }

    #[test]
    #[should_panic(expected = "mixed address families")]
    fn test_single_family_rejects_mixed() {
        single_family(&addrs(&["10.0.0.1", "::1"]));
    }
}
