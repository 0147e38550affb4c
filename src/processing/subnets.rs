//! CIDR subnet summarization.

use super::scan::{scan, single_family};
use crate::config::{V4_MIN_PARENT_LEN, V6_LOOSE_LOOKAHEAD, V6_LOOSE_PREFIX_LEN};
use crate::models::{Address, Family, Policy, Subnet, V4_BITS};

/// Summarize sorted, de-duplicated, family-pure addresses into subnets.
///
/// IPv4 subnets are never wider than /24. Strict IPv6 output is one /128 per
/// address; loose IPv6 output is one /64 per run of addresses in that /64.
pub fn aggregate_subnets(addresses: &[Address], policy: Policy) -> Vec<Subnet> {
    let Some(family) = single_family(addresses) else {
        return Vec::new();
    };
    let subnets = match (family, policy) {
        (Family::V4, Policy::Strict) => scan(addresses, strict_v4_step),
        (Family::V4, Policy::Loose) => scan(addresses, loose_v4_step),
        (Family::V6, Policy::Strict) => scan(addresses, |rest| (Subnet::host(rest[0]), 1)),
        (Family::V6, Policy::Loose) => {
            let mut subnets = scan(addresses, loose_v6_step);
            // A /64 holding more than one lookahead of addresses shows up in consecutive steps
            subnets.dedup();
            subnets
        }
    };
    log::debug!(
        "aggregate_subnets({family}, {policy:?}): {} addresses -> {} subnets",
        addresses.len(),
        subnets.len()
    );
    subnets
}

/// Number of addresses in an IPv4 subnet of `len` (len >= 24 keeps this small).
fn v4_span(len: u8) -> usize {
    1 << (V4_BITS - len)
}

/// Widest subnet whose every address is among the next positions.
///
/// H sorted distinct addresses inside a subnet of exactly H addresses must
/// fill it, so containment plus count proves exact coverage.
fn strict_v4_step(rest: &[Address]) -> (Subnet, usize) {
    let head = rest[0];
    (V4_MIN_PARENT_LEN..=V4_BITS)
        .find_map(|len| {
            let parent = Subnet::containing(head, len);
            let hosts = v4_span(len);
            let covered = rest.len() >= hosts && rest[..hosts].iter().all(|a| parent.contains(a));
            covered.then_some((parent, hosts))
        })
        .unwrap_or((Subnet::host(head), 1))
}

/// Narrowest subnet that still captures as many leading addresses as any
/// wider one.
fn loose_v4_step(rest: &[Address]) -> (Subnet, usize) {
    let head = rest[0];
    let mut best: Option<(Subnet, usize)> = None;
    for len in V4_MIN_PARENT_LEN..=V4_BITS {
        let parent = Subnet::containing(head, len);
        let captured = rest
            .iter()
            .take(v4_span(len))
            .take_while(|a| parent.contains(a))
            .count();
        if let Some((wider, wider_captured)) = best {
            if captured < wider_captured {
                return (wider, wider_captured);
            }
        }
        best = Some((parent, captured));
    }
    best.unwrap_or((Subnet::host(head), 1))
}

fn loose_v6_step(rest: &[Address]) -> (Subnet, usize) {
    let parent = Subnet::containing(rest[0], V6_LOOSE_PREFIX_LEN);
    let captured = rest
        .iter()
        .take(V6_LOOSE_LOOKAHEAD)
        .take_while(|a| parent.contains(a))
        .count();
    (parent, captured)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addrs(texts: &[&str]) -> Vec<Address> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    fn render(subnets: &[Subnet]) -> Vec<String> {
        subnets.iter().map(|s| s.to_string()).collect()
    }

    fn v4_run(first: u32, count: u32) -> Vec<Address> {
        (first..first + count)
            .map(|v| Address::from_bits(Family::V4, u128::from(v)))
            .collect()
    }

    #[test]
    fn test_strict_v4_example() {
        let a = addrs(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Strict)),
            vec!["10.0.0.1", "10.0.0.2/31"]
        );
    }

    #[test]
    fn test_loose_v4_example() {
        let a = addrs(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Loose)),
            vec!["10.0.0.0/30"]
        );
    }

    #[test]
    fn test_strict_v4_full_24() {
        let a = v4_run(0x0A00_0100, 256);
        assert_eq!(render(&aggregate_subnets(&a, Policy::Strict)), vec!["10.0.1.0/24"]);
    }

    #[test]
    fn test_strict_v4_never_wider_than_24() {
        let a = v4_run(0x0A00_0000, 512);
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Strict)),
            vec!["10.0.0.0/24", "10.0.1.0/24"]
        );
    }

    #[test]
    fn test_strict_v4_unaligned_run() {
        // 10.0.0.3 - 10.0.0.12
        let a = v4_run(0x0A00_0003, 10);
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Strict)),
            vec!["10.0.0.3", "10.0.0.4/30", "10.0.0.8/30", "10.0.0.12"]
        );
    }

    #[test]
    fn test_loose_v4_sparse_hosts_stay_hosts() {
        let a = addrs(&["10.0.0.1", "10.0.5.1"]);
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Loose)),
            vec!["10.0.0.1", "10.0.5.1"]
        );
    }

    #[test]
    fn test_loose_v4_picks_narrowest_without_losing_members() {
        let a = addrs(&["10.0.0.1", "10.0.0.100", "10.0.0.200"]);
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Loose)),
            vec!["10.0.0.0/24"]
        );

        let a = addrs(&["10.0.0.1", "10.0.0.100"]);
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Loose)),
            vec!["10.0.0.0/25"]
        );
    }

    #[test]
    fn test_v4_top_of_space() {
        let a = addrs(&["255.255.255.254", "255.255.255.255"]);
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Strict)),
            vec!["255.255.255.254/31"]
        );
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Loose)),
            vec!["255.255.255.254/31"]
        );
    }

    #[test]
    fn test_strict_v6_one_per_address() {
        let a = addrs(&["2001:db8::1", "2001:db8::2"]);
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Strict)),
            vec!["2001:db8::1", "2001:db8::2"]
        );
    }

    #[test]
    fn test_loose_v6_rounds_to_64() {
        let a = addrs(&["2001:db8::1", "2001:db8::ffff", "2001:db8:0:1::1", "2001:db8:1::1"]);
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Loose)),
            vec!["2001:db8::/64", "2001:db8:0:1::/64", "2001:db8:1::/64"]
        );
    }

    #[test]
    fn test_loose_v6_beyond_lookahead_stays_one_entry() {
        let base: u128 = 0x2001_0db8_0000_0000_0000_0000_0000_0000;
        let a: Vec<Address> = (0..2500u128)
            .map(|i| Address::from_bits(Family::V6, base + i))
            .collect();
        assert_eq!(
            render(&aggregate_subnets(&a, Policy::Loose)),
            vec!["2001:db8::/64"]
        );
    }

    #[test]
    fn test_empty_and_single() {
        assert!(aggregate_subnets(&[], Policy::Strict).is_empty());
        assert!(aggregate_subnets(&[], Policy::Loose).is_empty());
        let a = addrs(&["10.9.8.7"]);
        assert_eq!(render(&aggregate_subnets(&a, Policy::Strict)), vec!["10.9.8.7"]);
        assert_eq!(render(&aggregate_subnets(&a, Policy::Loose)), vec!["10.9.8.7"]);
    }
}
