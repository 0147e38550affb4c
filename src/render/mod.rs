//! Text rendering of aggregates.
//!
//! - subnets render as `network/prefixlen`, or the bare address for a host
//! - ranges render as `Start - End`, or the bare address for a singleton
//! - blocks render with one bracketed varying component
//!
//! The `Display` impls of the models delegate here.

mod ipv6;

pub use ipv6::{compress_groups, join_groups, render_block_groups};

use crate::models::{Aggregate, IpBlock, IpRange, Subnet};
use std::net::IpAddr;

pub fn render_subnet(subnet: &Subnet) -> String {
    if subnet.is_host() {
        subnet.base().to_string()
    } else {
        format!("{}/{}", subnet.base(), subnet.prefix_len())
    }
}

pub fn render_range(range: &IpRange) -> String {
    if range.is_singleton() {
        range.start().to_string()
    } else {
        format!("{} - {}", range.start(), range.end())
    }
}

/// Render a block, e.g. `10.0.0.[1-3]`, `10.0.[1-2].20` or `2001:db8::[1-5]`.
///
/// IPv4 blocks whose start and end differ outside the third or fourth octet
/// have no bracket form and fall back to range text.
pub fn render_block(block: &IpBlock) -> String {
    if block.is_singleton() {
        return block.start().to_string();
    }
    match (block.start().ip(), block.end().ip()) {
        (IpAddr::V4(start), IpAddr::V4(end)) => {
            let s = start.octets();
            let e = end.octets();
            if s[..3] == e[..3] {
                format!("{}.{}.{}.[{}-{}]", s[0], s[1], s[2], s[3], e[3])
            } else if s[..2] == e[..2] && s[3] == e[3] {
                format!("{}.{}.[{}-{}].{}", s[0], s[1], s[2], e[2], s[3])
            } else {
                render_range(&IpRange::from(*block))
            }
        }
        (IpAddr::V6(start), IpAddr::V6(end)) => {
            render_block_groups(&start.segments(), &end.segments())
        }
        _ => render_range(&IpRange::from(*block)),
    }
}

pub fn render_aggregate(aggregate: &Aggregate) -> String {
    match aggregate {
        Aggregate::Subnet(s) => render_subnet(s),
        Aggregate::Range(r) => render_range(r),
        Aggregate::Block(b) => render_block(b),
    }
}
