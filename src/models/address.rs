//! IP address model and prefix arithmetic.
//!
//! Provides [`Address`], a family-tagged IP address that orders by its
//! unsigned big-endian value, along with the mask helpers the aggregators
//! and [`Subnet`](super::Subnet) are built on.

use crate::error::AddressError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Width of an IPv4 address in bits.
pub const V4_BITS: u8 = 32;
/// Width of an IPv6 address in bits.
pub const V6_BITS: u8 = 128;

/// Address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Address width in bits.
    pub fn bits(self) -> u8 {
        match self {
            Family::V4 => V4_BITS,
            Family::V6 => V6_BITS,
        }
    }

    /// All address bits of this family set.
    fn all_bits(self) -> u128 {
        match self {
            Family::V4 => u128::from(u32::MAX),
            Family::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// Which families a caller wants to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilyFilter {
    V4Only,
    V6Only,
    #[default]
    Both,
}

impl FamilyFilter {
    /// True if addresses of `family` pass the filter.
    pub fn accepts(self, family: Family) -> bool {
        match self {
            FamilyFilter::V4Only => family == Family::V4,
            FamilyFilter::V6Only => family == Family::V6,
            FamilyFilter::Both => true,
        }
    }
}

/// An IPv4 or IPv6 address.
///
/// Ordering places every IPv4 address before every IPv6 address and compares
/// addresses of one family as unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(IpAddr);

impl Address {
    pub fn new(ip: IpAddr) -> Address {
        Address(ip)
    }

    /// Build an address of `family` from its numeric value.
    ///
    /// IPv4 values are truncated to their low 32 bits.
    pub fn from_bits(family: Family, bits: u128) -> Address {
        match family {
            Family::V4 => Address(IpAddr::V4(Ipv4Addr::from(bits as u32))),
            Family::V6 => Address(IpAddr::V6(Ipv6Addr::from(bits))),
        }
    }

    pub fn ip(&self) -> IpAddr {
        self.0
    }

    pub fn family(&self) -> Family {
        match self.0 {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Unsigned value of the address.
    pub fn to_bits(&self) -> u128 {
        match self.0 {
            IpAddr::V4(ip) => u128::from(u32::from(ip)),
            IpAddr::V6(ip) => u128::from(ip),
        }
    }

    /// Upper 64 bits (the /64 network part of an IPv6 address).
    pub fn upper64(&self) -> u64 {
        (self.to_bits() >> 64) as u64
    }

    /// Lower 64 bits (the interface identifier of an IPv6 address).
    pub fn lower64(&self) -> u64 {
        self.to_bits() as u64
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Address(ip)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address(IpAddr::V4(ip))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address(IpAddr::V6(ip))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        text.parse::<IpAddr>()
            .map(Address)
            .map_err(|_| AddressError::InvalidAddressFormat(text.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a prefix length to a network mask within the family width.
///
/// # Examples
/// ```
/// use agent_ip_summary::models::{prefix_mask, Family};
/// assert_eq!(prefix_mask(Family::V4, 24).unwrap(), 0xFFFF_FF00);
/// ```
pub fn prefix_mask(family: Family, len: u8) -> Result<u128, AddressError> {
    let width = family.bits();
    if len > width {
        return Err(AddressError::PrefixTooLong { family, len });
    }
    let right_len = u32::from(width - len);
    let mask = family
        .all_bits()
        .checked_shr(right_len)
        .unwrap_or(0)
        .checked_shl(right_len)
        .unwrap_or(0);
    Ok(mask)
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: Address, len: u8) -> Result<Address, AddressError> {
    let mask = prefix_mask(addr.family(), len)?;
    Ok(Address::from_bits(addr.family(), addr.to_bits() & mask))
}

/// Get the highest address of the network `addr/len`.
pub fn broadcast_addr(addr: Address, len: u8) -> Result<Address, AddressError> {
    let family = addr.family();
    let mask = prefix_mask(family, len)?;
    let host_bits = family.all_bits() & !mask;
    Ok(Address::from_bits(family, (addr.to_bits() & mask) | host_bits))
}
