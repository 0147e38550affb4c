//! CIDR subnet model.

use super::{broadcast_addr, cut_addr, prefix_mask, Address, Family};
use crate::error::AddressError;
use crate::render;
use std::fmt;
use std::str::FromStr;

/// Aligned power-of-two block of addresses: base address plus prefix length.
///
/// The base address never has bits set beyond the prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subnet {
    base: Address,
    prefix_len: u8,
}

impl Subnet {
    /// Create the subnet of length `prefix_len` containing `addr`.
    pub fn new(addr: Address, prefix_len: u8) -> Result<Subnet, AddressError> {
        let base = cut_addr(addr, prefix_len)?;
        Ok(Subnet { base, prefix_len })
    }

    /// Subnet holding exactly one address.
    pub fn host(addr: Address) -> Subnet {
        Subnet {
            base: addr,
            prefix_len: addr.family().bits(),
        }
    }

    /// Like [`Subnet::new`] for prefix lengths already known to fit the family.
    pub(crate) fn containing(addr: Address, prefix_len: u8) -> Subnet {
        assert!(
            prefix_len <= addr.family().bits(),
            "prefix_len[{prefix_len}] > {} should never happen.",
            addr.family().bits()
        );
        let mask = prefix_mask(addr.family(), prefix_len).unwrap_or(0);
        Subnet {
            base: Address::from_bits(addr.family(), addr.to_bits() & mask),
            prefix_len,
        }
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn family(&self) -> Family {
        self.base.family()
    }

    /// True if the prefix covers the full address width.
    pub fn is_host(&self) -> bool {
        self.prefix_len == self.family().bits()
    }

    /// Lowest (network) address in the subnet.
    pub fn lo(&self) -> Address {
        self.base
    }

    /// Highest address in the subnet.
    pub fn hi(&self) -> Address {
        broadcast_addr(self.base, self.prefix_len)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address for {}: {}", self, e))
    }

    /// Number of addresses in the subnet, saturating at `u128::MAX`.
    pub fn host_count(&self) -> u128 {
        let host_bits = u32::from(self.family().bits() - self.prefix_len);
        1u128.checked_shl(host_bits).unwrap_or(u128::MAX)
    }

    /// Prefix match of `addr` against this subnet.
    pub fn contains(&self, addr: &Address) -> bool {
        if addr.family() != self.family() {
            return false;
        }
        let mask = prefix_mask(self.family(), self.prefix_len).unwrap_or(0);
        addr.to_bits() & mask == self.base.to_bits()
    }
}

impl FromStr for Subnet {
    type Err = AddressError;

    /// Parse `address/prefixlen`, or a bare address as a host subnet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('/') {
            None => Ok(Subnet::host(s.parse()?)),
            Some((addr, len)) => {
                let addr: Address = addr.parse()?;
                let len: u8 = len
                    .parse()
                    .map_err(|_| AddressError::InvalidSubnetFormat(s.to_string()))?;
                Subnet::new(addr, len)
            }
        }
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_subnet(self))
    }
}
