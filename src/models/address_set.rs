//! Sorted, de-duplicated address collection.

use super::{Address, Family};

/// Sorted, de-duplicated sequence of addresses.
///
/// All IPv4 entries come first (ascending), followed by all IPv6 entries
/// (ascending), so each family is available as one contiguous slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSet {
    addresses: Vec<Address>,
}

impl AddressSet {
    pub fn new() -> AddressSet {
        AddressSet::default()
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.addresses
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.addresses.iter()
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.addresses.binary_search(address).is_ok()
    }

    /// The IPv4 partition.
    pub fn v4(&self) -> &[Address] {
        &self.addresses[..self.v6_start()]
    }

    /// The IPv6 partition.
    pub fn v6(&self) -> &[Address] {
        &self.addresses[self.v6_start()..]
    }

    /// The partition of one family.
    pub fn family(&self, family: Family) -> &[Address] {
        match family {
            Family::V4 => self.v4(),
            Family::V6 => self.v6(),
        }
    }

    fn v6_start(&self) -> usize {
        self.addresses.partition_point(|a| a.family() == Family::V4)
    }
}

impl FromIterator<Address> for AddressSet {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        let mut addresses: Vec<Address> = iter.into_iter().collect();
        // Dedup needs sorted input
        addresses.sort();
        addresses.dedup();
        AddressSet { addresses }
    }
}

impl<'a> IntoIterator for &'a AddressSet {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}
