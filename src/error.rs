//! Error types for address parsing and subnet arithmetic.

use crate::models::Family;
use thiserror::Error;

/// Errors raised while turning text into addresses or subnets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Text is neither dot-decimal IPv4 nor colon-hex IPv6
    #[error("invalid address format: '{0}'")]
    InvalidAddressFormat(String),

    /// Prefix length exceeds the address width of the family
    #[error("prefix length /{len} is too long for {family}")]
    PrefixTooLong { family: Family, len: u8 },

    /// Text is not `address` or `address/prefixlen`
    #[error("invalid subnet notation: '{0}'")]
    InvalidSubnetFormat(String),
}
