//! Domain models for agent IP summaries.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Address`] and [`AddressSet`] - family-tagged addresses in canonical order
//! - [`Subnet`], [`IpRange`] and [`IpBlock`] - the three aggregate shapes
//! - [`Aggregate`] - one entry of an aggregate list
//! - [`Owner`] - an inventory agent with its selected addresses

mod address;
mod address_set;
mod aggregate;
mod owner;
mod range;
mod subnet;

// Re-export public types
pub use address::{
    broadcast_addr, cut_addr, prefix_mask, Address, Family, FamilyFilter, V4_BITS, V6_BITS,
};
pub use address_set::AddressSet;
pub use aggregate::{Aggregate, AggregateKind, Policy};
pub use owner::{AgentType, Owner};
pub use range::{IpBlock, IpRange};
pub use subnet::Subnet;
