//! Address aggregation logic.
//!
//! This module contains the aggregation core and what builds on it:
//! - [`normalize`] - Text to canonical address sets
//! - [`subnets`], [`ranges`], [`blocks`] - The three aggregators
//! - [`membership`] - Containment queries for annotation
//! - [`summary`] - Per-family and per-owner summaries

mod blocks;
mod membership;
mod normalize;
mod ranges;
mod scan;
mod subnets;
mod summary;

// Re-export public functions
pub use blocks::aggregate_blocks;
pub use membership::{contains_address, find_contributors, owners_covered_by, Membership};
pub use normalize::{canonicalize, parse_address, try_canonicalize};
pub use ranges::aggregate_ranges;
pub use subnets::aggregate_subnets;
pub use summary::{
    aggregate, combined_addresses, summarize, summarize_owners, FamilySummary, OwnerSummary,
};
