//! Terminal output utilities.
//!
//! Provides formatting helpers for list output.

use super::ListShape;
use crate::config;
use crate::models::AggregateKind;

/// Left-align `value` in a field of at least `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// The value followed by spaces, or the value unchanged if already wider
pub fn pad<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

/// Column width of the aggregate text in annotated list output.
pub fn pad_width(shape: ListShape) -> usize {
    match shape {
        ListShape::Addresses => config::PAD_ADDRESS,
        ListShape::Aggregates(AggregateKind::Subnet, _) => config::PAD_SUBNET,
        ListShape::Aggregates(AggregateKind::Range, _) => config::PAD_RANGE,
        ListShape::Aggregates(AggregateKind::Block, _) => config::PAD_BLOCK,
    }
}
