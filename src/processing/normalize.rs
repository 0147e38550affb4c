//! Text to canonical address sets.

use crate::error::AddressError;
use crate::models::{Address, AddressSet, FamilyFilter};
use colored::Colorize;

/// Parse one dot-decimal or colon-hex address, surrounding whitespace ignored.
pub fn parse_address(text: &str) -> Result<Address, AddressError> {
    text.parse()
}

/// Parse, filter, sort and de-duplicate.
///
/// Unparseable entries are dropped with a warning, as are addresses whose
/// family the filter does not accept. The result lists IPv4 first.
pub fn canonicalize<'a>(
    texts: impl IntoIterator<Item = &'a str>,
    filter: FamilyFilter,
) -> AddressSet {
    texts
        .into_iter()
        .filter_map(|text| match parse_address(text) {
            Ok(addr) => Some(addr),
            Err(err) => {
                log::warn!("{} {err}", "Skipping".yellow());
                None
            }
        })
        .filter(|addr| filter.accepts(addr.family()))
        .collect()
}

/// Like [`canonicalize`], but the first unparseable entry is an error.
pub fn try_canonicalize<'a>(
    texts: impl IntoIterator<Item = &'a str>,
    filter: FamilyFilter,
) -> Result<AddressSet, AddressError> {
    let mut addresses = Vec::new();
    for text in texts {
        let addr = parse_address(text)?;
        if filter.accepts(addr.family()) {
            addresses.push(addr);
        }
    }
    Ok(addresses.into_iter().collect())
}
