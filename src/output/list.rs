//! One aggregate per line, optionally annotated with owner names.

use super::terminal::{pad, pad_width};
use super::ListShape;
use crate::config::{LIST_COMMENT_CHAR, LIST_SEPARATOR_CHAR};
use crate::models::Owner;
use crate::processing::{combined_addresses, owners_covered_by, summarize, Membership};
use std::io::Write;

/// Lines of list output for the combined addresses of `owners`.
///
/// With `with_names` each line is padded and followed by the names of the
/// owners with an address covered by it, e.g.
/// `10.0.0.0/30                             # branch-01; branch-02`.
pub fn list_lines(owners: &[Owner], shape: ListShape, with_names: bool) -> Vec<String> {
    let combined = combined_addresses(owners);
    match shape {
        ListShape::Addresses => combined
            .iter()
            .map(|addr| list_line(addr, addr.to_string(), owners, shape, with_names))
            .collect(),
        ListShape::Aggregates(kind, policy) => summarize(&combined, kind, policy)
            .iter()
            .map(|aggregate| list_line(aggregate, aggregate.to_string(), owners, shape, with_names))
            .collect(),
    }
}

fn list_line(
    entry: &impl Membership,
    text: String,
    owners: &[Owner],
    shape: ListShape,
    with_names: bool,
) -> String {
    if !with_names {
        return text;
    }
    let names: Vec<&str> = owners_covered_by(owners, entry)
        .iter()
        .map(|owner| owner.name.as_str())
        .collect();
    format!(
        "{} {LIST_COMMENT_CHAR} {}",
        pad(text, pad_width(shape)),
        names.join(&format!("{LIST_SEPARATOR_CHAR} "))
    )
}

pub fn write_list(
    out: &mut impl Write,
    owners: &[Owner],
    shape: ListShape,
    with_names: bool,
) -> std::io::Result<()> {
    for line in list_lines(owners, shape, with_names) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgentType, AggregateKind, FamilyFilter, Policy};
    use crate::processing::canonicalize;

    fn owner(name: &str, addresses: &[&str]) -> Owner {
        Owner {
            agent_id: 1,
            name: name.to_string(),
            agent_type: AgentType::Cloud,
            location: String::new(),
            country_id: String::new(),
            addresses: canonicalize(addresses.iter().copied(), FamilyFilter::Both),
        }
    }

    fn owners() -> Vec<Owner> {
        vec![
            owner("alpha", &["10.0.0.1", "10.0.0.2"]),
            owner("beta", &["10.0.0.3", "2001:db8::1"]),
        ]
    }

    #[test]
    fn test_plain_lines() {
        let lines = list_lines(&owners(), ListShape::Aggregates(AggregateKind::Subnet, Policy::Strict), false);
        assert_eq!(lines, vec!["10.0.0.1", "10.0.0.2/31", "2001:db8::1"]);
        let lines = list_lines(&owners(), ListShape::Addresses, false);
        assert_eq!(lines, vec!["10.0.0.1", "10.0.0.2", "10.0.0.3", "2001:db8::1"]);
    }

    #[test]
    fn test_named_lines() {
        let lines = list_lines(&owners(), ListShape::Aggregates(AggregateKind::Range, Policy::Strict), true);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("{:<59} # alpha; beta", "10.0.0.1 - 10.0.0.3"));
        assert_eq!(lines[1], format!("{:<59} # beta", "2001:db8::1"));

        let lines = list_lines(&owners(), ListShape::Addresses, true);
        assert_eq!(lines[0], format!("{:<39} # alpha", "10.0.0.1"));
    }

    #[test]
    fn test_write_list() {
        let mut out = Vec::new();
        write_list(&mut out, &owners(), ListShape::Aggregates(AggregateKind::Block, Policy::Loose), false)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "10.0.0.[1-3]\n2001:db8::1\n");
    }
}
