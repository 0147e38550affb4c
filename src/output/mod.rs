//! Output formatting for owner summaries.
//!
//! This module handles formatting and writing the selected owners:
//! - [`list`] - One aggregate per line, optionally annotated with owner names
//! - [`csv`], [`json`], [`xml`] - Per-owner documents built from [`AgentRecord`]
//! - [`terminal`] - Padding helpers

mod csv;
mod json;
mod list;
mod record;
mod terminal;
mod xml;

pub use csv::{csv_header, csv_row, quote_csv_field, write_csv};
pub use json::write_json;
pub use list::{list_lines, write_list};
pub use record::{agent_records, AgentRecord};
pub use terminal::{pad, pad_width};
pub use xml::write_xml;

use crate::models::{AggregateKind, Owner, Policy};
use crate::processing::summarize_owners;
use std::error::Error;
use std::io::Write;

/// Output type selected with `-o`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    /// Plain address list
    Ip,
    #[default]
    SubnetStrict,
    SubnetLoose,
    RangeStrict,
    RangeLoose,
    BlockStrict,
    BlockLoose,
    /// One row per agent
    Csv,
    /// Array of agent objects
    Json,
    /// `<agents>` document
    Xml,
}

/// What a list output prints per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    Addresses,
    Aggregates(AggregateKind, Policy),
}

impl OutputType {
    /// The line shape for list outputs, `None` for the document formats.
    pub fn list_shape(self) -> Option<ListShape> {
        let aggregates = |kind, policy| Some(ListShape::Aggregates(kind, policy));
        match self {
            OutputType::Ip => Some(ListShape::Addresses),
            OutputType::SubnetStrict => aggregates(AggregateKind::Subnet, Policy::Strict),
            OutputType::SubnetLoose => aggregates(AggregateKind::Subnet, Policy::Loose),
            OutputType::RangeStrict => aggregates(AggregateKind::Range, Policy::Strict),
            OutputType::RangeLoose => aggregates(AggregateKind::Range, Policy::Loose),
            OutputType::BlockStrict => aggregates(AggregateKind::Block, Policy::Strict),
            OutputType::BlockLoose => aggregates(AggregateKind::Block, Policy::Loose),
            OutputType::Csv | OutputType::Json | OutputType::Xml => None,
        }
    }
}

/// Write `owners` in the requested format.
///
/// `with_names` only affects the list outputs.
pub fn write_output(
    out: &mut impl Write,
    owners: &[Owner],
    output_type: OutputType,
    with_names: bool,
) -> Result<(), Box<dyn Error>> {
    log::info!("Writing {output_type:?} output for {} owners", owners.len());
    match output_type {
        OutputType::Csv => write_csv(out, &owner_records(owners))?,
        OutputType::Json => write_json(out, &owner_records(owners))?,
        OutputType::Xml => write_xml(out, &owner_records(owners))?,
        list => {
            let shape = list
                .list_shape()
                .ok_or_else(|| format!("Output type {list:?} has no list shape"))?;
            write_list(out, owners, shape, with_names)?;
        }
    }
    Ok(())
}

fn owner_records(owners: &[Owner]) -> Vec<AgentRecord> {
    agent_records(&summarize_owners(owners))
}
