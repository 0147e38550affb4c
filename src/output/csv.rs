//! CSV output formatting for owner summaries.

use super::record::AgentRecord;
use crate::config::CSV_SEPARATOR_CHAR;
use std::io::Write;

const FAMILY_COLUMNS: [&str; 7] = [
    "Addresses",
    "Subnets (Strict)",
    "Subnets (Loose)",
    "Ranges (Strict)",
    "Ranges (Loose)",
    "Blocks (Strict)",
    "Blocks (Loose)",
];

/// Header row: owner columns, then seven IPv4 and seven IPv6 list columns.
pub fn csv_header() -> String {
    let owner_columns = ["Agent ID", "Agent Name", "Agent Type", "Location", "Country"];
    let family_columns = ["IPv4", "IPv6"]
        .iter()
        .flat_map(|family| FAMILY_COLUMNS.iter().map(move |column| format!("{family} {column}")));
    owner_columns
        .iter()
        .map(|c| c.to_string())
        .chain(family_columns)
        .collect::<Vec<_>>()
        .join(CSV_SEPARATOR_CHAR)
}

/// Enclose a field in double quotes, doubling any embedded quote.
///
/// Multi-value cells keep their newlines inside the quotes.
pub fn quote_csv_field(input: &str) -> String {
    let escaped = input.replace('"', "\"\"");
    format!("\"{escaped}\"")
}

pub fn csv_row(record: &AgentRecord) -> String {
    let mut fields = vec![
        record.agent_id.to_string(),
        quote_csv_field(&record.agent_name),
        record.agent_type.clone(),
        quote_csv_field(&record.location),
        record.country_id.clone(),
    ];
    fields.extend(
        record
            .csv_columns()
            .iter()
            .map(|values| quote_csv_field(&values.join("\n"))),
    );
    fields.join(CSV_SEPARATOR_CHAR)
}

/// Write the header and one row per record.
pub fn write_csv(out: &mut impl Write, records: &[AgentRecord]) -> std::io::Result<()> {
    writeln!(out, "{}", csv_header())?;
    for record in records {
        writeln!(out, "{}", csv_row(record))?;
    }
    log::info!("Wrote {} CSV rows", records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgentType, FamilyFilter, Owner};
    use crate::processing::{canonicalize, OwnerSummary};

    #[test]
    fn test_csv_header() {
        let header = csv_header();
        assert!(header.starts_with("Agent ID,Agent Name,Agent Type,Location,Country,IPv4 Addresses,"));
        assert!(header.ends_with(",IPv6 Blocks (Strict),IPv6 Blocks (Loose)"));
        assert_eq!(header.split(',').count(), 19);
    }

    #[test]
    fn test_quote_csv_field() {
        assert_eq!(quote_csv_field("plain"), "\"plain\"");
        assert_eq!(quote_csv_field("Auckland, NZ"), "\"Auckland, NZ\"");
        assert_eq!(quote_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_csv_field(""), "\"\"");
    }

    #[test]
    fn test_csv_row() {
        let owner = Owner {
            agent_id: 7,
            name: "edge, west".to_string(),
            agent_type: AgentType::Enterprise,
            location: "Lab".to_string(),
            country_id: "NZ".to_string(),
            addresses: canonicalize(["10.0.0.1", "10.0.0.2", "10.0.0.3"], FamilyFilter::Both),
        };
        let record = AgentRecord::from(&OwnerSummary::new(&owner));
        let row = csv_row(&record);
        assert!(
            row.starts_with("7,\"edge, west\",Enterprise,\"Lab\",NZ,\"10.0.0.1\n10.0.0.2\n10.0.0.3\",\"10.0.0.1\n10.0.0.2/31\",\"10.0.0.0/30\","),
            "got: {row}"
        );
        // empty IPv6 cells
        assert!(row.ends_with(",\"\",\"\",\"\",\"\",\"\",\"\",\"\""), "got: {row}");
    }
}
