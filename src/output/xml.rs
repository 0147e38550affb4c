//! XML output: `<agents>` with one `<agent>` element per record.

use super::record::AgentRecord;
use std::io::Write;

pub fn write_xml(out: &mut impl Write, records: &[AgentRecord]) -> std::io::Result<()> {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(out, "<agents>")?;
    for record in records {
        writeln!(out, "  <agent>")?;
        write_element(out, "agentId", &record.agent_id.to_string())?;
        write_element(out, "agentName", &record.agent_name)?;
        write_element(out, "agentType", &record.agent_type)?;
        if !record.location.is_empty() {
            write_element(out, "location", &record.location)?;
        }
        if !record.country_id.is_empty() {
            write_element(out, "countryId", &record.country_id)?;
        }
        for (name, values) in record.lists() {
            for value in values {
                write_element(out, name, value)?;
            }
        }
        writeln!(out, "  </agent>")?;
    }
    writeln!(out, "</agents>")?;
    Ok(())
}

fn write_element(out: &mut impl Write, name: &str, text: &str) -> std::io::Result<()> {
    writeln!(out, "    <{name}>{}</{name}>", escape_xml(text))
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
