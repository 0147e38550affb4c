//! JSON output: a pretty-printed array of agent records.

use super::record::AgentRecord;
use std::error::Error;
use std::io::Write;

pub fn write_json(out: &mut impl Write, records: &[AgentRecord]) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, records)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(out)?;
    Ok(())
}
