// cargo watch -x 'fmt' -x 'test'

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod output;
pub mod processing;
pub mod render;

pub use output::write_output;

use cli::Args;
use inventory::{read_inventory, select_owners, AgentSelection};
use models::Owner;
use std::error::Error;
use std::io::Write;

/// Read the inventory and build the owners for `selection`.
pub fn get_owners(
    inventory_file: &str,
    selection: &AgentSelection,
    strict_input: bool,
) -> Result<Vec<Owner>, Box<dyn Error>> {
    let inventory = read_inventory(inventory_file)?;
    let owners = select_owners(&inventory, selection, strict_input)
        .map_err(|e| format!("Error selecting addresses from {inventory_file}: {e}"))?;
    Ok(owners)
}

/// Everything `main` does after logging is up.
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let selection = AgentSelection::from(args.selection_flags());
    let owners = get_owners(&args.inventory_path(), &selection, args.strict_input)?;
    write_output(out, &owners, args.output, args.name)?;
    out.flush()?;
    Ok(())
}
