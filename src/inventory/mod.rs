//! Agent inventory: the source of owners and their addresses.
//!
//! - [`agent`] - JSON records
//! - [`loader`] - Reading the inventory file
//! - [`selection`] - Turning agents into owners according to the CLI flags

mod agent;
mod loader;
mod selection;

pub use agent::{Agent, ClusterMember, Inventory};
pub use loader::{default_inventory_path, parse_inventory, read_inventory};
pub use selection::{select_owners, AgentSelection, SelectionFlags};
