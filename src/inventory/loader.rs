//! Reading the agent inventory from disk.

use super::agent::Inventory;
use crate::config;
use std::error::Error;
use std::path::Path;

/// Inventory file to use when none is given on the command line.
///
/// `AGENT_IP_INVENTORY` (from the environment or `.env`) wins over the
/// default file name.
pub fn default_inventory_path() -> String {
    std::env::var(config::INVENTORY_ENV).unwrap_or_else(|_| config::DEFAULT_INVENTORY_FILE.to_string())
}

/// Read and parse an inventory file.
///
/// # Returns
/// * `Ok(Inventory)` - The parsed agents
/// * `Err` - If the file is missing, unreadable or not a valid inventory
pub fn read_inventory(inventory_file: &str) -> Result<Inventory, Box<dyn Error>> {
    if !Path::new(inventory_file).exists() {
        return Err(format!("Inventory file does not exist: {inventory_file}").into());
    }
    log::info!("Reading inventory file: {inventory_file}");
    let json = std::fs::read_to_string(inventory_file)
        .map_err(|e| format!("Error reading inventory file {inventory_file}: {e}"))?;
    let inventory = parse_inventory(&json)
        .map_err(|e| format!("Error parsing inventory file {inventory_file}: {e}"))?;
    log::info!(
        "Got {} agents from inventory file {inventory_file}",
        inventory.agents.len()
    );
    Ok(inventory)
}

/// Parse inventory JSON, reporting the path of the offending field on error.
pub fn parse_inventory(json: &str) -> Result<Inventory, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let inventory: Inventory = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("path={} error={}", e.path(), e.inner()))?;
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgentType;

    #[test]
    fn test_read_inventory() {
        let inventory = read_inventory("src/tests/test_data/agents_test_cache_01.json")
            .expect("Error reading inventory");
        assert_eq!(inventory.agents.len(), 4, "Expected 4 agents in test sample.");
        assert_eq!(
            inventory.agents[0].agent_name, "branch-akl-01",
            "Wrong agent from test sample."
        );
        assert_eq!(inventory.agents[1].agent_type, AgentType::EnterpriseCluster);
        assert_eq!(inventory.agents[1].cluster_members.len(), 2);
        assert_eq!(inventory.agents[1].cluster_members[1].name, "wlg-node-b");
        assert!(inventory.agents[1].ip_addresses.is_empty());
        assert!(inventory.agents[3].public_ip_addresses.is_empty());
    }

    #[test]
    fn test_read_inventory_missing_file() {
        let err = read_inventory("src/tests/test_data/no_such_file.json").unwrap_err();
        assert!(err.to_string().contains("does not exist"), "got: {err}");
    }

    #[test]
    fn test_read_inventory_reports_path() {
        let err = read_inventory("src/tests/test_data/agents_test_cache_bad_type.json").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("agents[0].agentType"), "got: {msg}");
    }

    #[test]
    fn test_parse_inventory_minimal() {
        let inventory = parse_inventory(r#"{"agents":[{"agentId":1,"agentName":"a","agentType":"Cloud"}]}"#)
            .expect("Error parsing inventory");
        assert_eq!(inventory.agents[0].agent_id, 1);
        assert!(inventory.agents[0].location.is_empty());
        assert!(parse_inventory("[]").is_err());
    }
}
