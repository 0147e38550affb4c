//! Which agents and which of their addresses take part in a summary.

use super::agent::{Agent, Inventory};
use crate::error::AddressError;
use crate::models::{AgentType, FamilyFilter, Owner};
use crate::processing::{canonicalize, try_canonicalize};

/// Raw selection switches as given on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionFlags {
    pub ipv4: bool,
    pub ipv6: bool,
    pub enterprise: bool,
    pub cloud: bool,
    pub enterprise_public: bool,
    pub enterprise_private: bool,
}

/// Resolved selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSelection {
    pub enterprise: bool,
    pub cloud: bool,
    /// Collect public addresses (and cluster members' public addresses).
    pub public: bool,
    /// Collect enterprise private addresses (and cluster members' addresses).
    pub private: bool,
    pub family: FamilyFilter,
}

impl Default for AgentSelection {
    fn default() -> Self {
        AgentSelection::from(SelectionFlags::default())
    }
}

impl From<SelectionFlags> for AgentSelection {
    fn from(flags: SelectionFlags) -> Self {
        let family = match (flags.ipv4, flags.ipv6) {
            (true, false) => FamilyFilter::V4Only,
            (false, true) => FamilyFilter::V6Only,
            _ => FamilyFilter::Both,
        };

        let any_enterprise = flags.enterprise || flags.enterprise_public || flags.enterprise_private;
        let (enterprise, cloud) = match (any_enterprise, flags.cloud) {
            (true, false) => (true, false),
            (false, true) => (false, true),
            _ => (true, true),
        };

        let both_visibilities = flags.enterprise
            || (flags.enterprise_public && flags.enterprise_private)
            || (!any_enterprise && !flags.cloud);
        let (public, private) = if both_visibilities {
            (true, true)
        } else {
            (flags.enterprise_public, flags.enterprise_private)
        };

        AgentSelection {
            enterprise,
            cloud,
            public,
            private,
            family,
        }
    }
}

impl AgentSelection {
    fn accepts(&self, agent_type: AgentType) -> bool {
        if agent_type.is_enterprise() {
            self.enterprise
        } else {
            self.cloud
        }
    }

    /// Address texts of `agent` this selection collects, in inventory order.
    pub fn address_texts<'a>(&self, agent: &'a Agent) -> Vec<&'a str> {
        let mut texts: Vec<&str> = Vec::new();
        let own_addresses = match agent.agent_type {
            AgentType::Cloud => true,
            AgentType::Enterprise => self.private,
            AgentType::EnterpriseCluster => false,
        };
        if own_addresses {
            texts.extend(agent.ip_addresses.iter().map(String::as_str));
        }
        if self.public {
            texts.extend(agent.public_ip_addresses.iter().map(String::as_str));
        }
        for member in &agent.cluster_members {
            if self.private && agent.agent_type == AgentType::EnterpriseCluster {
                texts.extend(member.ip_addresses.iter().map(String::as_str));
            }
            if self.public {
                texts.extend(member.public_ip_addresses.iter().map(String::as_str));
            }
        }
        texts
    }
}

/// Build the owner list for `selection` from `inventory`.
///
/// With `strict` an unparseable address aborts the selection; otherwise it
/// is dropped with a warning. When only one family is selected, agents left
/// without addresses are dropped.
pub fn select_owners(
    inventory: &Inventory,
    selection: &AgentSelection,
    strict: bool,
) -> Result<Vec<Owner>, AddressError> {
    let mut owners = Vec::new();
    for agent in inventory.agents.iter().filter(|a| selection.accepts(a.agent_type)) {
        let texts = selection.address_texts(agent);
        let addresses = if strict {
            try_canonicalize(texts, selection.family)?
        } else {
            canonicalize(texts, selection.family)
        };
        if selection.family != FamilyFilter::Both && addresses.is_empty() {
            log::debug!("Dropping agent {} without {:?} addresses", agent.agent_name, selection.family);
            continue;
        }
        owners.push(Owner {
            agent_id: agent.agent_id,
            name: agent.agent_name.clone(),
            agent_type: agent.agent_type,
            location: agent.location.clone(),
            country_id: agent.country_id.clone(),
            addresses,
        });
    }
    log::info!(
        "Selected {} of {} agents ({selection:?})",
        owners.len(),
        inventory.agents.len()
    );
    Ok(owners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::read_inventory;

    fn inventory() -> Inventory {
        read_inventory("src/tests/test_data/agents_test_cache_01.json").expect("Error reading inventory")
    }

    fn names(owners: &[Owner]) -> Vec<&str> {
        owners.iter().map(|o| o.name.as_str()).collect()
    }

    fn addresses(owner: &Owner) -> Vec<String> {
        owner.addresses.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_default_selection_is_everything() {
        let s = AgentSelection::default();
        assert!(s.enterprise && s.cloud && s.public && s.private);
        assert_eq!(s.family, FamilyFilter::Both);
    }

    #[test]
    fn test_family_flags() {
        let v4 = AgentSelection::from(SelectionFlags { ipv4: true, ..Default::default() });
        assert_eq!(v4.family, FamilyFilter::V4Only);
        let v6 = AgentSelection::from(SelectionFlags { ipv6: true, ..Default::default() });
        assert_eq!(v6.family, FamilyFilter::V6Only);
        let both = AgentSelection::from(SelectionFlags { ipv4: true, ipv6: true, ..Default::default() });
        assert_eq!(both.family, FamilyFilter::Both);
    }

    #[test]
    fn test_category_flags() {
        let e = AgentSelection::from(SelectionFlags { enterprise: true, ..Default::default() });
        assert!(e.enterprise && !e.cloud && e.public && e.private);

        let c = AgentSelection::from(SelectionFlags { cloud: true, ..Default::default() });
        assert!(!c.enterprise && c.cloud);

        let pub_only = AgentSelection::from(SelectionFlags { enterprise_public: true, ..Default::default() });
        assert!(pub_only.enterprise && !pub_only.cloud && pub_only.public && !pub_only.private);

        let priv_only = AgentSelection::from(SelectionFlags { enterprise_private: true, ..Default::default() });
        assert!(!priv_only.public && priv_only.private);

        let both = AgentSelection::from(SelectionFlags {
            enterprise_public: true,
            enterprise_private: true,
            ..Default::default()
        });
        assert!(both.public && both.private);

        let mixed = AgentSelection::from(SelectionFlags { enterprise: true, cloud: true, ..Default::default() });
        assert!(mixed.enterprise && mixed.cloud && mixed.public && mixed.private);
    }

    #[test]
    fn test_select_all() {
        let owners = select_owners(&inventory(), &AgentSelection::default(), false).unwrap();
        assert_eq!(
            names(&owners),
            vec!["branch-akl-01", "branch-wlg-cluster", "Sydney, Australia", "Tokyo, Japan"]
        );
        assert_eq!(
            addresses(&owners[0]),
            vec!["10.1.0.11", "10.1.0.12", "10.1.0.13", "203.0.113.10"]
        );
        assert_eq!(
            addresses(&owners[1]),
            vec!["10.2.0.1", "10.2.0.2", "203.0.113.20", "203.0.113.21", "2001:db8:2::1", "2001:db8:2::2"]
        );
        // public duplicate of a private address collapses
        assert_eq!(owners[2].addresses.len(), 4);
    }

    #[test]
    fn test_select_enterprise_public() {
        let selection = AgentSelection::from(SelectionFlags { enterprise_public: true, ..Default::default() });
        let owners = select_owners(&inventory(), &selection, false).unwrap();
        assert_eq!(names(&owners), vec!["branch-akl-01", "branch-wlg-cluster"]);
        assert_eq!(addresses(&owners[0]), vec!["203.0.113.10"]);
        assert_eq!(addresses(&owners[1]), vec!["203.0.113.20", "203.0.113.21"]);
    }

    #[test]
    fn test_select_enterprise_private() {
        let selection = AgentSelection::from(SelectionFlags { enterprise_private: true, ..Default::default() });
        let owners = select_owners(&inventory(), &selection, false).unwrap();
        assert_eq!(addresses(&owners[0]), vec!["10.1.0.11", "10.1.0.12", "10.1.0.13"]);
        assert_eq!(
            addresses(&owners[1]),
            vec!["10.2.0.1", "10.2.0.2", "2001:db8:2::1", "2001:db8:2::2"]
        );
    }

    #[test]
    fn test_select_cloud_v6_drops_empty_owners() {
        let selection = AgentSelection::from(SelectionFlags { cloud: true, ipv6: true, ..Default::default() });
        let owners = select_owners(&inventory(), &selection, false).unwrap();
        assert_eq!(names(&owners), vec!["Sydney, Australia"]);
        assert_eq!(addresses(&owners[0]), vec!["2001:db8:100::1"]);
    }

    #[test]
    fn test_select_strict_input() {
        let inventory =
            read_inventory("src/tests/test_data/agents_test_cache_02.json").expect("Error reading inventory");
        let owners = select_owners(&inventory, &AgentSelection::default(), false).unwrap();
        assert_eq!(addresses(&owners[0]), vec!["10.9.0.1", "10.9.0.2"]);

        let err = select_owners(&inventory, &AgentSelection::default(), true).unwrap_err();
        assert_eq!(err, AddressError::InvalidAddressFormat("not-an-address".to_string()));
    }
}
