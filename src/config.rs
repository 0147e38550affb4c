//! Application constants and environment configuration.

/// Widest IPv4 subnet tried when summarizing (/24).
pub const V4_MIN_PARENT_LEN: u8 = 24;
/// IPv6 loose subnets are always /64.
pub const V6_LOOSE_PREFIX_LEN: u8 = 64;
/// Positions looked ahead per IPv6 loose subnet step.
pub const V6_LOOSE_LOOKAHEAD: usize = 1000;
/// Loose IPv4 ranges tolerate this many addresses of gap per member.
pub const LOOSE_RANGE_STEP: u128 = 255;

/// Environment variable naming the inventory file (read after `.env`).
pub const INVENTORY_ENV: &str = "AGENT_IP_INVENTORY";
pub const DEFAULT_INVENTORY_FILE: &str = "agents.json";
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// List annotations: `<aggregate padded> # name1; name2`
pub const LIST_COMMENT_CHAR: &str = "#";
pub const LIST_SEPARATOR_CHAR: &str = ";";
pub const CSV_SEPARATOR_CHAR: &str = ",";

/// Pad widths for annotated lists.
pub const PAD_ADDRESS: usize = 39;
pub const PAD_SUBNET: usize = 39;
pub const PAD_RANGE: usize = 59;
pub const PAD_BLOCK: usize = 46;
