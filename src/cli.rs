//! Command-line arguments and logging setup for the binary.

use crate::config;
use crate::inventory::{default_inventory_path, SelectionFlags};
use crate::output::OutputType;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Summarize monitoring agent addresses into subnets, ranges and blocks.
#[derive(Parser, Debug)]
#[command(name = "agent-ip-summary")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Agent inventory JSON file [default: $AGENT_IP_INVENTORY or agents.json]
    #[arg(short = 'i', long = "inventory", value_name = "FILE")]
    pub inventory: Option<String>,

    /// Output type
    #[arg(short = 'o', long = "output", value_enum, default_value = "subnet-strict", ignore_case = true)]
    pub output: OutputType,

    /// Only IPv4 addresses
    #[arg(short = '4')]
    pub ipv4: bool,

    /// Only IPv6 addresses
    #[arg(short = '6')]
    pub ipv6: bool,

    /// Only enterprise agent addresses
    #[arg(short = 'e', long = "enterprise")]
    pub enterprise: bool,

    /// Only cloud agent addresses
    #[arg(short = 'c', long = "cloud")]
    pub cloud: bool,

    /// Only enterprise agent public addresses
    #[arg(long = "e-public")]
    pub enterprise_public: bool,

    /// Only enterprise agent private addresses
    #[arg(long = "e-private")]
    pub enterprise_private: bool,

    /// Annotate list output with the names of the agents covered
    #[arg(short = 'n', long = "name")]
    pub name: bool,

    /// Fail on the first unparseable address instead of skipping it
    #[arg(long = "strict-input")]
    pub strict_input: bool,
}

impl Args {
    pub fn selection_flags(&self) -> SelectionFlags {
        SelectionFlags {
            ipv4: self.ipv4,
            ipv6: self.ipv6,
            enterprise: self.enterprise,
            cloud: self.cloud,
            enterprise_public: self.enterprise_public,
            enterprise_private: self.enterprise_private,
        }
    }

    pub fn inventory_path(&self) -> String {
        self.inventory.clone().unwrap_or_else(default_inventory_path)
    }
}

/// Initialize log4rs from `log4rs.yml`, or log warnings to stderr without it.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(config::LOG_CONFIG_FILE).exists() {
        log4rs::init_file(config::LOG_CONFIG_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config::LOG_CONFIG_FILE))?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let log_config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(log_config)?;
    Ok(())
}
