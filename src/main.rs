use agent_ip_summary::cli::{init_logging, Args};
use clap::Parser;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    let args = Args::parse();
    log::info!("#Start main() {args:?}");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    agent_ip_summary::run(&args, &mut out)?;

    Ok(())
}
