//! Command line entry point for one-shot lookups
//!
//! Prints the lookup payload as JSON on stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use officers::{DEFAULT_TOP_N, KeyOfficersService, RealCacheReader};
use shared::{CacheConfig, ProcessId, logging, process_debug};

/// Look up cached key officers for a company
#[derive(Parser, Debug)]
#[command(name = "key-officers")]
#[command(about = "Merge key officer records from the World Registry and PDS caches")]
struct Args {
    /// Company key as stored in the caches
    #[arg(required_unless_present = "ping")]
    company: Option<String>,

    /// Maximum rows per source list (the combined list gets twice as many)
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Directory holding the source cache files
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); falls back to LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// Print the health check literal and exit
    #[arg(long)]
    ping: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    ProcessId::init_cli();
    logging::init_tracing_with_level(args.log_level.as_deref());

    let mut config = CacheConfig::from_env().context("invalid cache configuration")?;
    if let Some(cache_dir) = args.cache_dir {
        config = config.with_cache_dir(cache_dir);
    }
    process_debug!(ProcessId::current(), "📁 Cache directory: {}", config.cache_dir().display());

    let service = KeyOfficersService::new(RealCacheReader::new(config));

    if args.ping {
        println!("{}", service.ping());
        return Ok(());
    }

    let company = args.company.context("company is required")?;
    let response = service.get_key_officers(&company, args.top_n).await;
    let json = serde_json::to_string_pretty(&response).context("failed to serialize response")?;
    println!("{json}");

    Ok(())
}
