//! WebServer process entry point
//!
//! Serves key officer lookups over HTTP from the on-disk source caches.

use clap::Parser;
use shared::{CacheConfig, ProcessId, logging, process_info};
use std::net::SocketAddr;
use std::path::PathBuf;

use officers::RealCacheReader;
use webserver::{WebServer, WebServerError, WebServerResult};

/// Command line arguments; flags fall back to environment variables
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP front end for key officer lookups")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Directory holding the source cache files
    #[arg(long, env = "KEY_OFFICERS_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); falls back to LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// Require this value in the x-api-key header
    #[arg(long, env = "KEY_OFFICERS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // .env has to be loaded before clap reads env fallbacks
    let _ = dotenv::dotenv();
    let args = Args::parse();

    // Initialize process ID singleton for webserver
    ProcessId::init_webserver();
    logging::init_tracing_with_level(args.log_level.as_deref());

    let mut config = CacheConfig::from_env()?;
    if let Some(cache_dir) = args.cache_dir {
        config = config.with_cache_dir(cache_dir);
    }

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid bind address: {e}")))?;

    logging::log_startup(ProcessId::current(), &format!("WebServer on {http_addr}"));
    process_info!(
        ProcessId::current(),
        "📁 Reading caches from {} (WR: {}, PDS: {})",
        config.cache_dir().display(),
        config.world_registry_file,
        config.pds_file
    );

    let webserver = WebServer::new(http_addr, args.api_key, RealCacheReader::new(config));
    webserver.run().await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
