//! Command-line configuration for the demo host.

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Interactive fetch/CRUD demo against a placeholder REST API
#[derive(Debug, Clone, Parser)]
#[command(name = "fetchdemo")]
#[command(version)]
#[command(about = "Data fetching and CRUD demo against a placeholder REST API", long_about = None)]
pub struct Config {
    /// Base URL of the REST API (use the mock server for offline runs)
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log filter used when RUST_LOG is not set. Logs go to stderr.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Rows rendered per list before the rest is summarized
    #[arg(long, default_value_t = 10)]
    pub max_rows: usize,
}
