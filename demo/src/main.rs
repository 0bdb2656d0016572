//! Interactive data fetching and CRUD demo.
//!
//! The host side of the host-does-IO split: `fetchdemo-core` owns every piece
//! of view state and hands out `Fetch` effects; this binary executes them with
//! reqwest, reads commands from stdin and prints the three sections.
//!
//! - config: command-line flags (clap)
//! - transport: reqwest round-trips
//! - command: stdin line parser
//! - render: plain-text screen
//! - app: select! loop tying them together

mod app;
mod command;
mod config;
mod render;
mod transport;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::App;
use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never interleave with the rendered screen.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.as_str().into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(base_url = %config.base_url, "starting");
    App::new(&config)?.run().await
}
