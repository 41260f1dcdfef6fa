//! GrubDash API server
//!
//! ```text
//! grubdash [--env dev] [--port 5000]
//! ```
//!
//! Reads `config/{env}.yaml`, installs logging, loads the optional seed
//! file and serves the HTTP API until Ctrl-C.

use std::sync::Arc;

use anyhow::Context;

use grubdash::config::AppConfig;
use grubdash::gateway;
use grubdash::seed::SeedData;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    let _log_guard = grubdash::logging::init_logging(&app_config)?;

    tracing::info!("Starting GrubDash in {} mode", env);

    let seed = match &app_config.seed_file {
        Some(path) => {
            tracing::info!("Loading seed data from {}", path);
            SeedData::load(path).with_context(|| format!("seed file {}", path))?
        }
        None => SeedData::default(),
    };
    let state = seed.into_state()?;
    tracing::info!(
        "Stores ready: {} dishes, {} orders",
        state.dishes.len(),
        state.orders.len()
    );

    gateway::run_server(&app_config.gateway, Arc::new(state)).await?;
    Ok(())
}
