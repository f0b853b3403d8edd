//! Service entry point: loads configuration, seeds the store and serves the API.

use std::env;

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employee_directory::api::{AppState, create_router};
use employee_directory::config::ConfigLoader;

const CONFIG_DIR_VAR: &str = "DIRECTORY_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "./config/directory";

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            init_tracing("info");
            error!(path = %config_dir, error = %e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    init_tracing(&config.service().log_level);

    let state = match AppState::seeded(config).await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to seed employee store");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!(
        employees = state.store().employee_count().await,
        "employee store seeded"
    );

    let bind_address = state.config().service().bind_address.clone();
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %bind_address, error = %e, "failed to bind listener");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!(address = %bind_address, "employee directory listening");

    if let Err(e) = axum::serve(listener, create_router(state)).await {
        error!(error = %e, "server terminated");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}
