use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use crate::config::Config;
use crate::controller::AppState;

pub mod config;
pub mod controller;
pub mod error;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod services;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    info!("Starting trip planner backend in {} mode", config.environment);
    if !config.maps_configured() {
        warn!("GOOGLE_MAPS_API_KEY not set, location and place lookups will fail");
    }
    if config.image_search_credentials().is_none() {
        info!("Image search not configured, serving placeholder images");
    }

    let app_state = AppState::new(config)?;
    controller::serve(app_state).await
}
