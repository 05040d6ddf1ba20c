//! Outbreaks Near Me demo - prints the data nearest to a coordinate.
//!
//! # Environment
//!
//! - `OUTBREAKS_API_URL` - API root (default: the public API)
//! - `OUTBREAKS_REGION` - region for the user-submission count (default: `NOA`)
//! - `OUTBREAKS_TIMEOUT_SECS` - request timeout in seconds (default: 10)
//! - `OUTBREAKS_LATITUDE` / `OUTBREAKS_LONGITUDE` - query point (default: Denver, CO)

use std::env;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use outbreaksnearme::config::{DEFAULT_BASE_URL, DEFAULT_REGION, DEFAULT_TIMEOUT};
use outbreaksnearme::{Client, ClientConfig, OutbreaksNearMeError};

/// Default query latitude if not specified via environment variable.
const DEFAULT_LATITUDE: f64 = 39.7251035;

/// Default query longitude if not specified via environment variable.
const DEFAULT_LONGITUDE: f64 = -104.99918;

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("outbreaksnearme=info".parse()?))
        .init();

    let base_url = env::var("OUTBREAKS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let region = env::var("OUTBREAKS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
    let timeout = env_parse::<u64>("OUTBREAKS_TIMEOUT_SECS")
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);
    let latitude = env_parse("OUTBREAKS_LATITUDE").unwrap_or(DEFAULT_LATITUDE);
    let longitude = env_parse("OUTBREAKS_LONGITUDE").unwrap_or(DEFAULT_LONGITUDE);

    info!(base_url = %base_url, region = %region, latitude, longitude, "Querying Outbreaks Near Me");

    let config = ClientConfig::default()
        .with_base_url(&base_url)
        .with_region(&region)
        .with_timeout(timeout);

    // One session for all three calls.
    let session = reqwest::Client::builder().timeout(timeout).build()?;
    let client = Client::with_config(config, Some(session));

    if let Err(e) = run(&client, latitude, longitude).await {
        error!(error = %e, "Failed to fetch outbreak data");
        return Err(e.into());
    }

    Ok(())
}

async fn run(client: &Client, latitude: f64, longitude: f64) -> Result<(), OutbreaksNearMeError> {
    let nearest_user_data = client.user_data.get_nearest(latitude, longitude).await?;
    info!(data = ?nearest_user_data, "Nearest user data");

    let user_totals = client.user_data.get_totals().await?;
    info!(data = ?user_totals, "User data totals");

    let nearest_cdc_data = client.cdc_data.get_nearest(latitude, longitude).await?;
    info!(data = ?nearest_cdc_data, "Nearest CDC data");

    Ok(())
}
