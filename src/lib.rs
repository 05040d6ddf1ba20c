//! Outbreaks Near Me - a client for public-health outbreak data.
//!
//! # Overview
//!
//! Fetches user-submitted symptom reports and CDC county statistics from the
//! Outbreaks Near Me API, and finds the marker geographically nearest to a
//! given coordinate.
//!
//! ```ignore
//! let client = Client::new();
//! let nearest = client.user_data.get_nearest(40.7152, -73.9877).await?;
//! let totals = client.user_data.get_totals().await?;
//! let county = client.cdc_data.get_nearest(40.7152, -73.9877).await?;
//! ```
//!
//! # Modules
//!
//! - [`client`]: Client entry point and request executor
//! - [`config`]: Base URL, region, and timeout settings
//! - [`errors`]: Classified request and no-data errors
//! - [`geo`]: Haversine distance
//! - [`model`]: Feature collections and nearest-marker search
//! - [`user`]: User report locator and totals
//! - [`cdc`]: CDC county locator

pub mod cdc;
pub mod client;
pub mod config;
pub mod errors;
pub mod geo;
pub mod model;
pub mod user;

pub use client::{Client, RequestExecutor};
pub use config::ClientConfig;
pub use errors::{OutbreaksNearMeError, RequestError, Result};
pub use geo::{Coordinate, haversine};
pub use model::{Feature, FeatureCollection, Properties, Totals};
