//! CDC county-level statistics.
//!
//! Markers come from `nonuserstats/US`; each carries confirmed/death counts,
//! incidence rates, and display colors for one county. There is no totals
//! endpoint for this data.

use tracing::instrument;

use crate::client::RequestExecutor;
use crate::errors::{OutbreaksNearMeError, Result};
use crate::geo::Coordinate;
use crate::model::{FeatureCollection, Properties};

const MARKERS_ENDPOINT: &str = "nonuserstats/US";

/// Locator for CDC-sourced county data.
#[derive(Clone)]
pub struct CdcData {
    executor: RequestExecutor,
}

impl CdcData {
    pub(crate) fn new(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Get the properties of the county marker nearest to a latitude/longitude.
    #[instrument(skip(self))]
    pub async fn get_nearest(&self, latitude: f64, longitude: f64) -> Result<Properties> {
        let markers: FeatureCollection = self.executor.get(MARKERS_ENDPOINT).await?;

        markers
            .into_nearest_properties(Coordinate::new(latitude, longitude))
            .ok_or_else(|| OutbreaksNearMeError::NoData {
                endpoint: MARKERS_ENDPOINT.to_string(),
            })
    }
}
