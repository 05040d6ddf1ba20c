//! User-submitted symptom reports.
//!
//! Markers come from `markers/US`. Totals combine the regional submission count
//! from `usersubmission/stats/region/{region}` with the national per-symptom
//! counts from `stats/US`.

use tracing::instrument;

use crate::client::RequestExecutor;
use crate::errors::{OutbreaksNearMeError, Result};
use crate::geo::Coordinate;
use crate::model::{FeatureCollection, Properties, Totals};

const MARKERS_ENDPOINT: &str = "markers/US";
const NATIONAL_STATS_ENDPOINT: &str = "stats/US";

/// Locator for user-submitted reports.
#[derive(Clone)]
pub struct UserData {
    executor: RequestExecutor,
}

impl UserData {
    pub(crate) fn new(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Get the properties of the user report nearest to a latitude/longitude.
    ///
    /// # Errors
    ///
    /// [`OutbreaksNearMeError::NoData`] if the API returns no usable markers.
    #[instrument(skip(self))]
    pub async fn get_nearest(&self, latitude: f64, longitude: f64) -> Result<Properties> {
        let markers: FeatureCollection = self.executor.get(MARKERS_ENDPOINT).await?;

        markers
            .into_nearest_properties(Coordinate::new(latitude, longitude))
            .ok_or_else(|| OutbreaksNearMeError::NoData {
                endpoint: MARKERS_ENDPOINT.to_string(),
            })
    }

    /// Get user report totals.
    ///
    /// Both statistics requests run concurrently. If either fails, the other is
    /// dropped mid-flight and the error is returned.
    ///
    /// On a key collision the national `stats/US` value replaces the regional one.
    #[instrument(skip(self))]
    pub async fn get_totals(&self) -> Result<Totals> {
        let region_endpoint = format!(
            "usersubmission/stats/region/{}",
            urlencoding::encode(&self.executor.config().region)
        );

        let (region, national) = tokio::try_join!(
            self.executor.get::<Totals>(&region_endpoint),
            self.executor.get::<Totals>(NATIONAL_STATS_ENDPOINT),
        )?;

        Ok(merge_totals(region, national))
    }
}

/// Shallow union of two statistic mappings; `overrides` wins on collision.
fn merge_totals(mut base: Totals, overrides: Totals) -> Totals {
    base.extend(overrides);
    base
}
