//! Client configuration.

use std::time::Duration;

/// Base URL for the Outbreaks Near Me API.
pub const DEFAULT_BASE_URL: &str = "https://outbreaksnearme.org/api";

/// Region used for the regional user-submission count.
pub const DEFAULT_REGION: &str = "NOA";

/// Request timeout applied to sessions the client creates itself.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings shared by every request a [`Client`](crate::Client) makes.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Versioned API root; endpoint paths are appended after a `/`.
    pub base_url: String,

    /// Region code for `usersubmission/stats/region/{region}`.
    pub region: String,

    /// Timeout for self-owned sessions. Injected sessions keep their own settings.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Point the client at a different API root (for testing).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
