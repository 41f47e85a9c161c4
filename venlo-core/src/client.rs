use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::{
    cache::FreshnessCache,
    config::Config,
    error::FetchError,
    model::{Coordinates, ForecastResponse},
    source::{ForecastSource, OpenMeteoSource},
};

/// Forecast client with a freshness window.
///
/// Repeated fetches for the same coordinates inside the window are served from
/// memory without touching the source. [`WeatherClient::refresh`] drops the
/// cached entry so the next fetch goes to the network. Failed fetches are
/// never cached.
#[derive(Debug)]
pub struct WeatherClient<S> {
    source: S,
    cache: FreshnessCache<Arc<ForecastResponse>>,
}

impl WeatherClient<OpenMeteoSource> {
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(OpenMeteoSource::new(config)?, config.cache_ttl()))
    }
}

impl<S: ForecastSource> WeatherClient<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self { source, cache: FreshnessCache::new(ttl) }
    }

    pub async fn fetch(&mut self, coords: Coordinates) -> Result<Arc<ForecastResponse>, FetchError> {
        self.fetch_at(coords, Utc::now()).await
    }

    /// Like [`fetch`](Self::fetch) with an explicit clock reading.
    pub async fn fetch_at(
        &mut self,
        coords: Coordinates,
        now: DateTime<Utc>,
    ) -> Result<Arc<ForecastResponse>, FetchError> {
        if let Some(hit) = self.cache.get(coords, now) {
            tracing::debug!("forecast cache hit");
            return Ok(hit);
        }

        tracing::debug!("forecast cache miss");
        let response = match self.source.fetch(coords).await {
            Ok(r) => Arc::new(r),
            Err(e) => {
                tracing::warn!(error = %e, "forecast fetch failed");
                return Err(e);
            }
        };

        self.cache.insert(coords, Arc::clone(&response), now);
        Ok(response)
    }

    /// Forget the cached forecast.
    pub fn refresh(&mut self) {
        tracing::debug!("forecast cache invalidated");
        self.cache.invalidate();
    }

    /// When the currently cached forecast was fetched.
    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        self.cache.cached_at()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
