use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::Config,
    error::FetchError,
    model::{Coordinates, ForecastResponse},
};

use super::ForecastSource;

pub const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,precipitation_probability,wind_speed_10m,wind_direction_10m,wind_gusts_10m";
pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,wind_speed_10m_max,wind_direction_10m_dominant";
pub const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,wind_direction_10m,weather_code";

#[derive(Debug, Clone)]
pub struct OpenMeteoSource {
    http: Client,
    base_url: String,
    timezone: String,
    forecast_days: u8,
    timeout_secs: u64,
}

impl OpenMeteoSource {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timezone: config.timezone.clone(),
            forecast_days: config.forecast_days,
            timeout_secs: config.timeout_secs,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/forecast", self.base_url)
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout_secs)
        } else {
            FetchError::Transport(err)
        }
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoSource {
    async fn fetch(&self, coords: Coordinates) -> Result<ForecastResponse, FetchError> {
        tracing::info!(lat = coords.latitude, lon = coords.longitude, "requesting Open-Meteo forecast");

        let res = self
            .http
            .get(self.endpoint())
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("timezone", self.timezone.clone()),
                ("forecast_days", self.forecast_days.to_string()),
            ])
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
