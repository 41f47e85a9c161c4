use crate::{error::FetchError, model::Coordinates, model::ForecastResponse};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

pub use open_meteo::OpenMeteoSource;

/// Something that can produce a raw forecast for a location.
///
/// The only production implementation is [`OpenMeteoSource`]; the seam exists
/// so the caching client can be exercised without a network.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self, coords: Coordinates) -> Result<ForecastResponse, FetchError>;
}
