//! Core library for the `venlo` weather dashboard.
//!
//! This crate defines:
//! - The Open-Meteo forecast source and a caching client on top of it
//! - Normalization of the two current-conditions layouts
//! - Hourly/daily table projections and the code/bearing lookup tables
//! - Configuration handling
//!
//! Rendering lives in `venlo-cli`; everything here is presentation-free.

pub mod cache;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod lookup;
pub mod model;
pub mod normalize;
pub mod projection;
pub mod source;

pub use client::WeatherClient;
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::FetchError;
pub use lookup::{CompassPoint, ConditionCategory};
pub use model::{Coordinates, ForecastResponse, VENLO};
pub use normalize::CurrentConditions;
pub use projection::{DailyRow, DailyTable, HourlyRow};
pub use source::{ForecastSource, OpenMeteoSource};
