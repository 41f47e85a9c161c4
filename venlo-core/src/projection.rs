//! Row-oriented views over the hourly and daily record-of-arrays sections.

use serde::Serialize;

use crate::lookup::CompassPoint;
use crate::model::{DailySection, HourlySection};

/// Number of hourly points shown on the dashboard.
pub const HOURLY_HORIZON: usize = 48;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRow {
    /// `YYYY-MM-DD`, absent when the raw timestamp had no date part.
    pub date: Option<String>,
    /// `HH:MM`, or the raw timestamp when it is too short to split.
    pub time: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_gusts: Option<f64>,
    pub wind_direction: Option<CompassPoint>,
    pub precipitation_probability: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRow {
    pub date: String,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub precipitation_sum: Option<f64>,
    pub wind_speed_max: Option<f64>,
    pub wind_direction: Option<CompassPoint>,
}

/// Daily rows plus whether the wind-maximum series exists at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTable {
    pub rows: Vec<DailyRow>,
    pub wind_max_available: bool,
}

/// Split `2024-06-01T14:30` into (`Some("2024-06-01")`, `"14:30"`).
///
/// Strings of 10 characters or fewer are returned unchanged as the time.
pub fn split_timestamp(raw: &str) -> (Option<String>, String) {
    if raw.chars().count() > 10 {
        let date = raw.chars().take(10).collect();
        let time = raw.chars().skip(11).take(5).collect();
        (Some(date), time)
    } else {
        (None, raw.to_string())
    }
}

pub fn project_hourly(section: &HourlySection) -> Vec<HourlyRow> {
    let precip = section.precipitation_probability.as_deref().unwrap_or(&[]);

    section
        .time
        .iter()
        .take(HOURLY_HORIZON)
        .enumerate()
        .map(|(i, raw)| {
            let (date, time) = split_timestamp(raw);
            HourlyRow {
                date,
                time,
                temperature: at(&section.temperature_2m, i),
                humidity: at(&section.relative_humidity_2m, i),
                wind_speed: at(&section.wind_speed_10m, i),
                wind_gusts: at(&section.wind_gusts_10m, i),
                wind_direction: at(&section.wind_direction_10m, i).map(CompassPoint::from_bearing),
                precipitation_probability: at(precip, i),
            }
        })
        .collect()
}

pub fn project_daily(section: &DailySection) -> DailyTable {
    let wind_max = section.wind_speed_10m_max.as_deref().unwrap_or(&[]);

    let rows = section
        .time
        .iter()
        .enumerate()
        .map(|(i, date)| DailyRow {
            date: date.clone(),
            temperature_max: at(&section.temperature_2m_max, i),
            temperature_min: at(&section.temperature_2m_min, i),
            precipitation_sum: at(&section.precipitation_sum, i),
            wind_speed_max: at(wind_max, i),
            wind_direction: at(&section.wind_direction_10m_dominant, i)
                .map(CompassPoint::from_bearing),
        })
        .collect();

    DailyTable { rows, wind_max_available: !wind_max.is_empty() }
}

fn at(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}
