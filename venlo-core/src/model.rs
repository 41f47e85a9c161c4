use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A fixed point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Venlo city hall. The dashboard only ever shows this location.
pub const VENLO: Coordinates = Coordinates { latitude: 51.3700, longitude: 6.1681 };

impl Coordinates {
    /// Degrees-minutes-seconds rendering, e.g. `51°22'12" N, 6°10'5" E`.
    pub fn to_dms(&self) -> String {
        let lat_hemi = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let lon_hemi = if self.longitude >= 0.0 { 'E' } else { 'W' };
        format!("{} {lat_hemi}, {} {lon_hemi}", dms(self.latitude), dms(self.longitude))
    }

    /// End point of a short line starting here, pointing along `270° - bearing`.
    ///
    /// Used to draw the wind indicator next to the map marker.
    pub fn wind_indicator_end(&self, bearing: f64, length: f64) -> Coordinates {
        let rad = (270.0 - bearing).to_radians();
        Coordinates {
            latitude: self.latitude + length * rad.cos(),
            longitude: self.longitude + length * rad.sin(),
        }
    }
}

fn dms(value: f64) -> String {
    let total = (value.abs() * 3600.0).round() as u64;
    let (degrees, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    format!("{degrees}°{minutes}'{seconds}\"")
}

/// Raw Open-Meteo forecast payload.
///
/// `current` and `current_weather` are kept as plain JSON objects because the
/// two API generations disagree on field names; see [`crate::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<Map<String, Value>>,

    /// Legacy `current_weather=true` block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weather: Option<Map<String, Value>>,

    #[serde(default)]
    pub hourly: HourlySection,

    #[serde(default)]
    pub daily: DailySection,

    /// Everything else the API sends (units, elevation, timezone, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ForecastResponse {
    /// The current-conditions record: `current` when present and non-empty,
    /// otherwise `current_weather`, otherwise an empty record.
    pub fn current_record(&self) -> Map<String, Value> {
        self.current
            .as_ref()
            .filter(|m| !m.is_empty())
            .or(self.current_weather.as_ref())
            .cloned()
            .unwrap_or_default()
    }
}

/// Hourly record-of-arrays. All arrays are index-aligned with `time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySection {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_probability: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub wind_speed_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_direction_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_gusts_10m: Vec<Option<f64>>,
}

/// Daily record-of-arrays. All arrays are index-aligned with `time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySection {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_sum: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed_10m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub wind_direction_10m_dominant: Vec<Option<f64>>,
}
