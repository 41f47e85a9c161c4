//! Current-conditions normalization.
//!
//! Open-Meteo has shipped two layouts for the current snapshot: the `current=`
//! block (`temperature_2m`, `wind_speed_10m`, `weather_code`, ...) and the older
//! `current_weather` block (`temperature`, `windspeed`, `weathercode`, ...).
//! Both are decoded into a [`CurrentShape`] and then converted into one
//! [`CurrentConditions`]. Neither step can fail.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lookup::{CompassPoint, ConditionCategory};

/// Canonical current-conditions record, using the modern field names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    /// `None` when the upstream record does not carry humidity.
    pub relative_humidity_2m: Option<f64>,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: f64,
    pub weather_code: i64,
}

impl CurrentConditions {
    pub fn condition(&self) -> ConditionCategory {
        ConditionCategory::from_code(self.weather_code)
    }

    pub fn wind_compass(&self) -> CompassPoint {
        CompassPoint::from_bearing(self.wind_direction_10m)
    }
}

/// `current=` block.
#[derive(Debug, Clone, PartialEq)]
pub struct ModernCurrent {
    pub temperature_2m: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
    pub weather_code: Option<i64>,
}

/// `current_weather` block. Carries no humidity.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyCurrent {
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
    pub winddirection: Option<f64>,
    pub weathercode: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CurrentShape {
    Modern(ModernCurrent),
    Legacy(LegacyCurrent),
}

impl CurrentShape {
    /// Classify a raw record. It is legacy only when it has `windspeed` and
    /// lacks `wind_speed_10m`; everything else, including an empty record, is
    /// read as modern.
    pub fn detect(record: &Map<String, Value>) -> Self {
        if record.contains_key("windspeed") && !record.contains_key("wind_speed_10m") {
            tracing::debug!("legacy current_weather shape detected");
            Self::Legacy(LegacyCurrent {
                temperature: number(record, "temperature"),
                windspeed: number(record, "windspeed"),
                winddirection: number(record, "winddirection"),
                weathercode: integer(record, "weathercode"),
            })
        } else {
            Self::Modern(ModernCurrent {
                temperature_2m: number(record, "temperature_2m"),
                relative_humidity_2m: number(record, "relative_humidity_2m"),
                wind_speed_10m: number(record, "wind_speed_10m"),
                wind_direction_10m: number(record, "wind_direction_10m"),
                weather_code: integer(record, "weather_code"),
            })
        }
    }
}

impl From<CurrentShape> for CurrentConditions {
    fn from(shape: CurrentShape) -> Self {
        match shape {
            CurrentShape::Modern(m) => CurrentConditions {
                temperature_2m: m.temperature_2m.unwrap_or(0.0),
                relative_humidity_2m: m.relative_humidity_2m,
                wind_speed_10m: m.wind_speed_10m.unwrap_or(0.0),
                wind_direction_10m: m.wind_direction_10m.unwrap_or(0.0),
                weather_code: m.weather_code.unwrap_or(0),
            },
            CurrentShape::Legacy(l) => CurrentConditions {
                temperature_2m: l.temperature.unwrap_or(0.0),
                relative_humidity_2m: None,
                wind_speed_10m: l.windspeed.unwrap_or(0.0),
                wind_direction_10m: l.winddirection.unwrap_or(0.0),
                weather_code: l.weathercode.unwrap_or(0),
            },
        }
    }
}

/// Normalize a raw current-conditions record of either shape.
pub fn normalize_current(record: &Map<String, Value>) -> CurrentConditions {
    CurrentShape::detect(record).into()
}

fn number(record: &Map<String, Value>, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

fn integer(record: &Map<String, Value>, key: &str) -> Option<i64> {
    // Codes sometimes arrive as 3.0.
    record
        .get(key)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
}
