//! Human-readable labels for WMO condition codes and wind bearings.

use serde::{Deserialize, Serialize};

/// Display category for a WMO weather code.
/// See: https://open-meteo.com/en/docs#weathervariables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Clear,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Rain,
    Sleet,
    Snow,
    Showers,
    Thunderstorm,
    /// Any code outside the known set.
    Unknown,
}

impl ConditionCategory {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Clear,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 61 | 63 | 65 => Self::Rain,
            66 | 67 | 85 | 86 => Self::Sleet,
            71 | 73 | 75 | 77 => Self::Snow,
            80 | 81 | 82 => Self::Showers,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::MainlyClear => "🌤️",
            Self::PartlyCloudy => "⛅",
            Self::Overcast => "☁️",
            Self::Fog => "🌫️",
            Self::Rain => "🌧️",
            Self::Sleet => "🌨️",
            Self::Snow => "❄️",
            Self::Showers => "🌦️",
            Self::Thunderstorm => "⛈️",
            Self::Unknown => "🌡️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Onbewolkt",
            Self::MainlyClear => "Overwegend helder",
            Self::PartlyCloudy => "Half bewolkt",
            Self::Overcast => "Bewolkt",
            Self::Fog => "Mist",
            Self::Rain => "Regen",
            Self::Sleet => "Natte sneeuw",
            Self::Snow => "Sneeuw",
            Self::Showers => "Buien",
            Self::Thunderstorm => "Onweer",
            Self::Unknown => "Onbekend",
        }
    }
}

/// One of the 16 compass points, 22.5° apart, starting at north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompassPoint {
    N,
    Nno,
    No,
    Ono,
    O,
    Ozo,
    Zo,
    Zzo,
    Z,
    Zzw,
    Zw,
    Wzw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassPoint {
    const ALL: [CompassPoint; 16] = [
        Self::N,
        Self::Nno,
        Self::No,
        Self::Ono,
        Self::O,
        Self::Ozo,
        Self::Zo,
        Self::Zzo,
        Self::Z,
        Self::Zzw,
        Self::Zw,
        Self::Wzw,
        Self::W,
        Self::Wnw,
        Self::Nw,
        Self::Nnw,
    ];

    pub const fn all() -> &'static [CompassPoint] {
        &Self::ALL
    }

    /// Nearest compass point for a bearing in degrees.
    ///
    /// Any finite bearing is accepted; values outside `[0, 360)` wrap. Halfway
    /// bearings round away from zero, so 11.25° is NNO.
    pub fn from_bearing(degrees: f64) -> Self {
        let sector = (degrees / 22.5).round() as i64;
        Self::ALL[sector.rem_euclid(16) as usize]
    }

    /// Dutch abbreviation (O = oost, Z = zuid).
    pub fn label(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Nno => "NNO",
            Self::No => "NO",
            Self::Ono => "ONO",
            Self::O => "O",
            Self::Ozo => "OZO",
            Self::Zo => "ZO",
            Self::Zzo => "ZZO",
            Self::Z => "Z",
            Self::Zzw => "ZZW",
            Self::Zw => "ZW",
            Self::Wzw => "WZW",
            Self::W => "W",
            Self::Wnw => "WNW",
            Self::Nw => "NW",
            Self::Nnw => "NNW",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
