use serde::Serialize;

use crate::{
    model::ForecastResponse,
    normalize::{CurrentConditions, normalize_current},
    projection::{DailyTable, HourlyRow, project_daily, project_hourly},
};

/// Everything one render pass needs, derived from a single response.
///
/// Built fresh on every fetch cycle and handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyRow>,
    pub daily: DailyTable,
}

impl Dashboard {
    pub fn from_response(response: &ForecastResponse) -> Self {
        Self {
            current: normalize_current(&response.current_record()),
            hourly: project_hourly(&response.hourly),
            daily: project_daily(&response.daily),
        }
    }
}
