//! Plain-text views over a [`Dashboard`].

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use venlo_core::{
    CompassPoint, Coordinates, CurrentConditions, Dashboard, DailyTable, HourlyRow, VENLO,
};

use crate::chart::{bar, sparkline};

/// Length of the wind indicator drawn from the map marker, in degrees.
const WIND_INDICATOR_LENGTH: f64 = 0.02;
const BAR_WIDTH: usize = 30;

pub fn now(current: &CurrentConditions) -> String {
    let condition = current.condition();
    let mut out = String::new();
    let _ = writeln!(out, "📍 Huidig weer in Venlo");
    let _ = writeln!(out, "  Temperatuur       {:.1}°C", current.temperature_2m);
    let _ = writeln!(out, "  Luchtvochtigheid  {}", humidity(current.relative_humidity_2m));
    let _ = writeln!(out, "  Windsnelheid      {:.1} km/h", current.wind_speed_10m);
    let _ = writeln!(
        out,
        "  Windrichting      {} ({:.0}°)",
        current.wind_compass(),
        current.wind_direction_10m
    );
    let _ = writeln!(out, "  Weertype          {} {}", condition.glyph(), condition.description());
    out
}

pub fn hourly(rows: &[HourlyRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Uurlijkse verwachting ({} uur)", rows.len());
    let _ = writeln!(
        out,
        "{:<10}  {:<5}  {:>9}  {:>11}  {:>12}  {:>10}",
        "Datum", "Tijd", "Temp (°C)", "Wind (km/h)", "Windrichting", "Neerslag %"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<10}  {:<5}  {:>9}  {:>11}  {:>12}  {:>10}",
            row.date.as_deref().unwrap_or(""),
            row.time,
            number(row.temperature, 1),
            number(row.wind_speed, 1),
            compass(row.wind_direction),
            number(row.precipitation_probability, 0),
        );
    }

    let temps: Vec<_> = rows.iter().map(|r| r.temperature).collect();
    let winds: Vec<_> = rows.iter().map(|r| r.wind_speed).collect();
    let _ = writeln!(out);
    let _ = writeln!(out, "Temperatuur (°C)     {}", sparkline(&temps));
    let _ = writeln!(out, "Windsnelheid (km/h)  {}", sparkline(&winds));
    out
}

pub fn daily(table: &DailyTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}-dagen verwachting", table.rows.len());
    let _ = writeln!(
        out,
        "{:<10}  {:>8}  {:>8}  {:>13}  {:>15}  {:>12}",
        "Datum", "Max (°C)", "Min (°C)", "Neerslag (mm)", "Max wind (km/h)", "Windrichting"
    );
    for row in &table.rows {
        let _ = writeln!(
            out,
            "{:<10}  {:>8}  {:>8}  {:>13}  {:>15}  {:>12}",
            row.date,
            number(row.temperature_max, 1),
            number(row.temperature_min, 1),
            number(row.precipitation_sum, 1),
            number(row.wind_speed_max, 1),
            compass(row.wind_direction),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Temperatuur (°C)");
    let (temp_lo, temp_hi) = series_range(
        table.rows.iter().flat_map(|r| [r.temperature_max, r.temperature_min]),
    );
    for row in &table.rows {
        let _ = writeln!(
            out,
            "{:<10}  max {}",
            row.date,
            bar_line(row.temperature_max, temp_lo, temp_hi)
        );
        let _ = writeln!(
            out,
            "{:<10}  min {}",
            "",
            bar_line(row.temperature_min, temp_lo, temp_hi)
        );
    }

    let _ = writeln!(out);
    if table.wind_max_available {
        let _ = writeln!(out, "Max wind (km/h)");
        let (_, wind_hi) = series_range(table.rows.iter().map(|r| r.wind_speed_max));
        for row in &table.rows {
            let _ = writeln!(out, "{:<10}  {}", row.date, bar_line(row.wind_speed_max, 0.0, wind_hi));
        }
    } else {
        let _ = writeln!(out, "Windgegevens niet beschikbaar voor dagelijkse data");
    }
    out
}

pub fn map(current: &CurrentConditions) -> String {
    let end = VENLO.wind_indicator_end(current.wind_direction_10m, WIND_INDICATOR_LENGTH);
    let mut out = String::new();
    let _ = writeln!(out, "Interactieve kaart - Venlo");
    let _ = writeln!(out, "  {}", osm_link(VENLO));
    let _ = writeln!(
        out,
        "  Marker: Venlo - {:.1}°C, wind {:.1} km/h {}, luchtvochtigheid {}",
        current.temperature_2m,
        current.wind_speed_10m,
        current.wind_compass(),
        humidity(current.relative_humidity_2m),
    );
    let _ = writeln!(
        out,
        "  Windlijn: ({:.4}, {:.4}) -> ({:.4}, {:.4})",
        VENLO.latitude, VENLO.longitude, end.latitude, end.longitude
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "📍 Coördinaten Venlo");
    let _ = writeln!(out, "  Breedtegraad (Noord)  {}° N", VENLO.latitude);
    let _ = writeln!(out, "  Lengtegraad (Oost)    {}° E", VENLO.longitude);
    let _ = writeln!(out, "  Decimaal              {:.4}, {:.4}", VENLO.latitude, VENLO.longitude);
    let _ = writeln!(out, "  DMS                   {}", VENLO.to_dms());
    out
}

pub fn radar(url: &str) -> String {
    format!(
        "🌧️ Neerslagradar (Nederland)\n  Bron: Buienradar (radar overzicht Nederland/België)\n  {url}\n"
    )
}

pub fn footer(updated: DateTime<Local>) -> String {
    format!(
        "Data via Open-Meteo.com (https://open-meteo.com/) • Laatste update: {}",
        updated.format("%d-%m-%Y %H:%M")
    )
}

/// Everything except the radar, in dashboard order.
pub fn full(dashboard: &Dashboard) -> String {
    [now(&dashboard.current), hourly(&dashboard.hourly), daily(&dashboard.daily)].join("\n")
}

fn osm_link(at: Coordinates) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=13/{lat}/{lon}",
        lat = at.latitude,
        lon = at.longitude
    )
}

fn humidity(value: Option<f64>) -> String {
    value.map_or_else(|| "–".to_string(), |h| format!("{h:.0}%"))
}

fn number(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "–".to_string(), |v| format!("{v:.precision$}"))
}

fn compass(point: Option<CompassPoint>) -> &'static str {
    point.map_or("–", |p| p.label())
}

/// Lowest and highest known value; `(0.0, 0.0)` when nothing is known.
fn series_range(values: impl Iterator<Item = Option<f64>>) -> (f64, f64) {
    values
        .flatten()
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .unwrap_or((0.0, 0.0))
}

/// Bar followed by the value, or a dash when the value is missing.
fn bar_line(value: Option<f64>, lo: f64, hi: f64) -> String {
    match value {
        Some(v) => format!("{} {v:.1}", bar(v, lo, hi, BAR_WIDTH)),
        None => "–".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use venlo_core::{DailyRow, ForecastResponse};

    fn conditions(humidity: Option<f64>) -> CurrentConditions {
        CurrentConditions {
            temperature_2m: 12.46,
            relative_humidity_2m: humidity,
            wind_speed_10m: 20.0,
            wind_direction_10m: 90.0,
            weather_code: 3,
        }
    }

    #[test]
    fn now_shows_unknown_humidity() {
        let text = now(&conditions(None));
        assert!(text.contains("12.5°C"));
        assert!(text.contains("Luchtvochtigheid  –"));
        assert!(text.contains("O (90°)"));
        assert!(text.contains("☁️ Bewolkt"));

        assert!(now(&conditions(Some(81.0))).contains("81%"));
    }

    #[test]
    fn daily_without_wind_max_shows_notice() {
        let table = DailyTable {
            rows: vec![DailyRow {
                date: "2024-06-01".into(),
                temperature_max: Some(20.0),
                temperature_min: Some(10.0),
                precipitation_sum: Some(0.0),
                wind_speed_max: None,
                wind_direction: Some(CompassPoint::Zw),
            }],
            wind_max_available: false,
        };

        let text = daily(&table);
        assert!(text.contains("Windgegevens niet beschikbaar"));
        assert!(!text.contains("Max wind (km/h)\n"));
    }

    #[test]
    fn daily_with_wind_max_draws_bars() {
        let table = DailyTable {
            rows: vec![DailyRow {
                date: "2024-06-01".into(),
                temperature_max: Some(20.0),
                temperature_min: Some(10.0),
                precipitation_sum: Some(1.2),
                wind_speed_max: Some(25.0),
                wind_direction: None,
            }],
            wind_max_available: true,
        };

        let text = daily(&table);
        assert!(text.contains("Max wind (km/h)\n2024-06-01  ██████"));
        assert!(!text.contains("niet beschikbaar"));
    }

    #[test]
    fn daily_chart_draws_frost_days() {
        let table = DailyTable {
            rows: vec![DailyRow {
                date: "2024-01-10".into(),
                temperature_max: Some(-1.0),
                temperature_min: Some(-6.0),
                precipitation_sum: Some(0.0),
                wind_speed_max: None,
                wind_direction: None,
            }],
            wind_max_available: false,
        };

        let text = daily(&table);
        let max_line = text.lines().find(|l| l.starts_with("2024-01-10  max")).unwrap();
        let min_line = text.lines().find(|l| l.trim_start().starts_with("min")).unwrap();
        assert!(max_line.contains('█') && max_line.ends_with("-1.0"));
        assert!(min_line.contains('█') && min_line.ends_with("-6.0"));
        assert!(max_line.matches('█').count() > min_line.matches('█').count());
    }

    #[test]
    fn daily_chart_marks_missing_temperature() {
        let table = DailyTable {
            rows: vec![DailyRow {
                date: "2024-01-11".into(),
                temperature_max: Some(3.0),
                temperature_min: None,
                precipitation_sum: None,
                wind_speed_max: None,
                wind_direction: None,
            }],
            wind_max_available: false,
        };

        let text = daily(&table);
        let min_line = text.lines().find(|l| l.trim_start().starts_with("min")).unwrap();
        assert_eq!(min_line.trim_start(), "min –");
    }

    #[test]
    fn hourly_lists_every_row() {
        let dash = Dashboard::from_response(
            &serde_json::from_value::<ForecastResponse>(serde_json::json!({
                "hourly": {
                    "time": ["2024-06-01T14:00", "2024-06-01T15:00", "16:00"],
                    "temperature_2m": [14.0, 15.0, 16.0],
                    "wind_direction_10m": [0, 180, null]
                }
            }))
            .unwrap(),
        );

        let text = hourly(&dash.hourly);
        assert!(text.starts_with("Uurlijkse verwachting (3 uur)"));
        assert!(text.contains("2024-06-01  15:00"));
        assert!(text.contains("Temperatuur (°C)     ▁▅█"));
    }

    #[test]
    fn map_includes_dms_and_indicator() {
        let text = map(&conditions(Some(50.0)));
        assert!(text.contains("51°22'12\" N, 6°10'5\" E"));
        assert!(text.contains("51.3700, 6.1681"));
        assert!(text.contains("Windlijn"));
    }

    #[test]
    fn footer_uses_dutch_date_order() {
        let at = Local.with_ymd_and_hms(2024, 6, 1, 9, 5, 0).unwrap();
        assert!(footer(at).ends_with("Laatste update: 01-06-2024 09:05"));
    }
}
