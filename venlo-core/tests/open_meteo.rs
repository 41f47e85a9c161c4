//! Integration tests for the Open-Meteo source and caching client using wiremock.

use chrono::{Duration, Utc};
use venlo_core::{Config, Dashboard, FetchError, ForecastSource, OpenMeteoSource, VENLO, WeatherClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body() -> serde_json::Value {
    let times: Vec<String> = (0..72)
        .map(|h| format!("2024-06-{:02}T{:02}:00", 1 + h / 24, h % 24))
        .collect();
    serde_json::json!({
        "latitude": 51.38,
        "longitude": 6.16,
        "timezone": "Europe/Amsterdam",
        "current": {
            "time": "2024-06-01T14:30",
            "temperature_2m": 17.9,
            "relative_humidity_2m": 64,
            "wind_speed_10m": 13.3,
            "wind_direction_10m": 190,
            "weather_code": 2
        },
        "hourly": {
            "time": times,
            "temperature_2m": vec![15.0; 72],
            "relative_humidity_2m": vec![70; 72],
            "precipitation_probability": vec![10; 72],
            "wind_speed_10m": vec![12.0; 72],
            "wind_direction_10m": vec![180; 72],
            "wind_gusts_10m": vec![25.0; 72]
        },
        "daily": {
            "time": ["2024-06-01", "2024-06-02", "2024-06-03", "2024-06-04",
                     "2024-06-05", "2024-06-06", "2024-06-07"],
            "temperature_2m_max": [20, 21, 22, 19, 18, 17, 20],
            "temperature_2m_min": [10, 11, 12, 9, 8, 7, 10],
            "precipitation_sum": [0, 1.2, 0, 0, 3.4, 0, 0],
            "wind_speed_10m_max": [20, 25, 30, 18, 22, 15, 19],
            "wind_direction_10m_dominant": [180, 200, 220, 240, 260, 280, 300]
        }
    })
}

fn config_for(server: &MockServer) -> Config {
    Config { api_base_url: server.uri(), ..Config::default() }
}

#[tokio::test]
async fn sends_expected_query_and_decodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "51.37"))
        .and(query_param("longitude", "6.1681"))
        .and(query_param("timezone", "Europe/Amsterdam"))
        .and(query_param("forecast_days", "7"))
        .and(query_param(
            "current",
            "temperature_2m,relative_humidity_2m,wind_speed_10m,wind_direction_10m,weather_code",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let source = OpenMeteoSource::new(&config_for(&server)).unwrap();
    let resp = source.fetch(VENLO).await.unwrap();

    assert_eq!(resp.hourly.time.len(), 72);
    assert_eq!(resp.extra.get("timezone"), Some(&serde_json::json!("Europe/Amsterdam")));

    let dash = Dashboard::from_response(&resp);
    assert_eq!(dash.current.relative_humidity_2m, Some(64.0));
    assert_eq!(dash.hourly.len(), 48);
    assert_eq!(dash.daily.rows.len(), 7);
    assert!(dash.daily.wind_max_available);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":true,"reason":"bad"}"#))
        .mount(&server)
        .await;

    let source = OpenMeteoSource::new(&config_for(&server)).unwrap();
    let err = source.fetch(VENLO).await.unwrap_err();

    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("bad"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&server)
        .await;

    let source = OpenMeteoSource::new(&config_for(&server)).unwrap();
    assert!(matches!(source.fetch(VENLO).await, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(forecast_body())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let cfg = Config { timeout_secs: 1, ..config_for(&server) };
    let source = OpenMeteoSource::new(&cfg).unwrap();
    assert!(matches!(source.fetch(VENLO).await, Err(FetchError::Timeout(1))));
}

#[tokio::test]
async fn client_caches_until_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = WeatherClient::from_config(&config_for(&server)).unwrap();
    let t0 = Utc::now();

    let a = client.fetch_at(VENLO, t0).await.unwrap();
    let b = client.fetch_at(VENLO, t0 + Duration::minutes(1)).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    client.refresh();
    client.fetch_at(VENLO, t0 + Duration::minutes(2)).await.unwrap();
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
