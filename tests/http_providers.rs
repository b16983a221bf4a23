//! HTTP client tests against a local mock of the weather and risk service

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use flightrisk::config::ProvidersConfig;
use flightrisk::presenter::risk_error_text;
use flightrisk::{
    ErrorCode, HttpAssessmentClient, LatLng, RiskCategory, RiskProvider, WeatherProvider,
};
use serde_json::json;

async fn weather(Query(params): Query<HashMap<String, String>>) -> Response {
    let lat: f64 = params.get("lat").and_then(|v| v.parse().ok()).unwrap_or_default();
    if lat == 0.0 {
        // The service reports a missing key with a 200
        return Json(json!({"error": "Weather API key not configured"})).into_response();
    }
    Json(json!({
        "temperature_c": 18.3,
        "wind_speed_kts": 11.0,
        "wind_direction": 240.0,
        "visibility_km": 16.1,
        "station": "KJFK"
    }))
    .into_response()
}

async fn flight_risk(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("iata").map(String::as_str) {
        Some("JFK") => Json(json!({
            "success": true,
            "airport": "JFK",
            "zone": "Northeast",
            "risk_score": 72.4,
            "risk_category": "High Risk",
            "weather_data": {"temperature_c": 18.3, "ceiling_ft": 1200.0},
            "interpretation": {
                "score": 72.4,
                "category": "High Risk",
                "description": "Significant weather issues - Delays likely."
            }
        }))
        .into_response(),
        Some("ERR") => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": "XGBoost model not available",
                "message": "Model failed to load"
            })),
        )
            .into_response(),
        Some("OFF") => Json(json!({"error": "Model offline"})).into_response(),
        Some("BAD") => "not json".into_response(),
        Some("SLOW") => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"zone": "Northeast", "risk_score": 1.0})).into_response()
        }
        _ => (StatusCode::NOT_FOUND, "no such airport").into_response(),
    }
}

async fn spawn_mock() -> String {
    let app = Router::new()
        .route("/api/weather/airport", get(weather))
        .route("/api/flight-risk", get(flight_risk));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: String, timeout_seconds: u32) -> HttpAssessmentClient {
    retrying_client(base_url, timeout_seconds, 0)
}

fn retrying_client(
    base_url: String,
    timeout_seconds: u32,
    max_retries: u32,
) -> HttpAssessmentClient {
    HttpAssessmentClient::new(&ProvidersConfig {
        base_url,
        timeout_seconds,
        max_retries,
    })
    .unwrap()
}

#[tokio::test]
async fn test_weather_success() {
    let client = client(spawn_mock().await, 5);
    let snapshot = client
        .airport_weather(LatLng::new(40.6413, -73.7781))
        .await
        .unwrap();
    assert_eq!(snapshot.temperature_c, Some(18.3));
    assert_eq!(snapshot.wind_direction, Some(240.0));
    assert_eq!(snapshot.ceiling_ft, None);
}

#[tokio::test]
async fn test_weather_error_body_with_ok_status() {
    let client = client(spawn_mock().await, 5);
    let failure = client
        .airport_weather(LatLng::new(0.0, 0.0))
        .await
        .unwrap_err();
    assert_eq!(failure.code, ErrorCode::UpstreamError);
    assert_eq!(
        failure.upstream.as_deref(),
        Some("Weather API key not configured")
    );
}

#[tokio::test]
async fn test_risk_success() {
    let client = client(spawn_mock().await, 5);
    let assessment = client.flight_risk("JFK").await.unwrap();
    assert_eq!(assessment.airport.as_deref(), Some("JFK"));
    assert_eq!(assessment.zone, "Northeast");
    assert_eq!(assessment.category, RiskCategory::High);
    assert_eq!(assessment.reported_category.as_deref(), Some("High Risk"));
    assert_eq!(assessment.weather.unwrap().ceiling_ft, Some(1200.0));
}

#[tokio::test]
async fn test_risk_error_status_keeps_upstream_text() {
    let client = client(spawn_mock().await, 5);
    let failure = client.flight_risk("ERR").await.unwrap_err();
    assert_eq!(failure.code, ErrorCode::HttpStatus);
    assert_eq!(failure.message, "Model failed to load");
    assert_eq!(
        failure.upstream.as_deref(),
        Some("XGBoost model not available")
    );
}

#[tokio::test]
async fn test_risk_plain_error_status() {
    let client = client(spawn_mock().await, 5);
    let failure = client.flight_risk("ZZZ").await.unwrap_err();
    assert_eq!(failure.code, ErrorCode::HttpStatus);
    assert!(failure.message.contains("404"));
    assert!(failure.upstream.is_none());
}

#[tokio::test]
async fn test_risk_error_label_without_message() {
    let client = client(spawn_mock().await, 5);
    let failure = client.flight_risk("OFF").await.unwrap_err();
    assert_eq!(failure.code, ErrorCode::UpstreamError);
    assert_eq!(failure.upstream.as_deref(), Some("Model offline"));
    assert_eq!(failure.message, "Flight risk prediction unavailable");
    assert_eq!(
        risk_error_text(&failure),
        "Model offline: Flight risk prediction unavailable"
    );
}

#[tokio::test]
async fn test_risk_malformed_payload() {
    let client = client(spawn_mock().await, 5);
    let failure = client.flight_risk("BAD").await.unwrap_err();
    assert_eq!(failure.code, ErrorCode::InvalidResponse);
}

#[tokio::test]
async fn test_risk_timeout() {
    let client = client(spawn_mock().await, 1);
    let failure = client.flight_risk("SLOW").await.unwrap_err();
    assert_eq!(failure.code, ErrorCode::Timeout);
}

#[tokio::test]
async fn test_risk_timeout_after_retries() {
    let client = retrying_client(spawn_mock().await, 1, 1);
    let failure = client.flight_risk("SLOW").await.unwrap_err();
    assert_eq!(failure.code, ErrorCode::Timeout);
}

#[tokio::test]
async fn test_unreachable_service() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(format!("http://{addr}"), 5);
    let failure = client.flight_risk("JFK").await.unwrap_err();
    assert_eq!(failure.code, ErrorCode::NetworkError);
}
