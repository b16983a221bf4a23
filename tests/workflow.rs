//! End-to-end tests for search, markers and selection

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use flightrisk::error::ErrorCode;
use flightrisk::map::{HeadlessView, MapProvider, SELECTION_ZOOM};
use flightrisk::presenter::{RiskPanel, WeatherPanel};
use flightrisk::providers::ProviderResult;
use flightrisk::selection::{FetchOutcome, FetchResult};
use flightrisk::{
    AirportIndex, App, AppEvent, HeadlessMapProvider, LatLng, ProviderFailure, RiskAssessment,
    RiskProvider, Update, WeatherProvider, WeatherSnapshot,
};
use rstest::rstest;

struct FakeWeather {
    fail: bool,
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn airport_weather(&self, position: LatLng) -> ProviderResult<WeatherSnapshot> {
        if self.fail {
            return Err(ProviderFailure::new(ErrorCode::HttpStatus, "HTTP 500"));
        }
        Ok(WeatherSnapshot {
            temperature_c: Some(position.lat / 2.0),
            wind_speed_kts: Some(8.0),
            wind_direction: Some(270.0),
            ..WeatherSnapshot::default()
        })
    }
}

/// Answers JFK slowly and everything else immediately
struct FakeRisk;

#[async_trait]
impl RiskProvider for FakeRisk {
    async fn flight_risk(&self, iata: &str) -> ProviderResult<RiskAssessment> {
        let score = match iata {
            "JFK" => {
                tokio::time::sleep(Duration::from_millis(200)).await;
                85.0
            }
            "LAX" => 15.0,
            _ => 42.0,
        };
        Ok(RiskAssessment::from_score("Test", score))
    }
}

fn app_with_map(weather_fails: bool) -> (App, HeadlessView) {
    let provider = HeadlessMapProvider::new();
    let view = provider.view();
    let map = provider
        .create_map("map", LatLng::new(39.8283, -98.5795), 4)
        .unwrap();
    let app = App::new(
        Arc::new(AirportIndex::builtin()),
        Some(map),
        Arc::new(FakeWeather {
            fail: weather_fails,
        }),
        Arc::new(FakeRisk),
    );
    (app, view)
}

async fn settle(app: &mut App) {
    tokio::time::timeout(Duration::from_secs(5), app.settle())
        .await
        .expect("selection did not settle");
}

#[rstest]
#[case("new york")]
#[case("a")]
#[case("north")]
#[case("TX")]
#[case("pacificcoast")]
#[case("zzz")]
fn test_markers_match_results(#[case] query: &str) {
    let (mut app, view) = app_with_map(false);
    app.set_query(query);

    let ids: Vec<&str> = app.results().iter().map(|r| r.id()).collect();
    assert_eq!(app.marker_keys(), ids);
    assert_eq!(view.live_labels(), ids);
}

#[tokio::test]
async fn test_empty_query_clears_markers() {
    let (mut app, view) = app_with_map(false);
    assert_eq!(app.handle(AppEvent::QueryChanged("new york".into())), Update::Results(2));
    assert_eq!(view.live_labels(), vec!["JFK", "LGA"]);

    assert_eq!(app.handle(AppEvent::QueryChanged(String::new())), Update::Results(0));
    assert!(app.results().is_empty());
    assert!(app.marker_keys().is_empty());
    assert!(view.live_labels().is_empty());
}

#[tokio::test]
async fn test_marker_click_selects_like_list_click() {
    let (mut app, view) = app_with_map(false);
    app.set_query("denver");
    assert!(view.click("DEN"));

    let event = app.next_event().await.unwrap();
    assert!(matches!(app.handle(event), Update::Selected(_)));

    let selection = app.selection().unwrap();
    assert_eq!(selection.airport.iata, "DEN");
    assert_eq!(view.center(), Some(selection.airport.position()));
    assert_eq!(view.zoom(), Some(SELECTION_ZOOM));
    assert!(app.result_cards()[0].selected);

    settle(&mut app).await;
    let assessment = app.assessment().unwrap();
    assert!(matches!(assessment.weather, WeatherPanel::Conditions(_)));
    assert!(matches!(assessment.risk, RiskPanel::Assessment(_)));
}

#[tokio::test]
async fn test_later_selection_wins() {
    let (mut app, _view) = app_with_map(false);
    app.select_code("JFK").unwrap();
    app.select_code("LAX").unwrap();

    let pending = app.assessment().unwrap();
    assert_eq!(pending.details.iata, "LAX");
    assert_eq!(pending.risk, RiskPanel::Pending);

    settle(&mut app).await;
    // Give a slow JFK answer time to arrive if it was going to
    while let Ok(Some(update)) =
        tokio::time::timeout(Duration::from_millis(300), app.step()).await
    {
        assert_eq!(update, Update::Ignored);
    }

    let selection = app.selection().unwrap();
    assert_eq!(selection.airport.iata, "LAX");
    assert_eq!(selection.risk.ready().unwrap().risk_score, 15.0);
}

#[tokio::test]
async fn test_late_result_for_earlier_selection_is_dropped() {
    let (mut app, _view) = app_with_map(false);
    let jfk = app.select_code("JFK").unwrap();
    let lax = app.select_code("LAX").unwrap();

    // A fetch that outlives the switch and still reports back
    let tx = app.sender();
    let late = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        tx.send(AppEvent::Fetched(FetchOutcome {
            selection: jfk,
            result: FetchResult::Risk(Ok(RiskAssessment::from_score("Northeast", 99.0))),
        }))
        .unwrap();
    });

    late.await.unwrap();

    let mut ignored = 0;
    while let Ok(Some(update)) =
        tokio::time::timeout(Duration::from_millis(100), app.step()).await
    {
        match update {
            Update::Ignored => ignored += 1,
            Update::Assessment(id) => assert_eq!(id, lax),
            other => panic!("unexpected update: {other:?}"),
        }
    }
    assert_eq!(ignored, 1);
    assert!(app.selection().unwrap().is_settled());

    let selection = app.selection().unwrap();
    assert_eq!(selection.id, lax);
    assert_eq!(selection.airport.iata, "LAX");
    assert_eq!(selection.risk.ready().unwrap().risk_score, 15.0);
}

#[tokio::test]
async fn test_stale_outcome_is_ignored() {
    let (mut app, _view) = app_with_map(false);
    let jfk = app.select_code("JFK").unwrap();
    let lax = app.select_code("LAX").unwrap();
    assert_ne!(jfk, lax);

    let stale = AppEvent::Fetched(FetchOutcome {
        selection: jfk,
        result: FetchResult::Risk(Ok(RiskAssessment::from_score("Northeast", 99.0))),
    });
    assert_eq!(app.handle(stale), Update::Ignored);

    let selection = app.selection().unwrap();
    assert_eq!(selection.id, lax);
    assert!(selection.risk.is_pending());
}

#[tokio::test]
async fn test_weather_failure_does_not_block_risk() {
    let (mut app, _view) = app_with_map(true);
    app.select_code("ATL").unwrap();
    settle(&mut app).await;

    let assessment = app.assessment().unwrap();
    assert_eq!(assessment.weather, WeatherPanel::Unavailable);
    match &assessment.risk {
        RiskPanel::Assessment(view) => {
            assert_eq!(view.score, "42.0/100");
            assert_eq!(view.bucket, "moderate");
        }
        other => panic!("unexpected risk panel: {other:?}"),
    }

    let text = assessment.to_string();
    assert!(text.contains("Weather data unavailable"));
    assert!(text.contains("42.0/100"));
}

#[tokio::test]
async fn test_list_only_mode() {
    let mut app = App::new(
        Arc::new(AirportIndex::builtin()),
        None,
        Arc::new(FakeWeather { fail: false }),
        Arc::new(FakeRisk),
    );
    assert!(!app.has_map());

    assert_eq!(app.set_query("seattle"), 1);
    assert!(app.marker_keys().is_empty());

    app.select_result(0).unwrap();
    settle(&mut app).await;
    let selection = app.selection().unwrap();
    assert_eq!(selection.airport.iata, "SEA");
    assert!(selection.is_settled());
}

#[tokio::test]
async fn test_teardown_map_releases_markers() {
    let (mut app, view) = app_with_map(false);
    app.set_query("houston");
    assert_eq!(view.live_labels(), vec!["IAH", "HOU"]);

    app.teardown_map();
    assert!(!app.has_map());
    assert!(view.live_labels().is_empty());

    app.set_query("denver");
    assert!(app.marker_keys().is_empty());
}
