use std::sync::{Arc, Mutex};

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use skydesk_core::{CoreError, FilterCriteria, FlightId, FlightsApi};
use skydesk_store::HttpFlightsApi;
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Upstream {
    queries: Arc<Mutex<Vec<Option<String>>>>,
}

fn vn100() -> serde_json::Value {
    json!({
        "id": 1,
        "flightNumber": "VN100",
        "route": {"origin": "HAN", "destination": "SGN"},
        "departureTime": "2024-01-01T08:00:00Z",
        "arrivalTime": "2024-01-01T10:00:00Z",
        "price": 1500000,
        "availableSeats": 12,
        "aircraftModel": "A321"
    })
}

async fn list_flights(State(state): State<Upstream>, RawQuery(query): RawQuery) -> Response {
    state.queries.lock().unwrap().push(query.clone());
    match query.as_deref() {
        Some("origin=FAIL") => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        Some("origin=BROKEN") => "not json".into_response(),
        Some("origin=NONE") => Json(json!([])).into_response(),
        _ => Json(json!([vn100()])).into_response(),
    }
}

async fn get_flight(Path(id): Path<String>) -> Response {
    if id == "1" {
        Json(vn100()).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn spawn_upstream() -> (String, Upstream) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let state = Upstream::default();
    let app = Router::new()
        .route("/api/flights", get(list_flights))
        .route("/api/flights/{id}", get(get_flight))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), state)
}

#[tokio::test]
async fn test_list_all_flights() {
    let (url, upstream) = spawn_upstream().await;
    let api = HttpFlightsApi::new(&url, None).unwrap();

    let flights = api.list_flights(&FilterCriteria::default()).await.unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].flight_number, "VN100");
    assert_eq!(upstream.queries.lock().unwrap().as_slice(), &[None]);
}

#[tokio::test]
async fn test_only_non_empty_filters_are_sent() {
    let (url, upstream) = spawn_upstream().await;
    let api = HttpFlightsApi::new(&url, None).unwrap();

    let filters = FilterCriteria {
        origin: Some("HAN".into()),
        destination: Some(String::new()),
        departure_date: Some("2024-01-01".into()),
    };
    api.list_flights(&filters).await.unwrap();

    let queries = upstream.queries.lock().unwrap();
    assert_eq!(queries[0].as_deref(), Some("origin=HAN&departureDate=2024-01-01"));
}

#[tokio::test]
async fn test_empty_listing() {
    let (url, _) = spawn_upstream().await;
    let api = HttpFlightsApi::new(&url, None).unwrap();

    let filters = FilterCriteria { origin: Some("NONE".into()), ..Default::default() };
    assert!(api.list_flights(&filters).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let (url, _) = spawn_upstream().await;
    let api = HttpFlightsApi::new(&url, None).unwrap();

    let filters = FilterCriteria { origin: Some("FAIL".into()), ..Default::default() };
    let err = api.list_flights(&filters).await.unwrap_err();
    assert!(matches!(err, CoreError::UpstreamStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_invalid_body_is_a_decode_error() {
    let (url, _) = spawn_upstream().await;
    let api = HttpFlightsApi::new(&url, None).unwrap();

    let filters = FilterCriteria { origin: Some("BROKEN".into()), ..Default::default() };
    let err = api.list_flights(&filters).await.unwrap_err();
    assert!(matches!(err, CoreError::Decode(_)));
}

#[tokio::test]
async fn test_get_flight_by_id() {
    let (url, _) = spawn_upstream().await;
    let api = HttpFlightsApi::new(&url, None).unwrap();

    let flight = api.get_flight(&FlightId::Numeric(1)).await.unwrap().unwrap();
    assert_eq!(flight.aircraft_model.as_deref(), Some("A321"));
    assert!(api.get_flight(&FlightId::Numeric(2)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unreachable_upstream() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpFlightsApi::new(&format!("http://{addr}"), None).unwrap();
    let err = api.list_flights(&FilterCriteria::default()).await.unwrap_err();
    assert!(matches!(err, CoreError::Upstream(_)));
}
