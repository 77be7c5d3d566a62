//! End-to-end smoke tests for the full covid19d stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use covid19_adapter_http_axum::router;
use covid19_adapter_http_axum::state::AppState;
use covid19_adapter_storage_sqlite_sqlx::{
    Config, Database, SqliteDistrictRepository, SqliteStateRepository,
};
use covid19_app::services::district_service::DistrictService;
use covid19_app::services::state_service::StateService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by a fresh in-memory `SQLite` database.
///
/// Districts are numbered from 1 in a fresh database.
async fn app() -> (Database, axum::Router) {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let state = AppState::new(
        StateService::new(SqliteStateRepository::new(db.pool().clone())),
        DistrictService::new(SqliteDistrictRepository::new(db.pool().clone())),
    );

    (db, router::build(state))
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

fn test_district() -> Value {
    json!({
        "districtName": "Test District",
        "stateId": 1,
        "cases": 10,
        "cured": 5,
        "active": 3,
        "deaths": 2,
    })
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (_db, app) = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// States
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_seeded_states() {
    let (_db, app) = app().await;
    let (status, body) = send(&app, "GET", "/states/", None).await;
    assert_eq!(status, StatusCode::OK);

    let states: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(states.len(), 36);
    assert_eq!(
        states[0],
        json!({"stateId": 1, "stateName": "Andaman and Nicobar Islands", "population": 380_581})
    );
}

#[tokio::test]
async fn should_get_each_state_as_listed() {
    let (_db, app) = app().await;
    let (_, body) = send(&app, "GET", "/states/", None).await;
    let states: Vec<Value> = serde_json::from_str(&body).unwrap();

    for state in states {
        let uri = format!("/states/{}", state["stateId"]);
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), state);
    }
}

#[tokio::test]
async fn should_return_empty_body_when_state_missing() {
    let (_db, app) = app().await;
    let (status, body) = send(&app, "GET", "/states/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn should_return_null_stats_when_state_has_no_districts() {
    let (_db, app) = app().await;
    let (status, body) = send(&app, "GET", "/states/17/stats/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({
            "totalCases": null,
            "totalCured": null,
            "totalActive": null,
            "totalDeaths": null,
        })
    );
}

#[tokio::test]
async fn should_sum_district_counters_into_state_stats() {
    let (_db, app) = app().await;
    for (name, counters) in [("Ernakulam", [100, 60, 30, 10]), ("Kozhikode", [50, 40, 8, 2])] {
        let district = json!({
            "districtName": name,
            "stateId": 17,
            "cases": counters[0],
            "cured": counters[1],
            "active": counters[2],
            "deaths": counters[3],
        });
        send(&app, "POST", "/districts/", Some(&district)).await;
    }

    let (_, body) = send(&app, "GET", "/states/17/stats/", None).await;
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({
            "totalCases": 150,
            "totalCured": 100,
            "totalActive": 38,
            "totalDeaths": 12,
        })
    );
}

// ---------------------------------------------------------------------------
// Districts: full CRUD cycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_district_crud_cycle() {
    let (_db, app) = app().await;

    // Create
    let (status, body) = send(&app, "POST", "/districts/", Some(&test_district())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "District Successfully Added");

    // Read
    let (status, body) = send(&app, "GET", "/districts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let mut expected = test_district();
    expected["districtId"] = json!(1);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), expected);

    // Update
    let replacement = json!({
        "districtName": "Thrissur",
        "stateId": 17,
        "cases": 400,
        "cured": 300,
        "active": 90,
        "deaths": 10,
    });
    let (status, body) = send(&app, "PUT", "/districts/1", Some(&replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "District Details Updated");

    let (_, body) = send(&app, "GET", "/districts/1", None).await;
    let mut expected = replacement;
    expected["districtId"] = json!(1);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), expected);

    // Owning state
    let (status, body) = send(&app, "GET", "/districts/1/details/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"stateName":"Kerala"}"#);

    // Delete
    let (status, body) = send(&app, "DELETE", "/districts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "District Removed");

    let (status, body) = send(&app, "GET", "/districts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    // Second delete still acknowledges
    let (status, body) = send(&app, "DELETE", "/districts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "District Removed");
}

#[tokio::test]
async fn should_insert_duplicate_rows_when_posting_twice() {
    let (_db, app) = app().await;
    send(&app, "POST", "/districts/", Some(&test_district())).await;
    send(&app, "POST", "/districts/", Some(&test_district())).await;

    let (_, first) = send(&app, "GET", "/districts/1", None).await;
    let (_, second) = send(&app, "GET", "/districts/2", None).await;
    assert!(!first.is_empty());
    assert!(!second.is_empty());
}

#[tokio::test]
async fn should_acknowledge_update_of_missing_district() {
    let (_db, app) = app().await;
    let (status, body) = send(&app, "PUT", "/districts/42", Some(&test_district())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "District Details Updated");

    let (_, body) = send(&app, "GET", "/districts/42", None).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn should_return_empty_body_when_district_details_missing() {
    let (_db, app) = app().await;
    let (status, body) = send(&app, "GET", "/districts/8/details/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

// ---------------------------------------------------------------------------
// Routing and request coercion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_every_route_with_and_without_trailing_slash() {
    let (_db, app) = app().await;

    for uri in ["/districts", "/districts/"] {
        let (status, body) = send(&app, "POST", uri, Some(&test_district())).await;
        assert_eq!(status, StatusCode::OK, "POST {uri}");
        assert_eq!(body, "District Successfully Added", "POST {uri}");
    }

    for (uri, expected) in [
        ("/states", None),
        ("/states/17", Some(r#""stateName":"Kerala""#)),
        ("/states/1/stats", Some(r#""totalCases":20"#)),
        ("/districts/1", Some(r#""districtName":"Test District""#)),
        (
            "/districts/2/details",
            Some(r#""stateName":"Andaman and Nicobar Islands""#),
        ),
    ] {
        let (bare_status, bare) = send(&app, "GET", uri, None).await;
        let slashed = format!("{uri}/");
        let (slashed_status, with_slash) = send(&app, "GET", &slashed, None).await;
        assert_eq!(bare_status, StatusCode::OK, "GET {uri}");
        assert_eq!(slashed_status, StatusCode::OK, "GET {slashed}");
        assert!(!bare.is_empty(), "GET {uri}");
        assert_eq!(bare, with_slash, "GET {uri}");
        if let Some(fragment) = expected {
            assert!(bare.contains(fragment), "GET {uri}: {bare}");
        }
    }

    for uri in ["/districts/1", "/districts/2/"] {
        let (status, body) = send(&app, "PUT", uri, Some(&test_district())).await;
        assert_eq!(status, StatusCode::OK, "PUT {uri}");
        assert_eq!(body, "District Details Updated", "PUT {uri}");
    }

    for uri in ["/districts/1", "/districts/2/"] {
        let (status, body) = send(&app, "DELETE", uri, None).await;
        assert_eq!(status, StatusCode::OK, "DELETE {uri}");
        assert_eq!(body, "District Removed", "DELETE {uri}");
    }
    let (_, body) = send(&app, "GET", "/districts/2", None).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn should_accept_numbers_sent_as_strings() {
    let (_db, app) = app().await;
    let district = json!({
        "districtName": "Ernakulam",
        "stateId": "17",
        "cases": "10",
        "cured": "5",
        "active": "3",
        "deaths": "2",
    });

    let (status, body) = send(&app, "POST", "/districts/", Some(&district)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "District Successfully Added");

    let (_, body) = send(&app, "GET", "/districts/1", None).await;
    let fetched: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        fetched,
        json!({
            "districtId": 1,
            "districtName": "Ernakulam",
            "stateId": 17,
            "cases": 10,
            "cured": 5,
            "active": 3,
            "deaths": 2,
        })
    );
}

#[tokio::test]
async fn should_store_non_numeric_counter_as_sent() {
    let (_db, app) = app().await;
    let mut district = test_district();
    district["cases"] = json!("ten");

    let (status, _) = send(&app, "POST", "/districts/", Some(&district)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/districts/1", None).await;
    let fetched: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched["cases"], json!("ten"));
    assert_eq!(fetched["cured"], json!(5));
}

#[tokio::test]
async fn should_coerce_integral_decimal_district_id() {
    let (_db, app) = app().await;
    send(&app, "POST", "/districts/", Some(&test_district())).await;

    let (_, canonical) = send(&app, "GET", "/districts/1", None).await;
    let (status, body) = send(&app, "GET", "/districts/1.0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
    assert_eq!(body, canonical);

    let (_, body) = send(&app, "GET", "/districts/1.5", None).await;
    assert!(body.is_empty());
}

// ---------------------------------------------------------------------------
// Storage failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_server_error_when_district_references_unknown_state() {
    let (_db, app) = app().await;
    let mut district = test_district();
    district["stateId"] = json!(999);

    let (status, body) = send(&app, "POST", "/districts/", Some(&district)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
}

#[tokio::test]
async fn should_return_server_error_when_fields_are_missing() {
    let (_db, app) = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/districts/",
        Some(&json!({"districtName": "Nameless"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
}

#[tokio::test]
async fn should_return_generic_errors_when_database_is_closed() {
    let (db, app) = app().await;
    db.close().await;

    let (status, body) = send(&app, "GET", "/states/", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Internal Server Error"}"#);

    let (status, body) = send(&app, "GET", "/districts/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
}
