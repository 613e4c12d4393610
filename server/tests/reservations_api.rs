//! Reservation API integration tests
//!
//! Drives the real router over an in-memory store, covering the
//! lifecycle contract end to end: intake validation, pending-on-create,
//! ordered listing, guarded status transitions, and delete semantics.

use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use yoyaku_server::api;
use yoyaku_server::core::{Config, ServerState};
use yoyaku_server::db::MIGRATOR;
use yoyaku_server::db::repository::restaurant;

fn test_config() -> Config {
    Config {
        http_port: 0,
        database_url: "sqlite::memory:".into(),
        liff_id: None,
        restaurant_name: None,
        environment: "test".into(),
        log_level: "info".into(),
        log_dir: None,
    }
}

async fn memory_pool() -> SqlitePool {
    // Single connection: every pool handle must see the same
    // in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}

/// App with one seeded restaurant, returning its id
async fn setup() -> (axum::Router, SqlitePool, String) {
    let pool = memory_pool().await;
    let seeded = restaurant::create(&pool, "Sakura Dining").await.unwrap();
    let state = ServerState::new(test_config(), pool.clone());
    let app = api::build_app(&state).with_state(state);
    (app, pool, seeded.id)
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn days_from_now(days: i64) -> String {
    (chrono::Local::now() + chrono::Duration::days(days))
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

fn intake_body(date: &str, time: &str) -> Value {
    json!({
        "customerName": "山田太郎",
        "phoneNumber": "090-1234-5678",
        "reservationDate": date,
        "reservationTime": time,
        "partySize": 4
    })
}

#[tokio::test]
async fn create_returns_pending_and_ignores_client_status() {
    let (app, _pool, restaurant_id) = setup().await;

    let mut body = intake_body(&days_from_now(1), "18:00");
    body["status"] = json!("confirmed");
    body["specialRequests"] = json!("窓際の席を希望");

    let (status, json) = send(&app, "POST", "/reservations", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["status"], "pending");
    assert_eq!(data["customer_name"], "山田太郎");
    assert_eq!(data["phone_number"], "090-1234-5678");
    assert_eq!(data["party_size"], 4);
    assert_eq!(data["special_requests"], "窓際の席を希望");
    assert_eq!(data["restaurant_id"], restaurant_id.as_str());
    assert!(data["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(data["created_at"].as_i64().is_some());
    assert_eq!(data["created_at"], data["updated_at"]);
}

#[tokio::test]
async fn create_missing_phone_names_the_field() {
    let (app, _pool, _rid) = setup().await;

    let mut body = intake_body(&days_from_now(1), "18:00");
    body.as_object_mut().unwrap().remove("phoneNumber");

    let (status, json) = send(&app, "POST", "/reservations", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("phoneNumber is required")
    );
}

#[tokio::test]
async fn create_validates_phone_pattern() {
    let (app, _pool, _rid) = setup().await;
    let date = days_from_now(1);

    for bad in ["090 1234 5678", "phone-me", "０９０"] {
        let mut body = intake_body(&date, "18:00");
        body["phoneNumber"] = json!(bad);
        let (status, _) = send(&app, "POST", "/reservations", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {bad:?}");
    }

    for good in ["090-1234-5678", "(090)1234-5678", "+819012345678"] {
        let mut body = intake_body(&date, "18:00");
        body["phoneNumber"] = json!(good);
        let (status, _) = send(&app, "POST", "/reservations", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "rejected {good:?}");
    }
}

#[tokio::test]
async fn create_validates_party_size() {
    let (app, _pool, _rid) = setup().await;
    let date = days_from_now(1);

    for bad in [0, -3] {
        let mut body = intake_body(&date, "18:00");
        body["partySize"] = json!(bad);
        let (status, json) = send(&app, "POST", "/reservations", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("partySize"));
    }

    // The intake form's full range
    for n in 1..=8 {
        let mut body = intake_body(&date, "18:00");
        body["partySize"] = json!(n);
        let (status, _) = send(&app, "POST", "/reservations", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn create_rejects_past_dates_and_off_slot_times() {
    let (app, _pool, _rid) = setup().await;

    let (status, json) =
        send(&app, "POST", "/reservations", Some(intake_body(&days_from_now(-1), "18:00"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("reservationDate"));

    for bad_time in ["15:00", "18:15", "21:00", "six pm"] {
        let (status, json) =
            send(&app, "POST", "/reservations", Some(intake_body(&days_from_now(1), bad_time)))
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {bad_time:?}");
        assert!(json["error"].as_str().unwrap().contains("reservationTime"));
    }
}

#[tokio::test]
async fn create_without_restaurant_row_is_a_config_error() {
    // No seeded restaurant at all
    let pool = memory_pool().await;
    let state = ServerState::new(test_config(), pool);
    let app = api::build_app(&state).with_state(state);

    let (status, json) =
        send(&app, "POST", "/reservations", Some(intake_body(&days_from_now(1), "18:00"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    // Generic message only; the misconfiguration detail stays in the logs
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn list_is_ordered_by_date_then_time() {
    let (app, _pool, _rid) = setup().await;

    // Insert deliberately out of order
    for (days, time) in [(3, "11:00"), (1, "19:30"), (2, "12:30"), (1, "11:30"), (2, "18:00")] {
        let (status, _) =
            send(&app, "POST", "/reservations", Some(intake_body(&days_from_now(days), time)))
                .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = send(&app, "GET", "/reservations", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 5);

    let keys: Vec<(String, String)> = items
        .iter()
        .map(|r| {
            (
                r["reservation_date"].as_str().unwrap().to_string(),
                r["reservation_time"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "list not ordered by date then time: {keys:?}");
}

#[tokio::test]
async fn list_filters_by_date_and_restaurant() {
    let (app, _pool, restaurant_id) = setup().await;

    let tomorrow = days_from_now(1);
    let later = days_from_now(5);
    for date in [&tomorrow, &later, &tomorrow] {
        send(&app, "POST", "/reservations", Some(intake_body(date, "18:00"))).await;
    }

    let (status, json) = send(&app, "GET", &format!("/reservations?date={tomorrow}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|r| r["reservation_date"] == tomorrow.as_str()));

    let (_, json) =
        send(&app, "GET", &format!("/reservations?restaurantId={restaurant_id}"), None).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);

    let (_, json) = send(&app, "GET", "/reservations?restaurantId=other", None).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let (_, json) = send(
        &app,
        "GET",
        &format!("/reservations?restaurantId={restaurant_id}&date={later}"),
        None,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_by_id_roundtrip_and_missing() {
    let (app, _pool, _rid) = setup().await;

    let (_, created) =
        send(&app, "POST", "/reservations", Some(intake_body(&days_from_now(1), "18:00"))).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, json) = send(&app, "GET", &format!("/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], id.as_str());

    let (status, json) = send(&app, "GET", "/reservations/no-such-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn confirm_transition_persists() {
    let (app, _pool, _rid) = setup().await;

    let (_, created) =
        send(&app, "POST", "/reservations", Some(intake_body(&days_from_now(1), "18:00"))).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/reservations/{id}"),
        Some(json!({"status": "confirmed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "confirmed");

    // Re-read: the transition stuck, and updated_at moved forward
    let (_, json) = send(&app, "GET", &format!("/reservations/{id}"), None).await;
    assert_eq!(json["data"]["status"], "confirmed");
    assert!(json["data"]["updated_at"].as_i64() >= json["data"]["created_at"].as_i64());
}

#[tokio::test]
async fn terminal_reservations_reject_further_transitions() {
    let (app, _pool, _rid) = setup().await;

    let (_, created) =
        send(&app, "POST", "/reservations", Some(intake_body(&days_from_now(1), "18:00"))).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    send(
        &app,
        "PUT",
        &format!("/reservations/{id}"),
        Some(json!({"status": "cancelled"})),
    )
    .await;

    // Re-confirming a cancelled reservation must not silently succeed
    let (status, json) = send(
        &app,
        "PUT",
        &format!("/reservations/{id}"),
        Some(json!({"status": "confirmed"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["success"], false);

    let (_, json) = send(&app, "GET", &format!("/reservations/{id}"), None).await;
    assert_eq!(json["data"]["status"], "cancelled");
}

#[tokio::test]
async fn update_status_validates_target_and_id() {
    let (app, _pool, _rid) = setup().await;

    let (_, created) =
        send(&app, "POST", "/reservations", Some(intake_body(&days_from_now(1), "18:00"))).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    // pending is not a legal target, nor are unknown values
    for bad in ["pending", "done", ""] {
        let (status, _) = send(
            &app,
            "PUT",
            &format!("/reservations/{id}"),
            Some(json!({"status": bad})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {bad:?}");
    }

    let (status, _) = send(&app, "PUT", &format!("/reservations/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "PUT",
        "/reservations/no-such-id",
        Some(json!({"status": "confirmed"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_succeeds_once_then_reports_missing() {
    let (app, _pool, _rid) = setup().await;

    let (_, created) =
        send(&app, "POST", "/reservations", Some(intake_body(&days_from_now(1), "18:00"))).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, json) = send(&app, "DELETE", &format!("/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().is_some());

    // Not idempotent-by-id: the second delete is a failure, not a success
    let (status, json) = send(&app, "DELETE", &format!("/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let (app, _pool, _rid) = setup().await;
    let (status, json) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
