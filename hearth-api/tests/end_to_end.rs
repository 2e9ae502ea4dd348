//! Gateway driven through its router, talking to real backing services
//! bound on ephemeral ports.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use hearth_api::backing::{loyalty_app, payment_app, reservation_app};
use hearth_api::gateway_app;
use hearth_api::state::{GatewayState, LoyaltyState, PaymentState, ReservationState};
use hearth_api::upstream::{build_client, HttpLoyaltyClient, HttpPaymentClient, HttpReservationClient};
use hearth_core::gateway::{GatewayOptions, GatewayService};
use hearth_core::services::{LoyaltyService, PaymentService, ReservationService};
use hearth_shared::Loyalty;
use hearth_store::memory::{
    InMemoryHotelRepository, InMemoryLoyaltyRepository, InMemoryPaymentRepository,
    InMemoryReservationRepository, DEMO_HOTEL_UID,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

struct Platform {
    gateway: Router,
    loyalty: LoyaltyService,
}

async fn platform() -> Platform {
    let reservation = ReservationService::new(
        Arc::new(InMemoryHotelRepository::seeded()),
        Arc::new(InMemoryReservationRepository::new()),
    );
    let payment = PaymentService::new(Arc::new(InMemoryPaymentRepository::new()));
    let loyalty = LoyaltyService::new(Arc::new(InMemoryLoyaltyRepository::new()));

    let reservation_url = spawn(reservation_app(ReservationState { service: reservation })).await;
    let payment_url = spawn(payment_app(PaymentState { service: payment })).await;
    let loyalty_url = spawn(loyalty_app(LoyaltyState {
        service: loyalty.clone(),
    }))
    .await;

    let client = build_client(None).unwrap();
    let gateway = GatewayService::new(
        Arc::new(HttpReservationClient::new(&reservation_url, client.clone())),
        Arc::new(HttpPaymentClient::new(&payment_url, client.clone())),
        Arc::new(HttpLoyaltyClient::new(&loyalty_url, client)),
        GatewayOptions {
            fetch_concurrency: 2,
            ..GatewayOptions::default()
        },
    );

    Platform {
        gateway: gateway_app(GatewayState { gateway }),
        loyalty,
    }
}

fn request(method: &str, uri: &str, user: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-User-Name", user)
        .header("Content-Type", "application/json");
    match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn booking() -> Value {
    json!({
        "hotelUid": DEMO_HOTEL_UID,
        "startDate": "2024-01-01",
        "endDate": "2024-01-04"
    })
}

#[tokio::test]
async fn test_booking_and_cancellation() {
    let platform = platform().await;
    let app = &platform.gateway;

    let mut gold = Loyalty::new("alice");
    gold.reservation_count = 21;
    platform.loyalty.save_loyalty(gold).await.unwrap();

    // Book 3 nights at 10000 with the 10% GOLD discount
    let (status, created) = call(app, request("POST", "/api/v1/reservations", "alice", Some(booking()))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["discount"], 10);
    assert_eq!(created["status"], "PAID");
    assert_eq!(created["payment"]["price"], 27000);
    assert_eq!(created["hotelUid"], DEMO_HOTEL_UID.to_string());
    let uid = created["reservationUid"].as_str().unwrap().to_string();

    let (status, me) = call(app, request("GET", "/api/v1/me", "alice", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["reservations"].as_array().unwrap().len(), 1);
    assert_eq!(me["reservations"][0]["hotel"]["name"], "Ararat Park Hyatt Moscow");
    assert_eq!(me["loyalty"]["reservationCount"], 22);
    assert_eq!(me["loyalty"]["status"], "GOLD");

    let path = format!("/api/v1/reservations/{}", uid);
    let (status, _) = call(app, request("GET", &path, "mallory", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = call(app, request("DELETE", &path, "mallory", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(app, request("DELETE", &path, "alice", None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, view) = call(app, request("GET", &path, "alice", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["status"], "CANCELED");
    assert_eq!(view["payment"]["status"], "CANCELED");
    assert_eq!(view["hotel"]["fullAddress"], "Россия, Москва, Неглинная ул., 4");

    let (status, loyalty) = call(app, request("GET", "/api/v1/loyalty", "alice", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loyalty["reservationCount"], 21);
    assert_eq!(loyalty["discount"], 10);
}

#[tokio::test]
async fn test_new_guest() {
    let platform = platform().await;
    let app = &platform.gateway;

    let (status, me) = call(app, request("GET", "/api/v1/me", "ghost", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(me["reservations"].as_array().unwrap().is_empty());
    assert!(me["loyalty"]["status"].is_null());
    assert_eq!(me["loyalty"]["discount"], 0);

    let (status, _) = call(app, request("GET", "/api/v1/loyalty", "ghost", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, created) = call(app, request("POST", "/api/v1/reservations", "ghost", Some(booking()))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["discount"], 0);
    assert_eq!(created["payment"]["price"], 30000);

    let (_, loyalty) = call(app, request("GET", "/api/v1/loyalty", "ghost", None)).await;
    assert_eq!(loyalty["reservationCount"], 1);
    assert_eq!(loyalty["status"], "BRONZE");
}

#[tokio::test]
async fn test_hotel_listing() {
    let platform = platform().await;
    let app = &platform.gateway;

    let (status, page) = call(app, request("GET", "/api/v1/hotels?page=1&size=5", "", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["items"][0]["name"], "Ararat Park Hyatt Moscow");
    assert!(page["items"][0].get("id").is_none());

    let (status, _) = call(app, request("GET", "/api/v1/hotels?page=2&size=5", "", None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(app, request("GET", "/api/v1/hotels?page=0&size=5", "", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(app, request("GET", "/api/v1/hotels", "", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(app, request("GET", "/manage/health", "", None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_rejected_bookings() {
    let platform = platform().await;
    let app = &platform.gateway;

    let bad = json!({ "hotelUid": "nope", "startDate": "2024-13-01", "endDate": "2024-01-04" });
    let (status, body) = call(app, request("POST", "/api/v1/reservations", "alice", Some(bad))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid reservation request data");
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);

    let unknown = json!({
        "hotelUid": "11111111-2222-3333-4444-555555555555",
        "startDate": "2024-01-01",
        "endDate": "2024-01-04"
    });
    let (status, _) = call(app, request("POST", "/api/v1/reservations", "alice", Some(unknown))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(app, request("POST", "/api/v1/reservations", "", Some(booking()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/reservations")
        .header("X-User-Name", "alice")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = call(app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, me) = call(app, request("GET", "/api/v1/me", "alice", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(me["reservations"].as_array().unwrap().is_empty());
}
