use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use hearth_api::backing::{loyalty_app, payment_app, reservation_app};
use hearth_api::state::{LoyaltyState, PaymentState, ReservationState};
use hearth_core::services::{LoyaltyService, PaymentService, ReservationService};
use hearth_store::memory::{
    InMemoryHotelRepository, InMemoryLoyaltyRepository, InMemoryPaymentRepository,
    InMemoryReservationRepository, DEMO_HOTEL_UID,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn reservations() -> Router {
    reservation_app(ReservationState {
        service: ReservationService::new(
            Arc::new(InMemoryHotelRepository::seeded()),
            Arc::new(InMemoryReservationRepository::new()),
        ),
    })
}

fn payments() -> Router {
    payment_app(PaymentState {
        service: PaymentService::new(Arc::new(InMemoryPaymentRepository::new())),
    })
}

fn loyalty() -> Router {
    loyalty_app(LoyaltyState {
        service: LoyaltyService::new(Arc::new(InMemoryLoyaltyRepository::new())),
    })
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, user: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(user) = user {
        builder = builder.header("X-User-Name", user);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    for app in [reservations(), payments(), loyalty()] {
        let response = app.oneshot(get("/manage/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_hotel_endpoints() {
    let app = reservations();

    let response = app.clone().oneshot(get("/api/v1/hotels?page=1&size=10")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["pageSize"], 10);
    assert_eq!(page["items"][0]["hotelUid"], DEMO_HOTEL_UID.to_string());

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/hotels/{}", DEMO_HOTEL_UID)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 1);

    let response = app.clone().oneshot(get("/api/v1/hotels/id/1")).await.unwrap();
    assert_eq!(body_json(response).await["price"], 10000);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/hotels/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.clone().oneshot(get("/api/v1/hotels/not-a-uid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/api/v1/hotels?page=0&size=10")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reservation_endpoints() {
    let app = reservations();
    let uid = Uuid::new_v4();
    let reservation = json!({
        "reservationUid": uid,
        "username": "alice",
        "paymentUid": Uuid::new_v4(),
        "hotelId": 1,
        "status": "PAID",
        "startDate": "2024-01-01",
        "endDate": "2024-01-04"
    });

    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/v1/reservations", Some("alice"), &reservation))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["reservationUid"], uid.to_string());

    let mut canceled = reservation.clone();
    canceled["status"] = json!("CANCELED");
    let response = app
        .clone()
        .oneshot(with_json("PUT", &format!("/api/v1/reservations/{}", uid), None, &canceled))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/reservations/{}", uid)))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["status"], "CANCELED");

    let request = Request::builder()
        .uri("/api/v1/reservations")
        .header("X-User-Name", "alice")
        .body(Body::empty())
        .unwrap();
    let listed = body_json(app.clone().oneshot(request).await.unwrap()).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let request = Request::builder()
        .uri("/api/v1/reservations")
        .header("X-User-Name", "nobody")
        .body(Body::empty())
        .unwrap();
    let listed = body_json(app.clone().oneshot(request).await.unwrap()).await;
    assert!(listed.as_array().unwrap().is_empty());

    let response = app
        .oneshot(get(&format!("/api/v1/reservations/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payment_endpoints() {
    let app = payments();

    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/v1/payment", None, &json!({ "price": 27000 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let payment = body_json(response).await;
    assert_eq!(payment["status"], "PAID");
    let uid = payment["paymentUid"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/v1/payment", None, &json!({ "price": -5 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/v1/payment", None, &json!({ "amount": 5 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut canceled = payment.clone();
    canceled["status"] = json!("CANCELED");
    let response = app
        .clone()
        .oneshot(with_json("PUT", &format!("/api/v1/payment/{}", uid), None, &canceled))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get(&format!("/api/v1/payment/{}", uid))).await.unwrap();
    let fetched = body_json(response).await;
    assert_eq!(fetched["status"], "CANCELED");
    assert_eq!(fetched["price"], 27000);
}

#[tokio::test]
async fn test_loyalty_endpoints() {
    let app = loyalty();

    let request = Request::builder()
        .uri("/api/v1/loyalty")
        .header("X-User-Name", "alice")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let record = json!({
        "username": "ignored",
        "reservationCount": 21,
        "status": "BRONZE",
        "discount": 5
    });
    let response = app
        .clone()
        .oneshot(with_json("PUT", "/api/v1/loyalty", Some("alice"), &record))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let saved = body_json(response).await;
    assert_eq!(saved["username"], "alice");
    assert_eq!(saved["status"], "GOLD");
    assert_eq!(saved["discount"], 10);

    let request = Request::builder()
        .uri("/api/v1/loyalty")
        .header("X-User-Name", "alice")
        .body(Body::empty())
        .unwrap();
    let fetched = body_json(app.oneshot(request).await.unwrap()).await;
    assert_eq!(fetched["reservationCount"], 21);
}
