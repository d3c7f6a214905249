use crate::modules::ordering::use_cases::create_order::notifier::NotificationSettings;
use crate::shared::infrastructure::notification::http::HttpNotificationClient;
use crate::shell::app;
use crate::shell::dependencies::{InMemoryStores, wire_in_memory};
use crate::shell::seed::{DEMO_BASKET_ID, DEMO_BUYER_ID, seed_demo_data};
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

type Received = Arc<Mutex<Vec<(String, serde_json::Value)>>>;

async fn record(
    State((name, received)): State<(&'static str, Received)>,
    Json(payload): Json<serde_json::Value>,
) -> StatusCode {
    received.lock().await.push((name.to_string(), payload));
    StatusCode::OK
}

async fn spawn_function_host() -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route(
            "/api/OrderReserver",
            post(record).with_state(("archive", received.clone())),
        )
        .route(
            "/api/OrderItemReserver",
            post(record).with_state(("warehouse", received.clone())),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{addr}"), received)
}

async fn json_of(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn places_the_demo_basket_and_notifies_both_functions() {
    let (function_host, received) = spawn_function_host().await;
    let stores = InMemoryStores::new();
    seed_demo_data(&stores).await;
    let state = wire_in_memory(
        &stores,
        "https://shop.example",
        Arc::new(HttpNotificationClient::new()),
        NotificationSettings {
            order_archive_url: Some(format!("{function_host}/api/OrderReserver")),
            warehouse_reservation_url: Some(format!("{function_host}/api/OrderItemReserver")),
        },
    );
    let app = app(state);

    let body = format!(
        r#"{{"basket_id":{DEMO_BASKET_ID},"shipping_address":{{"street":"1 Way","city":"Redmond","state":"WA","zip_code":"98052"}}}}"#
    );
    let created = app
        .clone()
        .oneshot(
            Request::post("/orders")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let order_id = json_of(created).await["order_id"]
        .as_str()
        .unwrap()
        .to_string();

    let received = received.lock().await.clone();
    assert_eq!(received.len(), 2);
    let (first, archive) = &received[0];
    assert_eq!(first, "archive");
    assert_eq!(archive["OrderId"], order_id);
    assert_eq!(archive["ShippingAddress"], "1 Way, Redmond,  WA - 98052, 98052");
    assert_eq!(
        archive["Items"][0]["ItemOrdered"]["PictureUri"],
        "https://shop.example/images/products/1.png"
    );
    let (second, warehouse) = &received[1];
    assert_eq!(second, "warehouse");
    assert_eq!(
        *warehouse,
        serde_json::json!({ "ItemId": order_id, "Quantity": 3 })
    );

    let listed = app
        .oneshot(
            Request::get(format!("/orders?buyer_id={DEMO_BUYER_ID}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    let listed = json_of(listed).await;
    assert_eq!(listed[0]["order_id"], order_id);
    assert_eq!(listed[0]["total"], 36.5);
}
