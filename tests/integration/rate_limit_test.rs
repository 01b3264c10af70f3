// Integration tests for the global request quota

use actix_web::{test, App};
use leasewise::middleware::{json_config, ErrorHandler, RateLimiter};
use serde_json::{json, Value};

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::offline_vehicle_service;

/// Test requests beyond the quota get 429 with Retry-After
#[actix_web::test]
async fn test_rate_limit_exceeded() {
    let limiter = RateLimiter::new(2).expect("valid rate limit");
    let app = test::init_service(
        App::new()
            .wrap(ErrorHandler)
            .wrap(limiter)
            .app_data(offline_vehicle_service())
            .app_data(json_config())
            .configure(leasewise::modules::configure),
    )
    .await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/comparison")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    let req = test::TestRequest::post()
        .uri("/api/comparison")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 429);

    let retry_after: u64 = resp
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .expect("Retry-After header");
    assert!(retry_after >= 1);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 429);
}

/// Test the health probe is never throttled
#[actix_web::test]
async fn test_health_exempt_from_rate_limit() {
    let limiter = RateLimiter::new(1).expect("valid rate limit");
    let app = test::init_service(
        App::new()
            .wrap(limiter)
            .app_data(offline_vehicle_service())
            .configure(leasewise::modules::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/vehicles/years").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get().uri("/api/vehicles/years").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 429);

    for _ in 0..5 {
        let req = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);
    }
}

/// Test clones of one limiter share the same quota
#[actix_web::test]
async fn test_clones_share_quota() {
    let limiter = RateLimiter::new(1).expect("valid rate limit");

    let first = test::init_service(
        App::new()
            .wrap(limiter.clone())
            .app_data(offline_vehicle_service())
            .configure(leasewise::modules::configure),
    )
    .await;
    let second = test::init_service(
        App::new()
            .wrap(limiter)
            .app_data(offline_vehicle_service())
            .configure(leasewise::modules::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/vehicles/years").to_request();
    assert_eq!(test::call_service(&first, req).await.status(), 200);

    let req = test::TestRequest::get().uri("/api/vehicles/years").to_request();
    assert_eq!(test::call_service(&second, req).await.status(), 429);
}

/// Test the quota over a real socket with the production middleware order
#[actix_web::test]
async fn test_rate_limit_over_http() {
    let limiter = RateLimiter::new(1).expect("valid rate limit");
    let srv = actix_test::start(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(limiter.clone())
            .wrap(leasewise::middleware::RequestId)
            .app_data(offline_vehicle_service())
            .app_data(json_config())
            .configure(leasewise::modules::configure)
    });
    let client = awc::Client::default();

    let resp = client
        .post(srv.url("/api/comparison"))
        .send_json(&json!({}))
        .await
        .expect("request sent");
    assert_eq!(resp.status(), 200);

    let mut resp = client
        .post(srv.url("/api/comparison"))
        .send_json(&json!({}))
        .await
        .expect("request sent");
    assert_eq!(resp.status(), 429);
    assert!(resp.headers().contains_key("retry-after"));

    let body: Value = resp.json().await.expect("JSON error envelope");
    assert_eq!(body["error"]["code"], 429);

    let resp = client
        .get(srv.url("/health"))
        .send()
        .await
        .expect("request sent");
    assert_eq!(resp.status(), 200);
}
