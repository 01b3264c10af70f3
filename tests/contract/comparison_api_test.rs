// Contract tests for POST /api/comparison

use actix_web::test;
use serde_json::{json, Value};

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::offline_vehicle_service;

/// Test POST /api/comparison with the form defaults returns the full result schema
#[actix_web::test]
async fn test_comparison_contract() {
    let app = init_app!(offline_vehicle_service()).await;

    let req = test::TestRequest::post()
        .uri("/api/comparison")
        .set_json(json!({
            "car_price": 30000,
            "down_payment": 3000,
            "loan_term_months": 60,
            "interest_rate": 4.5,
            "lease_term_months": 36,
            "lease_payment": 400,
            "lease_down_payment": 2000,
            "investment_return": 8,
            "annual_depreciation": 15
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;

    // Amounts are serialized as decimal strings
    assert_eq!(body["monthly_loan_payment"], "503.36");
    assert_eq!(body["loan_amount"], "27000");
    assert_eq!(body["net_buying_cost"], "19890.53");
    assert_eq!(body["total_lease_payments"], "26000");
    assert_eq!(body["net_lease_cost"], "16864.84");
    assert_eq!(body["recommendation"], "lease");

    for field in [
        "total_loan_cost",
        "residual_value_at_lease_end",
        "residual_value_at_loan_end",
        "down_payment_difference",
        "monthly_investment",
        "investment_value",
    ] {
        assert!(body[field].is_string(), "{} must be a decimal string", field);
    }

    let chart = &body["chart"];
    assert_eq!(chart["labels"].as_array().unwrap().len(), 60);
    assert_eq!(chart["labels"][0], 1);

    let datasets = chart["datasets"].as_array().unwrap();
    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets[0]["label"], "Net Cost of Buying (Including Car Value)");
    assert_eq!(
        datasets[1]["label"],
        "Net Cost of Leasing (Including Investment Returns)"
    );
    assert_eq!(datasets[0]["data"][59], body["net_buying_cost"]);
    assert_eq!(datasets[1]["data"][59], body["net_lease_cost"]);
}

/// Test omitted fields fall back to the calculator defaults
#[actix_web::test]
async fn test_comparison_defaults() {
    let app = init_app!(offline_vehicle_service()).await;

    let req = test::TestRequest::post()
        .uri("/api/comparison")
        .set_json(json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["monthly_loan_payment"], "503.36");
    assert_eq!(body["recommendation"], "lease");
}

/// Test decimal strings are accepted as input
#[actix_web::test]
async fn test_comparison_accepts_decimal_strings() {
    let app = init_app!(offline_vehicle_service()).await;

    let req = test::TestRequest::post()
        .uri("/api/comparison")
        .set_json(json!({
            "car_price": "33000.00",
            "down_payment": "3000",
            "interest_rate": "4.5"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["monthly_loan_payment"], "559.29");
}

/// Test invalid inputs return 400 with the error envelope
#[actix_web::test]
async fn test_comparison_validation_errors() {
    let app = init_app!(offline_vehicle_service()).await;

    let invalid_payloads = [
        json!({"car_price": 0}),
        json!({"car_price": 20000, "down_payment": 25000}),
        json!({"loan_term_months": 0}),
        json!({"lease_term_months": 0}),
        json!({"loan_term_months": 601}),
        json!({"interest_rate": -1}),
        json!({"annual_depreciation": 101}),
        json!({"investment_return": 300, "loan_term_months": 600}),
        json!({"car_price": "79228162514264337593543950335", "down_payment": 0}),
        json!({"car_price": 1000000000, "down_payment": 1000000000,
               "loan_term_months": 600, "investment_return": 100}),
    ];

    for payload in invalid_payloads {
        let req = test::TestRequest::post()
            .uri("/api/comparison")
            .set_json(&payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{} should be rejected", payload);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], 400);
        assert!(body["error"]["message"].is_string());
    }
}

/// Test malformed JSON is reported in the same envelope
#[actix_web::test]
async fn test_comparison_malformed_body() {
    let app = init_app!(offline_vehicle_service()).await;

    let req = test::TestRequest::post()
        .uri("/api/comparison")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"car_price\": ")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

/// Test wrong types are rejected rather than coerced
#[actix_web::test]
async fn test_comparison_wrong_types() {
    let app = init_app!(offline_vehicle_service()).await;

    let req = test::TestRequest::post()
        .uri("/api/comparison")
        .set_json(json!({"loan_term_months": "sixty"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

/// Test unknown routes answer with the error envelope
#[actix_web::test]
async fn test_unknown_route_not_found() {
    let app = init_app!(offline_vehicle_service()).await;

    let req = test::TestRequest::get().uri("/api/lease-calculator").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 404);
    assert_eq!(
        body["error"]["message"],
        "Not found: GET /api/lease-calculator"
    );
}
