// Fake Upstream Servers
//
// Minimal stand-ins for the KBB valuation API and the NHTSA vPIC API.

use actix_web::{web, App, HttpRequest, HttpResponse};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

pub use actix_test::TestServer;

/// Bearer token the fake valuation API accepts
pub const FAKE_KBB_TOKEN: &str = "test-kbb-token";

/// Start a fake KBB API serving `GET /v1/vehicle/values`.
///
/// Requests with the expected bearer token get a valuation that echoes the query
/// parameters; anything else gets 401.
pub fn spawn_fake_kbb() -> TestServer {
    actix_test::start(|| {
        App::new().route(
            "/v1/vehicle/values",
            web::get().to(
                |req: HttpRequest, query: web::Query<HashMap<String, String>>| async move {
                    let authorized = req
                        .headers()
                        .get("Authorization")
                        .and_then(|h| h.to_str().ok())
                        .map(|h| h == format!("Bearer {}", FAKE_KBB_TOKEN))
                        .unwrap_or(false);

                    if !authorized {
                        return HttpResponse::Unauthorized()
                            .json(json!({"message": "invalid token"}));
                    }

                    HttpResponse::Ok().json(json!({
                        "vehicle": {
                            "year": query.get("year"),
                            "make": query.get("make"),
                            "model": query.get("model"),
                            "mileage": query.get("mileage"),
                            "condition": query.get("condition"),
                        },
                        "values": {
                            "private_party": 18250,
                            "trade_in": 16400
                        }
                    }))
                },
            ),
        )
    })
}

/// Start a fake KBB API that fails every request with the given status
pub fn spawn_failing_kbb(status: u16) -> TestServer {
    actix_test::start(move || {
        App::new().route(
            "/v1/vehicle/values",
            web::get().to(move || async move {
                HttpResponse::build(
                    actix_web::http::StatusCode::from_u16(status)
                        .expect("valid status code"),
                )
                .body("upstream exploded")
            }),
        )
    })
}

/// Start a fake KBB API that answers only after `delay`
pub fn spawn_slow_kbb(delay: Duration) -> TestServer {
    actix_test::start(move || {
        App::new().route(
            "/v1/vehicle/values",
            web::get().to(move || async move {
                tokio::time::sleep(delay).await;
                HttpResponse::Ok().json(json!({"values": {"private_party": 1}}))
            }),
        )
    })
}

/// Start a fake vPIC API.
///
/// Makes are returned unsorted with a duplicate; models exist only for HONDA.
pub fn spawn_fake_vpic() -> TestServer {
    actix_test::start(|| {
        App::new()
            .route(
                "/api/vehicles/GetMakesForVehicleType/car",
                web::get().to(|query: web::Query<HashMap<String, String>>| async move {
                    if query.get("format").map(String::as_str) != Some("json") {
                        return HttpResponse::BadRequest().finish();
                    }

                    HttpResponse::Ok().json(json!({
                        "Count": 4,
                        "Message": "Response returned successfully",
                        "SearchCriteria": format!("VehicleType: car | Year: {}",
                            query.get("modelyear").cloned().unwrap_or_default()),
                        "Results": [
                            {"MakeId": 448, "MakeName": "TOYOTA", "VehicleTypeId": 2},
                            {"MakeId": 474, "MakeName": "HONDA", "VehicleTypeId": 2},
                            {"MakeId": 452, "MakeName": "BMW", "VehicleTypeId": 2},
                            {"MakeId": 474, "MakeName": "HONDA", "VehicleTypeId": 2}
                        ]
                    }))
                }),
            )
            .route(
                "/api/vehicles/GetModelsForMakeYear/make/{make}/modelyear/{year}",
                web::get().to(|path: web::Path<(String, String)>| async move {
                    let (make, _year) = path.into_inner();
                    let results = if make.eq_ignore_ascii_case("HONDA") {
                        json!([
                            {"Make_ID": 474, "Make_Name": "HONDA", "Model_ID": 1863, "Model_Name": "Civic"},
                            {"Make_ID": 474, "Make_Name": "HONDA", "Model_ID": 1861, "Model_Name": "Accord"}
                        ])
                    } else {
                        json!([])
                    };

                    HttpResponse::Ok().json(json!({
                        "Count": results.as_array().map(Vec::len).unwrap_or(0),
                        "Results": results
                    }))
                }),
            )
    })
}
