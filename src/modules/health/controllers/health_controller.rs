use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::vehicles::VehicleService;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub application: String,
    pub valuation: String,
}

/// GET /health - Liveness probe
/// Returns 200 if the application is alive (can respond to requests)
/// Reports whether the valuation proxy has credentials; upstreams are not contacted
pub async fn health_check(service: web::Data<VehicleService>) -> impl Responder {
    let valuation = if service.is_valuation_configured() {
        "configured"
    } else {
        "not_configured"
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            application: "healthy".to_string(),
            valuation: valuation.to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
