use actix_web::{web, HttpRequest};

use crate::core::{AppError, Result};

pub mod comparison;
pub mod health;
pub mod pricing;
pub mod vehicles;

/// Register every route: `/health` at the root, everything else under `/api`.
///
/// Handlers under `/vehicles`, `/vehicle-value` and `/health` expect a
/// `web::Data<VehicleService>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure).service(
        web::scope("/api")
            .configure(comparison::configure)
            .configure(pricing::configure)
            .configure(vehicles::configure),
    )
    .default_service(web::to(route_not_found));
}

async fn route_not_found(req: HttpRequest) -> Result<web::Json<()>> {
    Err(AppError::not_found(format!("{} {}", req.method(), req.path())))
}
