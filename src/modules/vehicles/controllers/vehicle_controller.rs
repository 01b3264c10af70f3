//! Vehicle lookup endpoints
//!
//! Endpoints:
//! - GET /vehicles/years - Model years for the year picker
//! - GET /vehicles/makes?year= - Makes for a model year
//! - GET /vehicles/models?year=&make= - Models of a make in a model year
//! - POST /vehicle-value - Valuation proxy (bearer token stays server-side)

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::core::Result;
use crate::modules::vehicles::{
    models::{MakesQuery, ModelsQuery, VehicleValueRequest},
    services::VehicleService,
};

#[derive(Debug, Serialize)]
pub struct YearsResponse {
    pub years: Vec<u16>,
}

#[derive(Debug, Serialize)]
pub struct MakesResponse {
    pub year: u16,
    pub makes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub year: u16,
    pub make: String,
    pub models: Vec<String>,
}

/// GET /vehicles/years
pub async fn get_years(service: web::Data<VehicleService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(YearsResponse {
        years: service.model_years(),
    }))
}

/// GET /vehicles/makes?year={year}
///
/// # Returns
/// - 200: Sorted make names
/// - 400: Year outside the supported range
/// - 502: Catalog upstream failed
pub async fn get_makes(
    service: web::Data<VehicleService>,
    query: web::Query<MakesQuery>,
) -> Result<HttpResponse> {
    let makes = service.makes(query.year).await?;

    Ok(HttpResponse::Ok().json(MakesResponse {
        year: query.year,
        makes,
    }))
}

/// GET /vehicles/models?year={year}&make={make}
pub async fn get_models(
    service: web::Data<VehicleService>,
    query: web::Query<ModelsQuery>,
) -> Result<HttpResponse> {
    let ModelsQuery { year, make } = query.into_inner();
    let models = service.models(year, &make).await?;

    Ok(HttpResponse::Ok().json(ModelsResponse {
        year,
        make: make.trim().to_string(),
        models,
    }))
}

/// POST /vehicle-value
///
/// # Returns
/// - 200: Valuation document exactly as returned by the provider
/// - 500: Valuation not configured
/// - 502: Provider failed
pub async fn vehicle_value(
    service: web::Data<VehicleService>,
    payload: web::Json<VehicleValueRequest>,
) -> Result<HttpResponse> {
    let value = service.vehicle_value(&payload).await?;
    Ok(HttpResponse::Ok().json(value))
}

/// Configure vehicle routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/vehicles")
            .route("/years", web::get().to(get_years))
            .route("/makes", web::get().to(get_makes))
            .route("/models", web::get().to(get_models)),
    )
    .route("/vehicle-value", web::post().to(vehicle_value));
}
