//! Pricing helper endpoints
//!
//! Endpoints:
//! - POST /price-estimate - Placeholder price for a year/make/model
//! - POST /down-payment - Derive down payment amount from percent or vice versa

use actix_web::{web, HttpResponse};

use crate::core::{current_year, Result};
use crate::modules::pricing::{
    models::{DownPaymentRequest, PriceEstimateRequest},
    services::{DownPaymentCalculator, PriceEstimator},
};

/// POST /price-estimate
///
/// # Returns
/// - 200: `PriceEstimate`
/// - 400: Missing make/model or year outside the supported range
pub async fn estimate_price(payload: web::Json<PriceEstimateRequest>) -> Result<HttpResponse> {
    let estimate = PriceEstimator::estimate(&payload, current_year())?;
    Ok(HttpResponse::Ok().json(estimate))
}

/// POST /down-payment
pub async fn down_payment(payload: web::Json<DownPaymentRequest>) -> Result<HttpResponse> {
    let split = DownPaymentCalculator::split(&payload)?;
    Ok(HttpResponse::Ok().json(split))
}

/// Configure pricing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/price-estimate", web::post().to(estimate_price))
        .route("/down-payment", web::post().to(down_payment));
}
