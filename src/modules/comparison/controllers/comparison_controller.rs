//! HTTP endpoint for the buy vs. lease comparison
//!
//! Endpoints:
//! - POST /comparison - Run the month-by-month comparison for a scenario

use actix_web::{web, HttpResponse};

use crate::core::Result;
use crate::modules::comparison::{models::ComparisonInput, services::ComparisonCalculator};

/// POST /comparison
///
/// Every field of the body is optional; omitted fields take the default scenario.
///
/// # Returns
/// - 200: Summary values plus the two chart series
/// - 400: Invalid scenario (zero-length term, down payment above price, ...)
pub async fn compare(payload: web::Json<ComparisonInput>) -> Result<HttpResponse> {
    let input = payload.into_inner();

    tracing::debug!(
        car_price = %input.car_price,
        loan_term_months = input.loan_term_months,
        lease_term_months = input.lease_term_months,
        "Comparison requested"
    );

    let result = ComparisonCalculator::compare(&input)?;

    Ok(HttpResponse::Ok().json(result))
}

/// Configure comparison routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/comparison", web::post().to(compare));
}
