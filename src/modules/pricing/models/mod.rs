use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vehicle identity used for the placeholder price estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEstimateRequest {
    pub year: u16,
    pub make: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEstimate {
    /// Midpoint of the make's new-price range
    pub base_price: Decimal,
    pub age_years: u16,
    /// Base price depreciated by `age_years`, whole dollars
    pub estimated_price: Decimal,
    /// Depreciation rate assumed by the estimate, in percent
    pub annual_depreciation: Decimal,
}

/// Either side of the down payment, the other is derived from `car_price`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownPaymentRequest {
    pub car_price: Decimal,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub percent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownPaymentSplit {
    pub amount: Decimal,
    pub percent: Decimal,
}
