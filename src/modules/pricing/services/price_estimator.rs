use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::info;

use crate::core::{AppError, Result, FIRST_MODEL_YEAR};
use crate::modules::pricing::models::{PriceEstimate, PriceEstimateRequest};

/// Depreciation assumed by the estimate, percent per year
const ESTIMATE_DEPRECIATION_PCT: Decimal = dec!(15);

/// New-vehicle price range for a make
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> Decimal {
        (self.min + self.max) / dec!(2)
    }
}

const DEFAULT_RANGE: PriceRange = PriceRange::new(dec!(25000), dec!(45000));

const BASE_PRICE_RANGES: &[(&str, PriceRange)] = &[
    ("BMW", PriceRange::new(dec!(35000), dec!(85000))),
    ("Mercedes-Benz", PriceRange::new(dec!(35000), dec!(90000))),
    ("Toyota", PriceRange::new(dec!(20000), dec!(40000))),
    ("Honda", PriceRange::new(dec!(20000), dec!(35000))),
    ("Ford", PriceRange::new(dec!(20000), dec!(45000))),
];

/// Rough used-vehicle price from a static table of new prices per make.
///
/// This is a placeholder, not a valuation: the model is only checked for presence
/// and every vehicle loses the same 15 % per year.
pub struct PriceEstimator;

impl PriceEstimator {
    /// Price range for `make`, matched case-insensitively; unknown makes get the default range
    pub fn base_price_range(make: &str) -> PriceRange {
        let make = make.trim();
        BASE_PRICE_RANGES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(make))
            .map(|(_, range)| *range)
            .unwrap_or(DEFAULT_RANGE)
    }

    pub fn estimate(request: &PriceEstimateRequest, current_year: u16) -> Result<PriceEstimate> {
        if request.make.trim().is_empty() {
            return Err(AppError::validation("Make is required"));
        }

        if request.model.trim().is_empty() {
            return Err(AppError::validation("Model is required"));
        }

        if request.year < FIRST_MODEL_YEAR || request.year > current_year {
            return Err(AppError::validation(format!(
                "Year must be between {} and {}",
                FIRST_MODEL_YEAR, current_year
            )));
        }

        let age_years = current_year - request.year;
        let base_price = Self::base_price_range(&request.make).midpoint();
        let retention = Decimal::ONE - ESTIMATE_DEPRECIATION_PCT / dec!(100);
        let estimated_price = (base_price * retention.powu(u64::from(age_years)))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        info!(
            make = %request.make,
            model = %request.model,
            year = request.year,
            estimated_price = %estimated_price,
            "Estimated vehicle price"
        );

        Ok(PriceEstimate {
            base_price,
            age_years,
            estimated_price,
            annual_depreciation: ESTIMATE_DEPRECIATION_PCT,
        })
    }
}
