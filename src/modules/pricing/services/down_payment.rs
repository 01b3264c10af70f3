use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::core::{AppError, Result};
use crate::modules::pricing::models::{DownPaymentRequest, DownPaymentSplit};

/// Keeps the down payment amount and its percentage of the price in step.
/// Both directions round to whole units, half away from zero.
pub struct DownPaymentCalculator;

impl DownPaymentCalculator {
    /// Whole-dollar amount for `percent` of `car_price`
    pub fn amount_from_percent(car_price: Decimal, percent: Decimal) -> Result<Decimal> {
        Self::validate_price(car_price)?;

        if percent < Decimal::ZERO || percent > dec!(100) {
            return Err(AppError::validation(
                "Down payment percentage must be between 0 and 100",
            ));
        }

        let amount = car_price.checked_mul(percent).ok_or_else(|| {
            AppError::validation(format!("Car price {} is too large", car_price))
        })?;

        Ok(Self::round_whole(amount / dec!(100)))
    }

    /// Whole-number percentage of `car_price` represented by `amount`
    pub fn percent_from_amount(car_price: Decimal, amount: Decimal) -> Result<Decimal> {
        Self::validate_price(car_price)?;

        if amount < Decimal::ZERO || amount > car_price {
            return Err(AppError::validation(
                "Down payment must be between 0 and the car price",
            ));
        }

        Ok(Self::round_whole(amount / car_price * dec!(100)))
    }

    /// Resolve a request carrying exactly one of `amount` or `percent`
    pub fn split(request: &DownPaymentRequest) -> Result<DownPaymentSplit> {
        match (request.amount, request.percent) {
            (Some(amount), None) => Ok(DownPaymentSplit {
                amount,
                percent: Self::percent_from_amount(request.car_price, amount)?,
            }),
            (None, Some(percent)) => Ok(DownPaymentSplit {
                amount: Self::amount_from_percent(request.car_price, percent)?,
                percent,
            }),
            _ => Err(AppError::validation(
                "Provide exactly one of down payment amount or percent",
            )),
        }
    }

    fn validate_price(car_price: Decimal) -> Result<()> {
        if car_price <= Decimal::ZERO {
            return Err(AppError::validation("Car price must be positive"));
        }
        Ok(())
    }

    fn round_whole(value: Decimal) -> Decimal {
        value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}
