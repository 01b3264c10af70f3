use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::core::{AppError, Result};

const MONTHS_PER_YEAR: u32 = 12;

/// Loan amortization and vehicle depreciation primitives
pub struct LoanCalculator;

impl LoanCalculator {
    /// Monthly periodic rate for an annual percentage rate (4.5 -> 0.00375)
    pub fn monthly_rate(annual_rate_pct: Decimal) -> Decimal {
        annual_rate_pct / dec!(1200)
    }

    /// Level monthly payment that amortizes `principal` over `months`.
    ///
    /// Annuity formula `P·r·(1+r)^n / ((1+r)^n − 1)`, evaluated as
    /// `P·r / (1 − (1+r)^−n)` so large growth factors cannot overflow.
    /// A zero rate, or one so small the growth factor rounds to one, repays
    /// the principal in equal parts.
    pub fn monthly_payment(principal: Decimal, annual_rate_pct: Decimal, months: u32) -> Result<Decimal> {
        if months == 0 {
            return Err(AppError::validation("Loan term must be at least one month"));
        }

        let straight_line = principal / Decimal::from(months);
        let rate = Self::monthly_rate(annual_rate_pct);
        if rate.is_zero() {
            return Ok(straight_line);
        }

        let growth = (Decimal::ONE + rate)
            .checked_powu(u64::from(months))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Interest rate {}% over {} months is out of range",
                    annual_rate_pct, months
                ))
            })?;

        let discount = Decimal::ONE - Decimal::ONE / growth;
        if discount.is_zero() {
            return Ok(straight_line);
        }

        Ok(principal * rate / discount)
    }

    /// Value of a vehicle bought at `price` after `months` of compounding depreciation.
    ///
    /// `price · (1 − d/100)^(months/12)`; whole years use an integer power and only the
    /// remaining months go through the fractional power.
    pub fn residual_value(price: Decimal, months: u32, annual_depreciation_pct: Decimal) -> Decimal {
        let retention = Decimal::ONE - annual_depreciation_pct / dec!(100);
        if retention <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let whole_years = months / MONTHS_PER_YEAR;
        let remaining_months = months % MONTHS_PER_YEAR;

        let mut factor = retention.powu(u64::from(whole_years));
        if remaining_months > 0 {
            let fraction = Decimal::from(remaining_months) / Decimal::from(MONTHS_PER_YEAR);
            factor *= retention.powd(fraction);
        }

        price * factor
    }
}
