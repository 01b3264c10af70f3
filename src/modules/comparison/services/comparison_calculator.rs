use rust_decimal::Decimal;
use tracing::{debug, info};

use super::loan_calculator::LoanCalculator;
use crate::core::{AppError, Result};
use crate::modules::comparison::models::{
    ChartData, ComparisonInput, ComparisonResult, Recommendation,
};

/// Reported amounts are rounded to cents
const CENTS: u32 = 2;

/// Month-by-month buy vs. lease simulation over the loan term
pub struct ComparisonCalculator;

impl ComparisonCalculator {
    /// Compare buying with a loan against back-to-back leasing.
    ///
    /// The horizon is the loan term. The lessee invests the down payment difference
    /// up front and the loan/lease payment difference every month; the investment
    /// compounds monthly at `investment_return / 12`. Each lease completed inside the
    /// horizon costs `term · payment + down payment`; a lease cut short by the end of
    /// the horizon only costs its monthly payments.
    ///
    /// Inputs that pass validation can still compound past the range of `Decimal`
    /// (high returns over long terms); those are rejected as validation errors.
    ///
    /// The last point of each chart series equals the matching net summary value.
    pub fn compare(input: &ComparisonInput) -> Result<ComparisonResult> {
        input.validate()?;

        let horizon = input.loan_term_months;
        let loan_amount = input.car_price - input.down_payment;
        let monthly_loan_payment =
            LoanCalculator::monthly_payment(loan_amount, input.interest_rate, horizon)?;

        debug!(
            loan_amount = %loan_amount,
            monthly_loan_payment = %monthly_loan_payment,
            horizon_months = horizon,
            "Computed loan payment"
        );

        let down_payment_difference = input.down_payment - input.lease_down_payment;
        let monthly_investment = monthly_loan_payment - input.lease_payment;
        let investment_growth = Decimal::ONE + LoanCalculator::monthly_rate(input.investment_return);

        let mut investment_value = down_payment_difference;
        let mut buying = Vec::with_capacity(horizon as usize);
        let mut leasing = Vec::with_capacity(horizon as usize);

        for month in 1..=horizon {
            investment_value = investment_value
                .checked_add(monthly_investment)
                .and_then(|v| v.checked_mul(investment_growth))
                .ok_or_else(|| Self::out_of_range(month))?;

            let buy_cost = Self::cumulative_loan_cost(input, monthly_loan_payment, month)
                - LoanCalculator::residual_value(input.car_price, month, input.annual_depreciation);
            let lease_cost = Self::cumulative_lease_cost(input, month)
                .checked_sub(investment_value)
                .ok_or_else(|| Self::out_of_range(month))?;

            buying.push(buy_cost);
            leasing.push(lease_cost);
        }

        let total_loan_cost = Self::cumulative_loan_cost(input, monthly_loan_payment, horizon);
        let residual_value_at_loan_end =
            LoanCalculator::residual_value(input.car_price, horizon, input.annual_depreciation);
        let residual_value_at_lease_end = LoanCalculator::residual_value(
            input.car_price,
            input.lease_term_months,
            input.annual_depreciation,
        );
        let net_buying_cost = total_loan_cost - residual_value_at_loan_end;

        let total_lease_payments = Self::cumulative_lease_cost(input, horizon);
        let net_lease_cost = total_lease_payments
            .checked_sub(investment_value)
            .ok_or_else(|| Self::out_of_range(horizon))?;

        let recommendation = if net_lease_cost < net_buying_cost {
            Recommendation::Lease
        } else {
            Recommendation::Buy
        };

        info!(
            net_buying_cost = %net_buying_cost.round_dp(CENTS),
            net_lease_cost = %net_lease_cost.round_dp(CENTS),
            recommendation = %recommendation,
            "Buy vs. lease comparison completed"
        );

        Ok(ComparisonResult {
            loan_amount: loan_amount.round_dp(CENTS),
            monthly_loan_payment: monthly_loan_payment.round_dp(CENTS),
            total_loan_cost: total_loan_cost.round_dp(CENTS),
            residual_value_at_lease_end: residual_value_at_lease_end.round_dp(CENTS),
            residual_value_at_loan_end: residual_value_at_loan_end.round_dp(CENTS),
            net_buying_cost: net_buying_cost.round_dp(CENTS),
            total_lease_payments: total_lease_payments.round_dp(CENTS),
            down_payment_difference: down_payment_difference.round_dp(CENTS),
            monthly_investment: monthly_investment.round_dp(CENTS),
            investment_value: investment_value.round_dp(CENTS),
            net_lease_cost: net_lease_cost.round_dp(CENTS),
            recommendation,
            chart: ChartData::new(
                buying.into_iter().map(|v| v.round_dp(CENTS)).collect(),
                leasing.into_iter().map(|v| v.round_dp(CENTS)).collect(),
            ),
        })
    }

    /// Down payment plus `month` loan payments
    fn cumulative_loan_cost(input: &ComparisonInput, monthly_payment: Decimal, month: u32) -> Decimal {
        monthly_payment * Decimal::from(month) + input.down_payment
    }

    /// Lease payments and lease down payments made through `month` (1-based).
    ///
    /// A lease's down payment is counted once the lease completes, so the cost at the
    /// end of the horizon is `completed · (term · payment + down) + partial · payment`.
    pub fn cumulative_lease_cost(input: &ComparisonInput, month: u32) -> Decimal {
        let completed = Self::leases_completed(month, input.lease_term_months);

        input.lease_down_payment * Decimal::from(completed)
            + input.lease_payment * Decimal::from(month)
    }

    /// Number of whole leases finished by the end of `month`
    fn leases_completed(month: u32, lease_term: u32) -> u32 {
        if lease_term == 0 {
            return 0;
        }
        month / lease_term
    }

    fn out_of_range(month: u32) -> AppError {
        AppError::validation(format!(
            "Investment value exceeds the supported range at month {}; lower the investment return or the term",
            month
        ))
    }
}
