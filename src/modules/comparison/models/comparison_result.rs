use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which option has the lower net cost over the loan horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Lease,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Buy => write!(f, "buy"),
            Recommendation::Lease => write!(f, "lease"),
        }
    }
}

/// Summary of a buy-vs-lease comparison, amounts rounded to cents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub loan_amount: Decimal,
    pub monthly_loan_payment: Decimal,
    /// All loan payments plus the down payment
    pub total_loan_cost: Decimal,
    pub residual_value_at_lease_end: Decimal,
    pub residual_value_at_loan_end: Decimal,
    /// Total loan cost minus what the car is still worth at loan end
    pub net_buying_cost: Decimal,
    /// Lease payments and lease down payments over the loan horizon
    pub total_lease_payments: Decimal,
    pub down_payment_difference: Decimal,
    /// Monthly amount the lessee invests instead of paying the loan (negative when leasing costs more)
    pub monthly_investment: Decimal,
    pub investment_value: Decimal,
    pub net_lease_cost: Decimal,
    pub recommendation: Recommendation,
    pub chart: ChartData,
}

/// Two parallel monthly series ready for a line chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    /// Month numbers, 1-based
    pub labels: Vec<u32>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<Decimal>,
}

impl ChartData {
    pub const BUYING_LABEL: &'static str = "Net Cost of Buying (Including Car Value)";
    pub const LEASING_LABEL: &'static str = "Net Cost of Leasing (Including Investment Returns)";

    pub fn new(buying: Vec<Decimal>, leasing: Vec<Decimal>) -> Self {
        let labels = (1..=buying.len() as u32).collect();

        Self {
            labels,
            datasets: vec![
                ChartDataset {
                    label: Self::BUYING_LABEL.to_string(),
                    data: buying,
                },
                ChartDataset {
                    label: Self::LEASING_LABEL.to_string(),
                    data: leasing,
                },
            ],
        }
    }

    pub fn buying(&self) -> &[Decimal] {
        self.dataset(Self::BUYING_LABEL)
    }

    pub fn leasing(&self) -> &[Decimal] {
        self.dataset(Self::LEASING_LABEL)
    }

    fn dataset(&self, label: &str) -> &[Decimal] {
        self.datasets
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.data.as_slice())
            .unwrap_or(&[])
    }
}
