use std::sync::Arc;

use tracing::{error, info};

use super::vehicle_trait::{VehicleCatalog, VehicleValuation};
use crate::core::{calendar, current_year, AppError, Result, FIRST_MODEL_YEAR};
use crate::modules::vehicles::models::VehicleValueRequest;

/// Message returned to clients when the valuation upstream fails
pub const VALUATION_FAILED: &str = "Failed to fetch vehicle value";

/// Routes vehicle lookups to the catalog and valuation providers
pub struct VehicleService {
    catalog: Arc<dyn VehicleCatalog>,
    valuation: Option<Arc<dyn VehicleValuation>>,
}

impl VehicleService {
    /// Create a new VehicleService; valuation is optional because it needs an API key
    pub fn new(
        catalog: Arc<dyn VehicleCatalog>,
        valuation: Option<Arc<dyn VehicleValuation>>,
    ) -> Self {
        Self { catalog, valuation }
    }

    pub fn is_valuation_configured(&self) -> bool {
        self.valuation.is_some()
    }

    /// Model years offered by the pickers, newest first
    pub fn model_years(&self) -> Vec<u16> {
        calendar::model_years(current_year())
    }

    pub async fn makes(&self, year: u16) -> Result<Vec<String>> {
        Self::validate_year(year)?;

        let makes = self.catalog.makes(year).await.map_err(|e| {
            error!(
                catalog = %self.catalog.name(),
                year = year,
                error = %e,
                "Failed to fetch makes"
            );
            e
        })?;

        info!(year = year, count = makes.len(), "Fetched makes");
        Ok(makes)
    }

    pub async fn models(&self, year: u16, make: &str) -> Result<Vec<String>> {
        Self::validate_year(year)?;

        let make = make.trim();
        if make.is_empty() {
            return Err(AppError::validation("Make is required"));
        }

        let models = self.catalog.models(year, make).await.map_err(|e| {
            error!(
                catalog = %self.catalog.name(),
                year = year,
                make = %make,
                error = %e,
                "Failed to fetch models"
            );
            e
        })?;

        info!(year = year, make = %make, count = models.len(), "Fetched models");
        Ok(models)
    }

    /// Proxy a valuation lookup.
    ///
    /// Upstream failures are logged with their cause and surfaced to the caller
    /// as a generic gateway error.
    pub async fn vehicle_value(&self, request: &VehicleValueRequest) -> Result<serde_json::Value> {
        let valuation = self.valuation.as_ref().ok_or_else(|| {
            AppError::configuration("Vehicle valuation is not configured (KBB_API_KEY not set)")
        })?;

        info!(
            provider = %valuation.name(),
            year = request.year,
            make = %request.make,
            model = %request.model,
            mileage = request.mileage,
            "Requesting vehicle value"
        );

        valuation.vehicle_value(request).await.map_err(|e| {
            error!(
                provider = %valuation.name(),
                error = %e,
                "Error fetching vehicle value"
            );
            AppError::gateway(VALUATION_FAILED)
        })
    }

    fn validate_year(year: u16) -> Result<()> {
        // One year ahead: next model year vehicles go on sale early
        let latest = current_year().saturating_add(1);
        if year < FIRST_MODEL_YEAR || year > latest {
            return Err(AppError::validation(format!(
                "Year must be between {} and {}",
                FIRST_MODEL_YEAR, latest
            )));
        }
        Ok(())
    }
}
