use crate::core::Result;
use crate::modules::vehicles::models::VehicleValueRequest;
use async_trait::async_trait;

/// Third-party vehicle valuation API
#[async_trait]
pub trait VehicleValuation: Send + Sync {
    /// Fetch the valuation document for a vehicle; the body is passed through untouched
    async fn vehicle_value(&self, request: &VehicleValueRequest) -> Result<serde_json::Value>;

    /// Get provider name
    fn name(&self) -> &str;
}

/// Year/make/model catalog used to populate vehicle pickers
#[async_trait]
pub trait VehicleCatalog: Send + Sync {
    /// Car makes offered in a model year, sorted
    async fn makes(&self, year: u16) -> Result<Vec<String>>;

    /// Models of a make in a model year, sorted
    async fn models(&self, year: u16, make: &str) -> Result<Vec<String>>;

    /// Get provider name
    fn name(&self) -> &str;
}
