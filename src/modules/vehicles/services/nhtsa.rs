use super::vehicle_trait::VehicleCatalog;
use crate::config::upstream::DEFAULT_NHTSA_API_URL;
use crate::core::{AppError, Result};
use crate::modules::vehicles::models::{VpicMake, VpicModel, VpicResponse};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// NHTSA vPIC catalog client
///
/// Public API, no credentials. Documentation: https://vpic.nhtsa.dot.gov/api/
pub struct NhtsaClient {
    client: Client,
    base_url: Url,
}

impl NhtsaClient {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self> {
        let raw = base_url.unwrap_or_else(|| DEFAULT_NHTSA_API_URL.to_string());
        let base_url = Url::parse(&raw)
            .map_err(|e| AppError::configuration(format!("Invalid NHTSA_API_URL '{}': {}", raw, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "NHTSA_API_URL '{}' cannot be used as a base URL",
                raw
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build NHTSA client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// `{base}/vehicles/GetMakesForVehicleType/car?format=json&modelyear={year}`
    fn makes_url(&self, year: u16) -> Url {
        let mut url = self.endpoint(&["vehicles", "GetMakesForVehicleType", "car"]);
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("modelyear", &year.to_string());
        url
    }

    /// `{base}/vehicles/GetModelsForMakeYear/make/{make}/modelyear/{year}?format=json`
    fn models_url(&self, year: u16, make: &str) -> Url {
        let year = year.to_string();
        let mut url = self.endpoint(&[
            "vehicles",
            "GetModelsForMakeYear",
            "make",
            make,
            "modelyear",
            &year,
        ]);
        url.query_pairs_mut().append_pair("format", "json");
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<VpicResponse<T>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                AppError::gateway(format!("NHTSA unavailable: {}", e))
            } else {
                AppError::gateway(format!("NHTSA API request failed: {}", e))
            }
        })?;

        let status_code = response.status();
        if !status_code.is_success() {
            return Err(AppError::gateway(format!(
                "NHTSA API error - HTTP {}",
                status_code.as_u16()
            )));
        }

        response
            .json::<VpicResponse<T>>()
            .await
            .map_err(|e| AppError::gateway(format!("Failed to parse NHTSA response: {}", e)))
    }

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names.dedup();
        names
    }
}

#[async_trait]
impl VehicleCatalog for NhtsaClient {
    async fn makes(&self, year: u16) -> Result<Vec<String>> {
        let response: VpicResponse<VpicMake> = self.fetch(self.makes_url(year)).await?;
        Ok(Self::sorted(
            response.results.into_iter().map(|m| m.make_name).collect(),
        ))
    }

    async fn models(&self, year: u16, make: &str) -> Result<Vec<String>> {
        let response: VpicResponse<VpicModel> = self.fetch(self.models_url(year, make)).await?;
        Ok(Self::sorted(
            response.results.into_iter().map(|m| m.model_name).collect(),
        ))
    }

    fn name(&self) -> &str {
        "nhtsa"
    }
}
