use super::vehicle_trait::VehicleValuation;
use crate::config::upstream::DEFAULT_KBB_API_URL;
use crate::core::{AppError, Result};
use crate::modules::vehicles::models::VehicleValueRequest;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Kelley Blue Book valuation client
///
/// Forwards vehicle lookups to `GET {base_url}/vehicle/values` with bearer-token auth.
pub struct KbbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl KbbClient {
    /// Create a new KBB client
    ///
    /// # Arguments
    /// * `api_key` - Bearer token (from KBB_API_KEY env var)
    /// * `base_url` - API base URL (defaults to the production v1 API)
    /// * `timeout` - Per-request timeout
    pub fn new(api_key: String, base_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build KBB client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_KBB_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    fn values_url(&self) -> String {
        format!("{}/vehicle/values", self.base_url)
    }
}

#[async_trait]
impl VehicleValuation for KbbClient {
    async fn vehicle_value(&self, request: &VehicleValueRequest) -> Result<serde_json::Value> {
        let url = self.values_url();

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .query(&[
                ("year", request.year.to_string()),
                ("make", request.make.clone()),
                ("model", request.model.clone()),
                ("mileage", request.mileage.to_string()),
                ("condition", request.condition.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::gateway(format!(
                        "KBB unavailable: {} ({})",
                        if e.is_timeout() {
                            "timeout"
                        } else {
                            "connection failed"
                        },
                        e
                    ))
                } else {
                    AppError::gateway(format!("KBB API request failed: {}", e))
                }
            })?;

        let status_code = response.status();
        let response_body = response
            .text()
            .await
            .map_err(|e| AppError::gateway(format!("Failed to read KBB response: {}", e)))?;

        if !status_code.is_success() {
            return Err(AppError::gateway(format!(
                "KBB API error - HTTP {} ({})",
                status_code.as_u16(),
                response_body
            )));
        }

        serde_json::from_str(&response_body)
            .map_err(|e| AppError::gateway(format!("Failed to parse KBB response: {}", e)))
    }

    fn name(&self) -> &str {
        "kbb"
    }
}
