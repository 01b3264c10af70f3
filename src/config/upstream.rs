use std::time::Duration;

use super::parse_or;
use crate::core::Result;

pub const DEFAULT_KBB_API_URL: &str = "https://api.kbb.com/v1";
pub const DEFAULT_NHTSA_API_URL: &str = "https://vpic.nhtsa.dot.gov/api";

/// Third-party vehicle data endpoints
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub valuation: ValuationConfig,
    pub catalog_base_url: String,
    pub timeout_secs: u64,
}

/// Kelley Blue Book valuation credentials
#[derive(Clone)]
pub struct ValuationConfig {
    /// The proxy endpoint is disabled when no key is configured
    pub api_key: Option<String>,
    pub base_url: String,
}

impl std::fmt::Debug for ValuationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValuationConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl UpstreamConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            valuation: ValuationConfig {
                api_key: lookup("KBB_API_KEY").filter(|key| !key.trim().is_empty()),
                base_url: lookup("KBB_API_URL")
                    .unwrap_or_else(|| DEFAULT_KBB_API_URL.to_string()),
            },
            catalog_base_url: lookup("NHTSA_API_URL")
                .unwrap_or_else(|| DEFAULT_NHTSA_API_URL.to_string()),
            timeout_secs: parse_or(lookup, "UPSTREAM_TIMEOUT_SECS", 10)?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
