use serde::{Deserialize, Serialize};

fn default_condition() -> String {
    "excellent".to_string()
}

/// Body of POST /vehicle-value, forwarded as query parameters to the valuation API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleValueRequest {
    pub year: u16,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub mileage: u32,
    #[serde(default = "default_condition")]
    pub condition: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MakesQuery {
    pub year: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelsQuery {
    pub year: u16,
    pub make: String,
}

/// Envelope of every vPIC response
#[derive(Debug, Deserialize)]
pub(crate) struct VpicResponse<T> {
    #[serde(rename = "Results", default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VpicMake {
    #[serde(rename = "MakeName")]
    pub make_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VpicModel {
    #[serde(rename = "Model_Name")]
    pub model_name: String,
}
