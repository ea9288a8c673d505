use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SUCCESS_MESSAGE: &str = "✅ Datos obtenidos correctamente";

/// Success envelope; `data` is the upstream payload, untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub message: String,
    pub data: Value,
}

impl AvailabilityResponse {
    pub fn success(data: Value) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}
