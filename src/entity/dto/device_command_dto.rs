use serde::{Deserialize, Serialize};
use serde_json::Value;

/// used for commanding a cover through the cover manager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverCommandDto {
    // cover unique id, `grenton_<device object>`
    pub device_id: String,
    // open | close | stop | set_position | set_tilt | open_tilt | close_tilt
    pub action: String,
    #[serde(default)]
    pub params: Value,
}

impl CoverCommandDto {
    pub fn new(device_id: &str, action: &str, params: Value) -> Self {
        CoverCommandDto {
            device_id: device_id.to_string(),
            action: action.to_string(),
            params,
        }
    }
}
