//! 设备配置 Bo: one configured grenton cover

use serde::Deserialize;

pub const DEFAULT_OBJECT_NAME: &str = "Grenton Cover";

#[derive(Debug, Clone, Deserialize)]
pub struct CoverConfigBo {
    // gateway http listener, opaque to the engine
    pub api_endpoint: String,
    // compound id, gateway object and device object joined by "->"
    pub grenton_id: String,
    // position semantics are mirrored (p' = 100 - p) when set
    #[serde(default)]
    pub reversed: bool,
    // 设备名称
    #[serde(default = "default_object_name")]
    pub object_name: String,
    // roll back the optimistic state when a command cannot be delivered
    #[serde(default)]
    pub strict: bool,
}

fn default_object_name() -> String {
    DEFAULT_OBJECT_NAME.to_string()
}

impl CoverConfigBo {
    pub fn new(api_endpoint: &str, grenton_id: &str, reversed: bool) -> Self {
        CoverConfigBo {
            api_endpoint: api_endpoint.to_string(),
            grenton_id: grenton_id.to_string(),
            reversed,
            object_name: default_object_name(),
            strict: false,
        }
    }
}
