//! 设备状态实体类: local cover state owned by one adapter

use std::time::Instant;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionStateEnum {
    Open,
    Closed,
    Opening,
    Closing,
    Unknown,
}

/// positions are kept in the abstract frame: 0 closed, 100 open, already de-inverted
#[derive(Debug, Clone, PartialEq)]
pub struct CoverStateBo {
    pub motion: MotionStateEnum,
    pub position: u8,
    pub tilt_position: u8,
    pub last_command_at: Option<Instant>,
}

impl Default for CoverStateBo {
    fn default() -> Self {
        CoverStateBo {
            motion: MotionStateEnum::Unknown,
            position: 0,
            tilt_position: 0,
            last_command_at: None,
        }
    }
}
