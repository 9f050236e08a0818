//! device state data transmission object

use serde::{Deserialize, Serialize};

use crate::entity::bo::cover_state_bo::MotionStateEnum;

/// cover state as exposed to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverStateDto {
    pub unique_id: String,
    pub name: String,
    pub device_class: String,
    pub motion: MotionStateEnum,
    pub is_closed: bool,
    pub is_opening: bool,
    pub is_closing: bool,
    pub position: u8,
    pub tilt_position: u8,
}
