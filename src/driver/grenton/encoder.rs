//! cover intent -> grenton command string
//!
//! every command is a lua call on the gateway object that forwards to the device object:
//! `GATE:execute(0, 'DEVICE:execute(<opcode>, <argument>)')`

use crate::entity::bo::cover_state_bo::{CoverStateBo, MotionStateEnum};
use crate::entity::bo::device_address_bo::{DeviceAddress, DeviceFamily};

const OPCODE_OPEN: u8 = 0;
const OPCODE_CLOSE: u8 = 1;
const OPCODE_STOP: u8 = 3;
const OPCODE_SET_TILT: u8 = 9;

/// grenton lamellas travel 0-90 degrees
pub const GATEWAY_TILT_MAX: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverIntent {
    Open,
    Close,
    Stop,
    SetPosition(u8),
    SetTilt(u8),
    OpenTilt,
    CloseTilt,
}

impl CoverIntent {
    pub fn name(&self) -> &'static str {
        match self {
            CoverIntent::Open => "open",
            CoverIntent::Close => "close",
            CoverIntent::Stop => "stop",
            CoverIntent::SetPosition(_) => "set_position",
            CoverIntent::SetTilt(_) => "set_tilt",
            CoverIntent::OpenTilt => "open_tilt",
            CoverIntent::CloseTilt => "close_tilt",
        }
    }
}

/// wire command plus the local state it implies
/// `None` fields leave the current value untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCommand {
    pub command: String,
    pub motion: Option<MotionStateEnum>,
    pub position: Option<u8>,
    pub tilt_position: Option<u8>,
}

/// build the command for `intent`, positions and tilts above 100 are clamped
pub fn encode(
    intent: CoverIntent,
    address: &DeviceAddress,
    family: DeviceFamily,
    reversed: bool,
    state: &CoverStateBo,
) -> EncodedCommand {
    let (opcode, argument, motion, position, tilt_position) = match intent {
        CoverIntent::Open => (OPCODE_OPEN, 0, Some(MotionStateEnum::Opening), None, None),
        CoverIntent::Close => (OPCODE_CLOSE, 0, Some(MotionStateEnum::Closing), None, None),
        // stop never reports closed, the gateway treats stop-from-closed as a no-op
        CoverIntent::Stop => (OPCODE_STOP, 0, Some(MotionStateEnum::Open), None, None),
        CoverIntent::SetPosition(p) => {
            let p = p.min(100);
            let motion = position_motion(state.position, p, reversed);
            let wire = if reversed { 100 - p } else { p };
            (family.set_position_opcode(), wire, Some(motion), Some(p), None)
        }
        CoverIntent::SetTilt(t) => {
            let t = t.min(100);
            (OPCODE_SET_TILT, tilt_to_gateway(t), None, None, Some(t))
        }
        CoverIntent::OpenTilt => (OPCODE_SET_TILT, GATEWAY_TILT_MAX, None, None, None),
        CoverIntent::CloseTilt => (OPCODE_SET_TILT, 0, None, None, None),
    };

    EncodedCommand {
        command: execute_expression(address, opcode, argument),
        motion,
        position,
        tilt_position,
    }
}

/// direction implied by moving from `previous` to `target`, both abstract
/// a reversed cover closes physically while its abstract position grows
fn position_motion(previous: u8, target: u8, reversed: bool) -> MotionStateEnum {
    match (target > previous, reversed) {
        (true, false) | (false, true) => MotionStateEnum::Opening,
        (true, true) | (false, false) => MotionStateEnum::Closing,
    }
}

/// abstract 0-100 tilt to gateway 0-90 degrees
pub fn tilt_to_gateway(tilt: u8) -> u8 {
    (f64::from(tilt.min(100)) * f64::from(GATEWAY_TILT_MAX) / 100.0).round() as u8
}

pub fn execute_expression(address: &DeviceAddress, opcode: u8, argument: u8) -> String {
    format!(
        "{}:execute(0, '{}:execute({}, {})')",
        address.gateway_object_id, address.device_object_id, opcode, argument
    )
}

pub fn get_expression(address: &DeviceAddress, opcode: u8) -> String {
    format!(
        "return {}:execute(0, '{}:get({})')",
        address.gateway_object_id, address.device_object_id, opcode
    )
}
