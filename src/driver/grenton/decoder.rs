//! polled grenton status -> cover state

use super::encoder::{get_expression, GATEWAY_TILT_MAX};
use crate::entity::bo::cover_state_bo::MotionStateEnum;
use crate::entity::bo::device_address_bo::{DeviceAddress, DeviceFamily};
use crate::entity::dto::gateway_dto::{StatusQueryDto, StatusReplyDto};

// raw motion codes reported under `status`
const MOTION_CODE_OPENING: i64 = 1;
const MOTION_CODE_CLOSING: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedStatus {
    pub motion: MotionStateEnum,
    pub position: u8,
    pub tilt_position: u8,
}

/// the three `return ...` expressions polled for one cover
pub fn status_query(address: &DeviceAddress, family: DeviceFamily) -> StatusQueryDto {
    let opcodes = family.status_opcodes();
    StatusQueryDto {
        status: get_expression(address, opcodes.motion),
        status_2: get_expression(address, opcodes.position),
        status_3: get_expression(address, opcodes.tilt),
    }
}

pub fn decode(reply: &StatusReplyDto, reversed: bool) -> DecodedStatus {
    let raw_position = clamp_percent(reply.status_2);
    let position = if reversed { 100 - raw_position } else { raw_position };

    // an explicit motion code wins over the idle state derived from position
    let motion = match reply.status.round() as i64 {
        MOTION_CODE_OPENING => MotionStateEnum::Opening,
        MOTION_CODE_CLOSING => MotionStateEnum::Closing,
        _ if position == 0 => MotionStateEnum::Closed,
        _ => MotionStateEnum::Open,
    };

    DecodedStatus {
        motion,
        position,
        tilt_position: tilt_from_gateway(reply.status_3),
    }
}

/// gateway 0-90 degrees to abstract 0-100 tilt
pub fn tilt_from_gateway(raw_tilt: f64) -> u8 {
    clamp_percent(raw_tilt * 100.0 / f64::from(GATEWAY_TILT_MAX))
}

fn clamp_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: f64, status_2: f64, status_3: f64) -> StatusReplyDto {
        StatusReplyDto { status, status_2, status_3 }
    }

    #[test]
    fn test_closing_scenario() {
        let decoded = decode(&reply(2.0, 40.0, 45.0), false);
        assert_eq!(
            decoded,
            DecodedStatus { motion: MotionStateEnum::Closing, position: 40, tilt_position: 50 }
        );
    }

    #[test]
    fn test_idle_motion_from_position() {
        assert_eq!(decode(&reply(0.0, 0.0, 0.0), false).motion, MotionStateEnum::Closed);
        assert_eq!(decode(&reply(0.0, 1.0, 0.0), false).motion, MotionStateEnum::Open);
        // unknown motion codes are idle
        assert_eq!(decode(&reply(5.0, 100.0, 0.0), false).motion, MotionStateEnum::Open);
        // opening overrides closed
        assert_eq!(decode(&reply(1.0, 0.0, 0.0), false).motion, MotionStateEnum::Opening);
    }

    #[test]
    fn test_reversed_position() {
        let decoded = decode(&reply(0.0, 20.0, 0.0), true);
        assert_eq!(decoded.position, 80);
        assert_eq!(decoded.motion, MotionStateEnum::Open);

        // raw 100 on a reversed cover is abstract 0, i.e. closed
        let decoded = decode(&reply(0.0, 100.0, 0.0), true);
        assert_eq!(decoded.position, 0);
        assert_eq!(decoded.motion, MotionStateEnum::Closed);
    }

    #[test]
    fn test_tilt_scaling() {
        for (raw, tilt) in [(0.0, 0u8), (45.0, 50), (90.0, 100)] {
            let decoded = decode(&reply(0.0, 50.0, raw), false);
            assert!((i16::from(decoded.tilt_position) - i16::from(tilt)).abs() <= 1);
        }
        assert_eq!(tilt_from_gateway(120.0), 100);
        assert_eq!(tilt_from_gateway(-3.0), 0);
    }

    #[test]
    fn test_status_query_per_family() {
        let native = DeviceAddress::parse("GATE1->BLI01").unwrap();
        let query = status_query(&native, native.family());
        assert_eq!(query.status, "return GATE1:execute(0, 'BLI01:get(0)')");
        assert_eq!(query.status_2, "return GATE1:execute(0, 'BLI01:get(7)')");
        assert_eq!(query.status_3, "return GATE1:execute(0, 'BLI01:get(8)')");

        let zwave = DeviceAddress::parse("CLU1->ZWA8279").unwrap();
        let query = status_query(&zwave, zwave.family());
        assert_eq!(query.status, "return CLU1:execute(0, 'ZWA8279:get(2)')");
        assert_eq!(query.status_2, "return CLU1:execute(0, 'ZWA8279:get(4)')");
        assert_eq!(query.status_3, "return CLU1:execute(0, 'ZWA8279:get(6)')");
    }
}
