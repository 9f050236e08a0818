//! grenton object addressing
//! a cover is addressed as `<gateway object>-><device object>`, e.g. `CLU220000000->ZWA8279`

use crate::common::error::CoverError;

const ID_DELIMITER: &str = "->";
const ZWAVE_ADAPTER_PREFIX: &str = "ZWA";

/// the pair of grenton objects a command travels through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAddress {
    pub gateway_object_id: String,
    pub device_object_id: String,
}

impl DeviceAddress {
    /// split a compound id, exactly one delimiter and two non-empty parts are accepted
    pub fn parse(raw: &str) -> Result<Self, CoverError> {
        let parts: Vec<&str> = raw.split(ID_DELIMITER).collect();
        match parts.as_slice() {
            [gateway, device] if !gateway.is_empty() && !device.is_empty() => Ok(DeviceAddress {
                gateway_object_id: gateway.to_string(),
                device_object_id: device.to_string(),
            }),
            _ => Err(CoverError::malformed_identifier(raw)),
        }
    }

    pub fn family(&self) -> DeviceFamily {
        DeviceFamily::classify(&self.device_object_id)
    }
}

/// opcode statuses read while polling, in `status`, `status_2`, `status_3` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOpcodes {
    pub motion: u8,
    pub position: u8,
    pub tilt: u8,
}

/// roller shutter flavour, decides which opcode table is used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFamily {
    // native grenton roller shutter module
    Native,
    // z-wave roller shutter bridged through a ZWA adapter object
    ZWaveAdapter,
}

impl DeviceFamily {
    pub fn classify(device_object_id: &str) -> Self {
        if device_object_id.starts_with(ZWAVE_ADAPTER_PREFIX) {
            DeviceFamily::ZWaveAdapter
        } else {
            DeviceFamily::Native
        }
    }

    pub fn set_position_opcode(&self) -> u8 {
        match self {
            DeviceFamily::Native => 10,
            DeviceFamily::ZWaveAdapter => 7,
        }
    }

    pub fn status_opcodes(&self) -> StatusOpcodes {
        match self {
            DeviceFamily::Native => StatusOpcodes { motion: 0, position: 7, tilt: 8 },
            DeviceFamily::ZWaveAdapter => StatusOpcodes { motion: 2, position: 4, tilt: 6 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::ErrorCode;

    #[test]
    fn test_parse() {
        let address = DeviceAddress::parse("GATE1->BLI01").unwrap();
        assert_eq!(address.gateway_object_id, "GATE1");
        assert_eq!(address.device_object_id, "BLI01");
        assert_eq!(address.family(), DeviceFamily::Native);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["GATE1BLI01", "GATE1->", "->BLI01", "A->B->C", "", "GATE1-BLI01"] {
            let err = DeviceAddress::parse(raw).unwrap_err();
            assert_eq!(err.code, ErrorCode::MalformedIdentifier, "input {:?}", raw);
        }
    }

    #[test]
    fn test_family_tables() {
        assert_eq!(DeviceFamily::classify("ZWA8279"), DeviceFamily::ZWaveAdapter);
        assert_eq!(DeviceFamily::classify("ROL3345"), DeviceFamily::Native);
        // prefix test is case sensitive
        assert_eq!(DeviceFamily::classify("zwa8279"), DeviceFamily::Native);

        assert_eq!(DeviceFamily::ZWaveAdapter.set_position_opcode(), 7);
        assert_eq!(DeviceFamily::Native.set_position_opcode(), 10);
        assert_eq!(
            DeviceFamily::ZWaveAdapter.status_opcodes(),
            StatusOpcodes { motion: 2, position: 4, tilt: 6 }
        );
        assert_eq!(
            DeviceFamily::Native.status_opcodes(),
            StatusOpcodes { motion: 0, position: 7, tilt: 8 }
        );
    }
}
