use std::sync::Arc;

use super::debounce::should_poll;
use super::decoder::{decode, status_query};
use super::encoder::{encode, CoverIntent, EncodedCommand};
use crate::common::error::CoverError;
use crate::driver::traits::{Clock, GatewayTransport};
use crate::entity::bo::cover_config_bo::CoverConfigBo;
use crate::entity::bo::cover_state_bo::{CoverStateBo, MotionStateEnum};
use crate::entity::bo::device_address_bo::{DeviceAddress, DeviceFamily};
use crate::entity::dto::device_state_dto::CoverStateDto;
use crate::entity::dto::gateway_dto::GatewayCommandDto;
use crate::{debug, error, warn};

const LOG_TAG: &str = "grenton_cover";
const DEVICE_CLASS: &str = "blind";
const UNIQUE_ID_PREFIX: &str = "grenton_";

/// grenton roller shutter driven through the gateway http listener
/// - commands update the local state optimistically, before the gateway answers
/// - polls overwrite the local state, unless a command was sent in the last 2 seconds
/// - `&mut self` on every operation keeps one caller per cover at a time
pub struct GrentonCover {
    api_endpoint: String,
    address: DeviceAddress,
    family: DeviceFamily,
    reversed: bool,
    strict: bool,
    object_name: String,
    unique_id: String,
    state: CoverStateBo,
    transport: Arc<dyn GatewayTransport>,
    clock: Arc<dyn Clock>,
}

impl GrentonCover {
    /// fails with `MalformedIdentifier` when `grenton_id` is not `GATE->DEVICE`
    pub fn new(
        config: &CoverConfigBo,
        transport: Arc<dyn GatewayTransport>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CoverError> {
        let address = DeviceAddress::parse(&config.grenton_id)?;
        let family = address.family();
        let unique_id = format!("{}{}", UNIQUE_ID_PREFIX, address.device_object_id);
        Ok(GrentonCover {
            api_endpoint: config.api_endpoint.clone(),
            address,
            family,
            reversed: config.reversed,
            strict: config.strict,
            object_name: config.object_name.clone(),
            unique_id,
            state: CoverStateBo::default(),
            transport,
            clock,
        })
    }

    pub async fn open(&mut self) {
        self.execute(CoverIntent::Open).await
    }

    pub async fn close(&mut self) {
        self.execute(CoverIntent::Close).await
    }

    pub async fn stop(&mut self) {
        self.execute(CoverIntent::Stop).await
    }

    /// 0 closed, 100 open, as seen by the host
    pub async fn set_position(&mut self, position: u8) {
        self.execute(CoverIntent::SetPosition(position)).await
    }

    pub async fn set_tilt(&mut self, tilt_position: u8) {
        self.execute(CoverIntent::SetTilt(tilt_position)).await
    }

    pub async fn open_tilt(&mut self) {
        self.execute(CoverIntent::OpenTilt).await
    }

    pub async fn close_tilt(&mut self) {
        self.execute(CoverIntent::CloseTilt).await
    }

    /// poll the gateway and apply its status
    /// a failed poll marks the motion unknown and keeps position and tilt
    pub async fn refresh(&mut self) {
        if !should_poll(self.state.last_command_at, self.clock.now()) {
            debug!(LOG_TAG, "{} skip poll, command sent less than 2s ago", self.unique_id);
            return;
        }

        let query = status_query(&self.address, self.family);
        let result = self.transport.get(&self.api_endpoint, &query).await;
        match result {
            Ok(reply) => {
                let decoded = decode(&reply, self.reversed);
                debug!(LOG_TAG, "{} polled {:?} -> {:?}", self.unique_id, reply, decoded);
                self.state.motion = decoded.motion;
                self.state.position = decoded.position;
                self.state.tilt_position = decoded.tilt_position;
            }
            Err(e) => {
                error!(LOG_TAG, "failed to update the cover state of {}: {}", self.unique_id, e);
                self.state.motion = MotionStateEnum::Unknown;
            }
        }
    }

    /// encode, apply optimistically, then deliver
    /// transport failures are logged, strict covers restore the state held before the call
    pub async fn execute(&mut self, intent: CoverIntent) {
        let encoded = encode(intent, &self.address, self.family, self.reversed, &self.state);
        let snapshot = if self.strict { Some(self.state.clone()) } else { None };
        self.apply(&encoded);

        debug!(LOG_TAG, "{} {}: {}", self.unique_id, intent.name(), encoded.command);
        let body = GatewayCommandDto { command: encoded.command };
        let result = self.transport.post(&self.api_endpoint, &body).await;
        if let Err(e) = result {
            error!(LOG_TAG, "failed to {} cover {}: {}", intent.name(), self.unique_id, e);
            if let Some(snapshot) = snapshot {
                warn!(LOG_TAG, "{} strict mode, local state rolled back", self.unique_id);
                self.state = snapshot;
            }
        }
    }

    fn apply(&mut self, encoded: &EncodedCommand) {
        if let Some(motion) = encoded.motion {
            self.state.motion = motion;
        }
        if let Some(position) = encoded.position {
            self.state.position = position;
        }
        if let Some(tilt_position) = encoded.tilt_position {
            self.state.tilt_position = tilt_position;
        }
        self.state.last_command_at = Some(self.clock.now());
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn name(&self) -> &str {
        &self.object_name
    }

    pub fn device_class(&self) -> &'static str {
        DEVICE_CLASS
    }

    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    pub fn family(&self) -> DeviceFamily {
        self.family
    }

    pub fn motion(&self) -> MotionStateEnum {
        self.state.motion
    }

    pub fn is_closed(&self) -> bool {
        self.state.motion == MotionStateEnum::Closed
    }

    pub fn is_opening(&self) -> bool {
        self.state.motion == MotionStateEnum::Opening
    }

    pub fn is_closing(&self) -> bool {
        self.state.motion == MotionStateEnum::Closing
    }

    pub fn position(&self) -> u8 {
        self.state.position
    }

    pub fn tilt_position(&self) -> u8 {
        self.state.tilt_position
    }

    pub fn state(&self) -> CoverStateDto {
        CoverStateDto {
            unique_id: self.unique_id.clone(),
            name: self.object_name.clone(),
            device_class: DEVICE_CLASS.to_string(),
            motion: self.state.motion,
            is_closed: self.is_closed(),
            is_opening: self.is_opening(),
            is_closing: self.is_closing(),
            position: self.state.position,
            tilt_position: self.state.tilt_position,
        }
    }
}
