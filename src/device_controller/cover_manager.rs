//! cover manager: owns every configured cover, one async mutex per cover

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Mutex;

use crate::common::error::CoverError;
use crate::common::setting::Settings;
use crate::driver::grenton::cover::GrentonCover;
use crate::driver::grenton::encoder::CoverIntent;
use crate::driver::traits::{Clock, GatewayTransport};
use crate::entity::bo::cover_config_bo::CoverConfigBo;
use crate::entity::dto::device_command_dto::CoverCommandDto;
use crate::entity::dto::device_state_dto::CoverStateDto;
use crate::util::json::get_percent;
use crate::{info, debug};

const LOG_TAG: &str = "cover_manager";

pub struct CoverManager {
    covers: HashMap<String, Arc<Mutex<GrentonCover>>>,
    transport: Arc<dyn GatewayTransport>,
    clock: Arc<dyn Clock>,
}

impl CoverManager {
    pub fn new(transport: Arc<dyn GatewayTransport>, clock: Arc<dyn Clock>) -> Self {
        CoverManager {
            covers: HashMap::new(),
            transport,
            clock,
        }
    }

    /// build a cover for every `[[cover]]` entry, the first bad entry aborts
    pub fn from_settings(
        settings: &Settings,
        transport: Arc<dyn GatewayTransport>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CoverError> {
        let mut manager = CoverManager::new(transport, clock);
        for config in settings.cover.iter() {
            manager.add_cover(config)?;
        }
        info!(LOG_TAG, "{} covers loaded from settings", manager.len());
        Ok(manager)
    }

    /// register a cover, returns its unique id
    pub fn add_cover(&mut self, config: &CoverConfigBo) -> Result<String, CoverError> {
        let cover = GrentonCover::new(config, self.transport.clone(), self.clock.clone())?;
        let unique_id = cover.unique_id().to_string();
        if self.covers.contains_key(&unique_id) {
            return Err(CoverError::config(format!("duplicated cover id {}", unique_id)));
        }
        debug!(LOG_TAG, "cover {} added, grenton id {}", unique_id, config.grenton_id);
        self.covers.insert(unique_id.clone(), Arc::new(Mutex::new(cover)));
        Ok(unique_id)
    }

    pub fn cover(&self, device_id: &str) -> Option<Arc<Mutex<GrentonCover>>> {
        self.covers.get(device_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.covers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }

    /// route a command to its cover
    /// only lookup and parameter problems are reported, delivery failures are handled by the cover
    pub async fn command(&self, command_dto: CoverCommandDto) -> Result<(), CoverError> {
        let cover = self
            .cover(&command_dto.device_id)
            .ok_or_else(|| CoverError::device_not_found(&command_dto.device_id))?;
        let intent = parse_intent(&command_dto)?;
        info!(LOG_TAG, "command cover {}: {:?}", command_dto.device_id, intent);
        cover.lock().await.execute(intent).await;
        Ok(())
    }

    /// poll every cover, different covers run concurrently
    pub async fn refresh_all(&self) {
        let tasks = self.covers.values().map(|cover| async move {
            cover.lock().await.refresh().await;
        });
        join_all(tasks).await;
    }

    /// state snapshots sorted by unique id
    pub async fn states(&self) -> Vec<CoverStateDto> {
        let mut states = Vec::with_capacity(self.covers.len());
        for cover in self.covers.values() {
            states.push(cover.lock().await.state());
        }
        states.sort_by(|a, b| a.unique_id.cmp(&b.unique_id));
        states
    }
}

fn parse_intent(command_dto: &CoverCommandDto) -> Result<CoverIntent, CoverError> {
    let params = &command_dto.params;
    let intent = match command_dto.action.as_str() {
        "open" => CoverIntent::Open,
        "close" => CoverIntent::Close,
        "stop" => CoverIntent::Stop,
        "set_position" => CoverIntent::SetPosition(get_percent(params, "position")?),
        "set_tilt" => CoverIntent::SetTilt(get_percent(params, "tilt_position")?),
        "open_tilt" => CoverIntent::OpenTilt,
        "close_tilt" => CoverIntent::CloseTilt,
        action => {
            return Err(CoverError::invalid_command(format!("not support cover action {}", action)))
        }
    };
    Ok(intent)
}
