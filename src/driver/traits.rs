//! collaborators a cover driver is built with

use std::time::Instant;

use async_trait::async_trait;

use crate::common::error::CoverError;
use crate::entity::dto::gateway_dto::{GatewayCommandDto, StatusQueryDto, StatusReplyDto};

/// gateway link, any failure is reported as `TransportError`
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    /// deliver a command, Ok means the gateway acknowledged it
    async fn post(&self, endpoint: &str, command: &GatewayCommandDto) -> Result<(), CoverError>;

    /// evaluate a status query
    async fn get(&self, endpoint: &str, query: &StatusQueryDto) -> Result<StatusReplyDto, CoverError>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// monotonic system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
