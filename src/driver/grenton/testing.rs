//! in-memory collaborators for driver and manager tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::common::error::CoverError;
use crate::driver::traits::{Clock, GatewayTransport};
use crate::entity::dto::gateway_dto::{GatewayCommandDto, StatusQueryDto, StatusReplyDto};

/// clock that only moves when told to
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock { now: Mutex::new(Instant::now()) }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

/// remembers every exchange, replies with a canned status
pub struct RecordingTransport {
    pub commands: Mutex<Vec<(String, GatewayCommandDto)>>,
    pub queries: Mutex<Vec<(String, StatusQueryDto)>>,
    reply: Mutex<Option<StatusReplyDto>>,
    fail_commands: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        RecordingTransport {
            commands: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            reply: Mutex::new(None),
            fail_commands: AtomicBool::new(false),
        }
    }

    /// `None` makes every status query fail
    pub fn set_reply(&self, reply: Option<StatusReplyDto>) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn set_fail_commands(&self, fail: bool) {
        self.fail_commands.store(fail, Ordering::SeqCst);
    }

    pub fn sent_commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().iter().map(|(_, dto)| dto.command.clone()).collect()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl GatewayTransport for RecordingTransport {
    async fn post(&self, endpoint: &str, command: &GatewayCommandDto) -> Result<(), CoverError> {
        self.commands.lock().unwrap().push((endpoint.to_string(), command.clone()));
        if self.fail_commands.load(Ordering::SeqCst) {
            return Err(CoverError::transport("connection refused"));
        }
        Ok(())
    }

    async fn get(&self, endpoint: &str, query: &StatusQueryDto) -> Result<StatusReplyDto, CoverError> {
        self.queries.lock().unwrap().push((endpoint.to_string(), query.clone()));
        let reply = *self.reply.lock().unwrap();
        reply.ok_or_else(|| CoverError::transport("gateway returned 500"))
    }
}
