//! networking module
//! function:
//! - 把 cover 命令以 json 形式发送到 grenton http listener
//! - 任何网络错误、非 2xx 状态码、无法解析的返回值都转为 TransportError

use std::time::Duration;

use async_trait::async_trait;

use super::error::CoverError;
use crate::driver::traits::GatewayTransport;
use crate::entity::dto::gateway_dto::{GatewayCommandDto, StatusQueryDto, StatusReplyDto};
use crate::trace;

const LOG_TAG: &str = "http";

/// reqwest backed gateway transport, one pooled client shared by every cover
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(request_timeout: Duration) -> Result<Self, CoverError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(HttpTransport { client })
    }
}

#[async_trait]
impl GatewayTransport for HttpTransport {
    async fn post(&self, endpoint: &str, command: &GatewayCommandDto) -> Result<(), CoverError> {
        trace!(LOG_TAG, "POST {} {:?}", endpoint, command);
        self.client
            .post(endpoint)
            .json(command)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// the listener expects the query as a json body on a GET request
    async fn get(&self, endpoint: &str, query: &StatusQueryDto) -> Result<StatusReplyDto, CoverError> {
        trace!(LOG_TAG, "GET {} {:?}", endpoint, query);
        let reply = self.client
            .get(endpoint)
            .json(query)
            .send()
            .await?
            .error_for_status()?
            .json::<StatusReplyDto>()
            .await?;
        Ok(reply)
    }
}
