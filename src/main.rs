use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use dotenv::dotenv;
use grenton_cover_engine::common::http::HttpTransport;
use grenton_cover_engine::common::logger::init_logger;
use grenton_cover_engine::common::setting::Settings;
use grenton_cover_engine::device_controller::cover_manager::CoverManager;
use grenton_cover_engine::driver::traits::SystemClock;
use grenton_cover_engine::{debug, info, warn};

const LOG_TAG: &str = "main";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 检查 env 文件
    dotenv().ok();

    // 加载 config
    let settings = Settings::get();

    // 设置 logger
    init_logger(&settings.env.log_level)?;
    info!(LOG_TAG, "配置已加载，环境: {:?}", settings.env.env);
    debug!(LOG_TAG, "配置: {:?}", settings);

    let transport = Arc::new(HttpTransport::new(Duration::from_secs(settings.gateway.request_timeout_secs))?);
    let manager = CoverManager::from_settings(settings, transport, Arc::new(SystemClock))?;
    if manager.is_empty() {
        warn!(LOG_TAG, "no cover configured, nothing to poll");
    }

    let mut interval = tokio::time::interval(Duration::from_secs(settings.gateway.scan_interval_secs.max(1)));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                manager.refresh_all().await;
                for state in manager.states().await {
                    debug!(LOG_TAG, "{:?}", state);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!(LOG_TAG, "ctrl-c received, exiting");
                break;
            }
        }
    }

    Ok(())
}
