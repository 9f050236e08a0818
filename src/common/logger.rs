//! 日志配置模块
//! log facade with a pretty_env_logger backend, plus tagged logging macros

use super::error::CoverError;

/// init logger with the given level name, repeated calls are ignored
pub fn init_logger(log_level: &str) -> Result<(), CoverError> {
    // already initialized
    if log::max_level() != log::LevelFilter::Off {
        return Ok(())
    }

    let result = pretty_env_logger::formatted_builder()
        .target(pretty_env_logger::env_logger::Target::Stdout)
        .filter_level(parse_level(log_level))
        .try_init();
    match result {
        Ok(_) => Ok(()),
        // another test thread won the race
        Err(_) if log::max_level() != log::LevelFilter::Off => Ok(()),
        Err(e) => Err(CoverError::config(format!("cannot init logger: {}", e))),
    }
}

fn parse_level(log_level: &str) -> log::LevelFilter {
    match log_level {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info
    }
}


/// 带 TAG 输出到日志的宏，支持 trace debug info warn error
#[macro_export]
macro_rules! warn {
    ($tag:expr, $($arg:tt)*) => ({
        log::warn!("[{}] {}", $tag, format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! error {
    ($tag:expr, $($arg:tt)*) => ({
        log::error!("[{}] {}", $tag, format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! info {
    ($tag:expr, $($arg:tt)*) => ({
        log::info!("[{}] {}", $tag, format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! debug {
    ($tag:expr, $($arg:tt)*) => ({
        log::debug!("[{}] {}", $tag, format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! trace {
    ($tag:expr, $($arg:tt)*) => ({
        log::trace!("[{}] {}", $tag, format_args!($($arg)*));
    })
}
