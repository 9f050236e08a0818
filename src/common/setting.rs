//! setting config file

use std::{fs::File, io::Read};
use lazy_static::lazy_static;
use serde::Deserialize;
use std::env;

use super::error::CoverError;
use crate::entity::bo::cover_config_bo::CoverConfigBo;

#[derive(Debug, Deserialize)]
pub struct Env {
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_env")]
    pub env: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Gateway {
    /// seconds between two poll cycles of every cover
    #[serde(default = "default_scan_interval")]
    pub scan_interval_secs: u64,
    /// per request timeout enforced by the http client
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for Gateway {
    fn default() -> Self {
        Gateway {
            scan_interval_secs: default_scan_interval(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub env: Env,
    #[serde(default)]
    pub gateway: Gateway,
    #[serde(default)]
    pub cover: Vec<CoverConfigBo>,
}

fn default_env() -> String {
    String::from("dev")
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_scan_interval() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    10
}

impl Settings {
    /// parse settings from toml text
    pub fn from_toml(str_val: &str) -> Result<Self, CoverError> {
        Ok(toml::from_str(str_val)?)
    }

    /// read and parse a settings file
    pub fn from_file(file_path: &str) -> Result<Self, CoverError> {
        let mut file = File::open(file_path)
            .map_err(|e| CoverError::config(format!("no such file {} exception: {}", file_path, e)))?;
        let mut str_val = String::new();
        file.read_to_string(&mut str_val)?;
        Self::from_toml(&str_val)
    }

    /// file name picked by the ENV variable, `config_dev.toml` when unset
    pub fn env_file_path() -> String {
        let env = match env::var("ENV") {
            Ok(e) => e,
            Err(_) => {
                log::warn!("no ENV set, use default: 'dev'");
                default_env()
            }
        };
        format!("config_{}.toml", env)
    }

    /// process wide settings, only meant for the binary entry point
    pub fn get<'a>() -> &'a Self {
        // 给静态变量延迟赋值的宏
        lazy_static! {
            static ref CACHE: Settings = {
                let file_path = Settings::env_file_path();
                match Settings::from_file(&file_path) {
                    Ok(settings) => settings,
                    Err(e) => panic!("cannot load settings from {}: {}", file_path, e),
                }
            };
        }
        &CACHE
    }
}
