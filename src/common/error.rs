use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // compound grenton id cannot be split into gateway and device object
    MalformedIdentifier = 2001,
    // http request to the gateway failed, for any reason
    TransportError = 2002,
    // settings file missing or invalid
    ConfigError = 2003,
    // no cover registered under the requested id
    DeviceNotFound = 2004,
    // unknown action or missing command parameter
    InvalidCommand = 2005,
}

/// error raised by the cover engine
#[derive(Debug, Clone)]
pub struct CoverError {
    pub code: ErrorCode,
    pub msg: String,
}

impl CoverError {
    pub fn new(code: ErrorCode, msg: impl Into<String>) -> Self {
        CoverError { code, msg: msg.into() }
    }

    pub fn malformed_identifier(raw: &str) -> Self {
        Self::new(ErrorCode::MalformedIdentifier, format!("malformed grenton id: '{}'", raw))
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::TransportError, msg)
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, msg)
    }

    pub fn device_not_found(device_id: &str) -> Self {
        Self::new(ErrorCode::DeviceNotFound, format!("no cover with id '{}'", device_id))
    }

    pub fn invalid_command(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCommand, msg)
    }

    pub fn is_transport(&self) -> bool {
        self.code == ErrorCode::TransportError
    }
}

impl Display for CoverError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "cover engine error code: {}, msg: {}", self.code as u16, self.msg)
    }
}

impl Error for CoverError {}

// timeouts, refused connections, non-2xx and undecodable bodies all end up here
impl From<reqwest::Error> for CoverError {
    fn from(e: reqwest::Error) -> Self {
        CoverError::transport(format!("gateway request failed: {}", e))
    }
}

impl From<toml::de::Error> for CoverError {
    fn from(e: toml::de::Error) -> Self {
        CoverError::config(format!("config file format invalid: {}", e))
    }
}

impl From<std::io::Error> for CoverError {
    fn from(e: std::io::Error) -> Self {
        CoverError::config(format!("cannot read config file: {}", e))
    }
}
