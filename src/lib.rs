//! grenton roller shutter engine
//! - common: 错误、日志、配置、http 传输
//! - entity: bo / dto 实体
//! - driver: grenton cover 驱动（指令编码、状态解码、轮询防抖）
//! - device_controller: 多设备管理

pub mod common;
pub mod device_controller;
pub mod driver;
pub mod entity;
pub mod util;
