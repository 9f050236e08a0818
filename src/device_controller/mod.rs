//! 设备管理模块
//! - 根据配置创建 cover 设备
//! - 分发 cover 指令
//! - 定期轮询所有 cover 的状态

pub mod cover_manager;
