pub mod cover_config_bo;
pub mod cover_state_bo;
pub mod device_address_bo;
