pub mod device_command_dto;
pub mod device_state_dto;
pub mod gateway_dto;
