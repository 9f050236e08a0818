//! grenton roller shutter driver
//! - encoder: cover intent to gateway command
//! - decoder: polled status to cover state
//! - debounce: poll suppression after commands
//! - cover: stateful adapter combining the above

pub mod cover;
pub mod debounce;
pub mod decoder;
pub mod encoder;

#[cfg(test)]
pub(crate) mod testing;
