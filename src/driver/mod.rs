pub mod grenton;
pub mod traits;
