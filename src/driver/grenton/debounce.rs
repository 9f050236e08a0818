//! poll suppression right after a command
//! the gateway needs a moment before its status reflects a new command

use std::time::{Duration, Instant};

pub const DEBOUNCE_WINDOW: Duration = Duration::from_secs(2);

/// false while `now` is still inside the quiet window following `last_command_at`
pub fn should_poll(last_command_at: Option<Instant>, now: Instant) -> bool {
    match last_command_at {
        Some(at) => now.saturating_duration_since(at) >= DEBOUNCE_WINDOW,
        None => true,
    }
}
