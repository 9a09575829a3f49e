//! Platform helpers for frame pacing.

use std::time::Duration;

/// Sleeps out the remainder of the frame budget. Spin-sleeping keeps the
/// pacing tight while the window is focused; a plain sleep is enough otherwise.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}
