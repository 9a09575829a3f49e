//! This module contains all the constants used in the game.

use std::time::Duration;

/// Target duration of one frame at 60 FPS.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the square maze, in cells.
pub const MAP_SIZE: u32 = 28;

/// Lives a fresh session starts with, and the value re-seeded after defeat.
pub const STARTING_LIVES: u8 = 3;

pub mod camera {
    use glam::Vec3;

    /// Vertical lift above the player position for the first-person eye.
    pub const EYE_LIFT: f32 = 0.5;
    /// Fixed height of the first-person look target.
    pub const EYE_LOOK_HEIGHT: f32 = 0.75;
    /// Altitude of the top-down camera above the maze floor.
    pub const TOP_DOWN_ALTITUDE: f32 = 15.0;
    /// Chase-camera offset in the player's local space; rotates with the player.
    pub const CHASE_OFFSET: Vec3 = Vec3::new(0.0, 4.0, 3.0);

    /// Overhead pose used before the session starts, while paused, and on the end screens.
    pub const OVERHEAD_POSITION: Vec3 = Vec3::new(14.5, 22.0, 14.0);
    pub const OVERHEAD_TARGET: Vec3 = Vec3::new(14.5, 0.0, 14.0);

    pub const FOV_Y_DEGREES: f32 = 75.0;
    pub const NEAR_PLANE: f32 = 0.1;
    pub const FAR_PLANE: f32 = 1000.0;
}

pub mod input {
    /// Minimum swipe length (in surface pixels) before a touch gesture is
    /// treated as directional.
    pub const SWIPE_THRESHOLD: f32 = 20.0;
}

pub mod mechanics {
    /// Player speed in cells per second, used by the reference movement rules.
    pub const PLAYER_SPEED: f32 = 4.0;
    /// First-person turn rate in radians per second.
    pub const TURN_SPEED: f32 = 2.5;
}
