//! Components and resources shared across the frame systems.

use bevy_ecs::prelude::{Bundle, Component, Resource};
use glam::{Mat4, UVec2, Vec2, Vec3};

use crate::ui::Overlay;

/// Marker for the player-controlled entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerControlled;

/// World-space pose of an entity: position, full world transform, and the
/// ground-plane facing vector (x maps to world X, y to world Z).
///
/// The movement rules own all three fields; the camera only reads them.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub transform: Mat4,
    pub facing: Vec2,
}

impl Pose {
    /// A pose at `position` with an untransformed orientation, facing north.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            transform: Mat4::from_translation(position),
            facing: Vec2::new(0.0, -1.0),
        }
    }
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub pose: Pose,
}

/// Whether the session is simulating, and which panel is up when it is not.
///
/// Victory and defeat are presentational flavors of `NotRunning`; the
/// counters owned by the maze store decide which one gets shown.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    NotRunning { overlay: Overlay },
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub const fn stopped(overlay: Overlay) -> Self {
        GameStatus::NotRunning { overlay }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::stopped(Overlay::Start)
    }
}

/// The session score. The display is updated through the UI bridge whenever
/// a collision outcome changes it.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource(pub u32);

/// Seconds elapsed since the previous frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DeltaTime {
    pub seconds: f32,
}

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct GlobalState {
    pub exit: bool,
}

/// Renderer resize requested by the host, applied by the render system
/// before the next present.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingResize(pub Option<UVec2>);
