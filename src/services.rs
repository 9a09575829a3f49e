//! Seams to the host-provided gameplay services.
//!
//! Maze contents, movement rules, collision detection, ghost AI, and scene
//! rendering live behind these traits. The core calls them in a fixed order
//! each frame and translates their outcomes into score, lives, and UI/audio
//! traffic; it never inspects their internals.

use glam::UVec2;

use crate::camera::{CameraPose, Projection};
use crate::error::GameResult;
use crate::events::InputEvent;
use crate::systems::components::Pose;
use crate::systems::input::InputState;

/// The session data store: cell and ghost collections stay encapsulated in
/// the backend; the core reads aggregate counts and manages lives through it.
pub trait MazeStore {
    /// Remaining collectible food items in the maze.
    fn food_count(&self) -> u32;
    fn lives(&self) -> u8;
    fn set_lives(&mut self, lives: u8);
}

/// Player movement rules, applied once per frame to the player pose.
pub trait MovementRules {
    /// Grid movement used by the top-down and chase camera modes.
    fn apply_standard(&mut self, pose: &mut Pose, input: &InputState, dt: f32) -> GameResult<()>;

    /// First-person movement: input is interpreted relative to the facing
    /// vector carried in the pose.
    fn apply_first_person(&mut self, pose: &mut Pose, input: &InputState, dt: f32) -> GameResult<()>;
}

/// Outcome of one food-collision resolution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FoodOutcome {
    pub eaten: u32,
    pub score: u32,
}

/// Outcome of one power-up resolution. Frightening the ghosts is the
/// backend's business; the core only reacts to the pickup itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PowerUpOutcome {
    pub collected: bool,
    pub score: u32,
}

/// Outcome of one ghost-contact resolution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GhostOutcome {
    pub player_caught: bool,
    pub ghosts_eaten: u32,
    pub score: u32,
}

/// Collision resolution and ghost updates. The four calls happen in the
/// declared order every simulated frame.
pub trait CollisionRules {
    fn resolve_food(&mut self, player: &Pose) -> GameResult<FoodOutcome>;
    fn resolve_power_up(&mut self, player: &Pose) -> GameResult<PowerUpOutcome>;
    fn update_ghosts(&mut self, dt: f32) -> GameResult<()>;
    fn resolve_ghosts(&mut self, player: &Pose) -> GameResult<GhostOutcome>;
}

/// Scene construction and presentation. The `create_*` calls run once at
/// startup; `render` runs every frame, paused or not.
pub trait SceneRenderer {
    fn create_skybox(&mut self, map_size: u32) -> GameResult<()>;
    fn create_ground(&mut self, map_size: u32) -> GameResult<()>;
    fn create_level(&mut self) -> GameResult<()>;
    /// Builds the player model and returns its starting pose.
    fn create_player(&mut self) -> GameResult<Pose>;
    fn render(&mut self, camera: &CameraPose, projection: &Projection) -> GameResult<()>;
    fn resize(&mut self, size: UVec2) -> GameResult<()>;
}

/// Source of host events for the app loop; drained once per frame.
pub trait InputPump {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// The full set of host services a session runs against. Stored as a
/// non-send ECS resource, so backends holding window or DOM handles work.
pub struct Services {
    pub store: Box<dyn MazeStore>,
    pub movement: Box<dyn MovementRules>,
    pub collision: Box<dyn CollisionRules>,
    pub renderer: Box<dyn SceneRenderer>,
}
