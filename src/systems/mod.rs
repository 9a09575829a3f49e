//! Per-frame systems and the components/resources they share.

pub mod audio;
pub mod camera;
pub mod collision;
pub mod components;
pub mod control;
pub mod hud;
pub mod input;
pub mod movement;
pub mod render;
pub mod status;

pub use audio::{audio_system, AudioEvent};
pub use camera::camera_system;
pub use collision::collision_system;
pub use components::{DeltaTime, GameStatus, GlobalState, PendingResize, PlayerBundle, PlayerControlled, Pose, ScoreResource};
pub use control::command_system;
pub use hud::{hud_system, UiEvent};
pub use input::{input_system, process_key_events, swipe_direction, Bindings, InputQueue, InputState, TouchData, TouchState};
pub use movement::movement_system;
pub use render::render_system;
pub use status::{error_report_system, status_system};
