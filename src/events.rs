use bevy_ecs::event::Event;
use glam::{UVec2, Vec2};

use crate::camera::CameraMode;

/// Keys the game recognizes. Anything else never leaves the host layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Num1,
    Num2,
    Num3,
    M,
    P,
    Escape,
}

/// One-shot intents produced by the input layer and applied between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Start a fresh session or resume from any stopped screen.
    Begin,
    /// Stop the simulation and bring up the pause screen.
    TogglePause,
    SetCameraMode(CameraMode),
    ToggleMute,
    Exit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// Raw host events, pushed into the session's input queue by the app loop
/// and drained once per frame. Tests inject these directly, so input
/// behavior can be exercised without a live window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// The start/resume control on an overlay was activated.
    Begin,
    TouchStart(Vec2),
    TouchMove(Vec2),
    /// The render surface changed size (window resize or orientation change).
    Resized(UVec2),
    /// The host is tearing the session down.
    Quit,
}
