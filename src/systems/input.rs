use std::collections::{HashMap, VecDeque};

use bevy_ecs::event::EventWriter;
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Res, ResMut};
use glam::Vec2;
use tracing::trace;

use crate::audio::AudioCue;
use crate::camera::{CameraMode, Projection};
use crate::constants::input::SWIPE_THRESHOLD;
use crate::direction::Direction;
use crate::events::{GameCommand, GameEvent, InputEvent, Key};
use crate::systems::audio::AudioEvent;
use crate::systems::components::PendingResize;

/// Host events queued between frames and drained once per frame.
#[derive(Resource, Debug, Default)]
pub struct InputQueue(pub VecDeque<InputEvent>);

/// Key-to-command table, plus the keys treated as continuous movement input.
#[derive(Resource, Debug, Clone)]
pub struct Bindings {
    commands: HashMap<Key, GameCommand>,
    movement: HashMap<Key, Direction>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut commands = HashMap::new();

        // Camera modes on the digit row
        commands.insert(Key::Num1, GameCommand::SetCameraMode(CameraMode::FirstPerson));
        commands.insert(Key::Num2, GameCommand::SetCameraMode(CameraMode::TopDown));
        commands.insert(Key::Num3, GameCommand::SetCameraMode(CameraMode::ThirdPersonChase));

        // Game actions
        commands.insert(Key::M, GameCommand::ToggleMute);
        commands.insert(Key::P, GameCommand::TogglePause);
        commands.insert(Key::Escape, GameCommand::TogglePause);

        let mut movement = HashMap::new();
        movement.insert(Key::W, Direction::Up);
        movement.insert(Key::Up, Direction::Up);
        movement.insert(Key::S, Direction::Down);
        movement.insert(Key::Down, Direction::Down);
        movement.insert(Key::A, Direction::Left);
        movement.insert(Key::Left, Direction::Left);
        movement.insert(Key::D, Direction::Right);
        movement.insert(Key::Right, Direction::Right);

        Self { commands, movement }
    }
}

impl Bindings {
    pub fn command_for(&self, key: Key) -> Option<GameCommand> {
        self.commands.get(&key).copied()
    }

    pub fn movement_for(&self, key: Key) -> Option<Direction> {
        self.movement.get(&key).copied()
    }
}

/// Which movement key is currently held.
///
/// Invariant: every key-down clears the previous entry before storing the
/// new one, so at most one direction is held at a time. Nothing clears the
/// entry on key release; the held direction persists until the next press.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    held: Option<(Key, Direction)>,
}

impl InputState {
    /// Marks `key` as the only held key.
    pub fn press(&mut self, key: Key, direction: Direction) {
        self.held = Some((key, direction));
    }

    pub fn is_held(&self, key: Key) -> bool {
        matches!(self.held, Some((held, _)) if held == key)
    }

    pub fn held_direction(&self) -> Option<Direction> {
        self.held.map(|(_, direction)| direction)
    }
}

/// An in-progress touch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchData {
    pub start: Vec2,
    pub current: Vec2,
}

impl TouchData {
    pub fn new(start: Vec2) -> Self {
        Self { start, current: start }
    }

    pub fn delta(&self) -> Vec2 {
        self.current - self.start
    }
}

/// Current touch gesture, if any. Deltas are tracked for a future mobile
/// control scheme; nothing consumes them as movement yet.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct TouchState {
    pub active: Option<TouchData>,
}

/// Maps a swipe delta to its dominant-axis direction, or `None` while the
/// gesture is shorter than the recognition threshold. Ties go vertical.
pub fn swipe_direction(delta: Vec2) -> Option<Direction> {
    if delta.length() < SWIPE_THRESHOLD {
        return None;
    }
    Some(if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    })
}

/// Applies one frame of key presses to the input state and returns the
/// one-shot commands they produce. Shared by the input system and tests.
pub fn process_key_events(bindings: &Bindings, input_state: &mut InputState, keys: &[Key]) -> Vec<GameEvent> {
    let mut out = Vec::new();
    for &key in keys {
        if let Some(direction) = bindings.movement_for(key) {
            input_state.press(key, direction);
        } else if let Some(command) = bindings.command_for(key) {
            out.push(GameEvent::Command(command));
        }
    }
    out
}

/// Drains the host event queue for this frame.
#[allow(clippy::too_many_arguments)]
pub fn input_system(
    mut queue: ResMut<InputQueue>,
    bindings: Res<Bindings>,
    mut input_state: ResMut<InputState>,
    mut touch: ResMut<TouchState>,
    mut projection: ResMut<Projection>,
    mut resize: ResMut<PendingResize>,
    mut events: EventWriter<GameEvent>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    while let Some(event) = queue.0.pop_front() {
        match event {
            InputEvent::KeyDown(key) => {
                // Any key press requests the looping track; the audio bridge
                // drops the request while muted.
                audio_events.write(AudioEvent::Play(AudioCue::Music));
                for event in process_key_events(&bindings, &mut input_state, &[key]) {
                    events.write(event);
                }
            }
            InputEvent::Begin => {
                events.write(GameCommand::Begin.into());
            }
            InputEvent::Quit => {
                events.write(GameCommand::Exit.into());
            }
            InputEvent::TouchStart(position) => {
                touch.active = Some(TouchData::new(position));
            }
            InputEvent::TouchMove(position) => {
                if let Some(data) = touch.active.as_mut() {
                    data.current = position;
                    trace!(delta = ?data.delta(), direction = ?swipe_direction(data.delta()), "Touch moved");
                }
            }
            InputEvent::Resized(size) => {
                projection.aspect = size.x as f32 / size.y.max(1) as f32;
                resize.0 = Some(size);
            }
        }
    }
}
