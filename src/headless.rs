//! Headless reference backends for the host seams.
//!
//! These keep the binary bootable and the integration tests hermetic: the
//! maze content is an in-memory countdown, the renderer counts frames, and
//! the UI and audio surfaces log instead of touching a real host. Real maze
//! geometry, collision detection, and ghost AI remain host concerns.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use glam::{Mat4, Quat, UVec2, Vec2, Vec3};
use tracing::{debug, info, trace};

use crate::audio::{AudioCue, AudioSink};
use crate::camera::{CameraPose, Projection};
use crate::constants::{mechanics, MAP_SIZE, STARTING_LIVES};
use crate::direction::Direction;
use crate::error::GameResult;
use crate::events::{InputEvent, Key};
use crate::services::{
    CollisionRules, FoodOutcome, GhostOutcome, InputPump, MazeStore, MovementRules, PowerUpOutcome, SceneRenderer,
    Services,
};
use crate::systems::components::Pose;
use crate::systems::input::InputState;
use crate::ui::{Overlay, UiSurface};

#[derive(Debug)]
struct MazeData {
    lives: u8,
    food: u32,
}

/// Builds the in-memory store and the countdown collision rules over one
/// shared piece of session data, the way a real backend pair would share its
/// cell and ghost collections internally.
pub fn in_memory_maze(food: u32, frames_per_pellet: u32) -> (InMemoryStore, CountdownRules) {
    let data = Rc::new(RefCell::new(MazeData {
        lives: STARTING_LIVES,
        food,
    }));
    (
        InMemoryStore { data: data.clone() },
        CountdownRules {
            data,
            frames_per_pellet,
            frames: 0,
        },
    )
}

pub struct InMemoryStore {
    data: Rc<RefCell<MazeData>>,
}

impl MazeStore for InMemoryStore {
    fn food_count(&self) -> u32 {
        self.data.borrow().food
    }

    fn lives(&self) -> u8 {
        self.data.borrow().lives
    }

    fn set_lives(&mut self, lives: u8) {
        self.data.borrow_mut().lives = lives;
    }
}

/// Demo collision rules: one pellet is eaten every `frames_per_pellet`
/// simulated frames and the ghosts never catch anyone, which is enough to
/// drive a full session from start screen to victory.
pub struct CountdownRules {
    data: Rc<RefCell<MazeData>>,
    frames_per_pellet: u32,
    frames: u32,
}

impl CollisionRules for CountdownRules {
    fn resolve_food(&mut self, _player: &Pose) -> GameResult<FoodOutcome> {
        self.frames += 1;
        let mut data = self.data.borrow_mut();
        if data.food > 0 && self.frames % self.frames_per_pellet == 0 {
            data.food -= 1;
            trace!(remaining = data.food, "Pellet eaten");
            return Ok(FoodOutcome { eaten: 1, score: 10 });
        }
        Ok(FoodOutcome::default())
    }

    fn resolve_power_up(&mut self, _player: &Pose) -> GameResult<PowerUpOutcome> {
        Ok(PowerUpOutcome::default())
    }

    fn update_ghosts(&mut self, _dt: f32) -> GameResult<()> {
        Ok(())
    }

    fn resolve_ghosts(&mut self, _player: &Pose) -> GameResult<GhostOutcome> {
        Ok(GhostOutcome::default())
    }
}

/// Minimal movement rules: standard mode steps along the held grid
/// direction; first-person mode turns with left/right and advances with
/// up/down along the facing vector.
#[derive(Debug, Default)]
pub struct SimpleMovement;

fn refresh_transform(pose: &mut Pose) {
    let forward = Vec3::new(pose.facing.x, 0.0, pose.facing.y);
    let rotation = if forward.length_squared() > f32::EPSILON {
        Quat::from_rotation_arc(Vec3::Z, forward.normalize())
    } else {
        Quat::IDENTITY
    };
    pose.transform = Mat4::from_rotation_translation(rotation, pose.position);
}

impl MovementRules for SimpleMovement {
    fn apply_standard(&mut self, pose: &mut Pose, input: &InputState, dt: f32) -> GameResult<()> {
        if let Some(direction) = input.held_direction() {
            let step = direction.as_vec2() * mechanics::PLAYER_SPEED * dt;
            pose.position += Vec3::new(step.x, 0.0, step.y);
            pose.facing = direction.as_vec2();
            refresh_transform(pose);
        }
        Ok(())
    }

    fn apply_first_person(&mut self, pose: &mut Pose, input: &InputState, dt: f32) -> GameResult<()> {
        match input.held_direction() {
            Some(Direction::Up) | Some(Direction::Down) => {
                let sign = if input.held_direction() == Some(Direction::Up) { 1.0 } else { -1.0 };
                let step = pose.facing * mechanics::PLAYER_SPEED * dt * sign;
                pose.position += Vec3::new(step.x, 0.0, step.y);
            }
            Some(Direction::Left) | Some(Direction::Right) => {
                let sign = if input.held_direction() == Some(Direction::Left) { -1.0 } else { 1.0 };
                pose.facing = Vec2::from_angle(mechanics::TURN_SPEED * dt * sign).rotate(pose.facing);
            }
            None => {}
        }
        refresh_transform(pose);
        Ok(())
    }
}

/// Renderer double: logs scene construction and counts presented frames.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
}

impl SceneRenderer for NullRenderer {
    fn create_skybox(&mut self, map_size: u32) -> GameResult<()> {
        trace!(map_size, "Skybox created");
        Ok(())
    }

    fn create_ground(&mut self, map_size: u32) -> GameResult<()> {
        trace!(map_size, "Ground created");
        Ok(())
    }

    fn create_level(&mut self) -> GameResult<()> {
        trace!("Level created");
        Ok(())
    }

    fn create_player(&mut self) -> GameResult<Pose> {
        let center = MAP_SIZE as f32 / 2.0;
        Ok(Pose::at(Vec3::new(center, 0.0, center)))
    }

    fn render(&mut self, camera: &CameraPose, _projection: &Projection) -> GameResult<()> {
        self.frames += 1;
        trace!(position = ?camera.position, "Frame presented");
        Ok(())
    }

    fn resize(&mut self, size: UVec2) -> GameResult<()> {
        debug!(width = size.x, height = size.y, "Surface resized");
        Ok(())
    }
}

/// UI double: every handle exists; state changes are logged and kept
/// inspectable for hosts that want to assert on them.
#[derive(Debug, Default)]
pub struct LoggingUi {
    pub visible: HashMap<Overlay, bool>,
    pub lives: u8,
    pub score: u32,
    pub cursor_hidden: bool,
}

impl UiSurface for LoggingUi {
    fn has_overlay(&self, _overlay: Overlay) -> bool {
        true
    }

    fn has_lives_display(&self) -> bool {
        true
    }

    fn has_score_display(&self) -> bool {
        true
    }

    fn set_overlay_visible(&mut self, overlay: Overlay, visible: bool) {
        info!(%overlay, visible, "Overlay toggled");
        self.visible.insert(overlay, visible);
    }

    fn set_lives(&mut self, lives: u8) {
        info!(lives, "Lives display updated");
        self.lives = lives;
    }

    fn set_score(&mut self, score: u32) {
        debug!(score, "Score display updated");
        self.score = score;
    }

    fn set_cursor_hidden(&mut self, hidden: bool) {
        trace!(hidden, "Cursor visibility changed");
        self.cursor_hidden = hidden;
    }
}

/// Audio double: logs cue requests instead of playing them.
#[derive(Debug, Default)]
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play(&mut self, cue: AudioCue) {
        debug!(%cue, "Audio cue requested");
    }

    fn set_muted(&mut self, muted: bool) {
        debug!(muted, "Sink mute changed");
    }
}

/// Input pump double: replays a scripted sequence of (frame, event) pairs.
pub struct ScriptedPump {
    script: VecDeque<(u64, InputEvent)>,
    frame: u64,
}

impl ScriptedPump {
    pub fn new(script: Vec<(u64, InputEvent)>) -> Self {
        Self {
            script: script.into(),
            frame: 0,
        }
    }

    /// The session driven by the demo binary: start, wander, visit every
    /// camera mode, pause and resume, then quit.
    pub fn demo(total_frames: u64) -> Self {
        Self::new(vec![
            (5, InputEvent::Begin),
            (10, InputEvent::KeyDown(Key::D)),
            (60, InputEvent::KeyDown(Key::Num1)),
            (90, InputEvent::KeyDown(Key::W)),
            (150, InputEvent::KeyDown(Key::Num2)),
            (180, InputEvent::KeyDown(Key::Num3)),
            (200, InputEvent::KeyDown(Key::P)),
            (230, InputEvent::Begin),
            (total_frames, InputEvent::Quit),
        ])
    }
}

impl InputPump for ScriptedPump {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frame += 1;
        let mut out = Vec::new();
        while let Some(&(at, event)) = self.script.front() {
            if at > self.frame {
                break;
            }
            self.script.pop_front();
            out.push(event);
        }
        out
    }
}

/// Assembles the full headless service set for the demo binary.
pub fn demo_services(food: u32, frames_per_pellet: u32) -> Services {
    let (store, rules) = in_memory_maze(food, frames_per_pellet);
    Services {
        store: Box::new(store),
        movement: Box::new(SimpleMovement),
        collision: Box::new(rules),
        renderer: Box::new(NullRenderer::default()),
    }
}
