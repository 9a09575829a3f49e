#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use glam::{UVec2, Vec3};
use muncher::audio::{Audio, AudioCue, AudioSink};
use muncher::camera::{CameraPose, Projection};
use muncher::error::{GameError, GameResult};
use muncher::game::Game;
use muncher::services::{
    CollisionRules, FoodOutcome, GhostOutcome, MazeStore, MovementRules, PowerUpOutcome, SceneRenderer, Services,
};
use muncher::systems::components::Pose;
use muncher::systems::input::InputState;
use muncher::ui::{Overlay, UiBridge, UiSurface};

/// Observable side effects plus the knobs the test body can flip to steer
/// the stub backends for the next frame.
#[derive(Debug, Default)]
pub struct Probe {
    pub lives: u8,
    pub food: u32,

    // Knobs (consumed on the next matching resolver call)
    pub eat_pellet: bool,
    pub kill_player: bool,
    pub fail_food: bool,

    // Recorded side effects
    pub frames_rendered: u64,
    pub overlays_shown: Vec<Overlay>,
    pub overlays_hidden: Vec<Overlay>,
    pub lives_display: Vec<u8>,
    pub scores_display: Vec<u32>,
    pub cues: Vec<AudioCue>,
    pub cursor_hidden: Option<bool>,
}

pub type SharedProbe = Rc<RefCell<Probe>>;

pub struct StubStore(pub SharedProbe);

impl MazeStore for StubStore {
    fn food_count(&self) -> u32 {
        self.0.borrow().food
    }

    fn lives(&self) -> u8 {
        self.0.borrow().lives
    }

    fn set_lives(&mut self, lives: u8) {
        self.0.borrow_mut().lives = lives;
    }
}

pub struct StubMovement;

impl MovementRules for StubMovement {
    fn apply_standard(&mut self, pose: &mut Pose, input: &InputState, dt: f32) -> GameResult<()> {
        if let Some(direction) = input.held_direction() {
            let step = direction.as_vec2() * dt;
            pose.position += Vec3::new(step.x, 0.0, step.y);
        }
        Ok(())
    }

    fn apply_first_person(&mut self, pose: &mut Pose, input: &InputState, dt: f32) -> GameResult<()> {
        if input.held_direction().is_some() {
            pose.position += Vec3::new(pose.facing.x, 0.0, pose.facing.y) * dt;
        }
        Ok(())
    }
}

pub struct StubCollision(pub SharedProbe);

impl CollisionRules for StubCollision {
    fn resolve_food(&mut self, _player: &Pose) -> GameResult<FoodOutcome> {
        let mut probe = self.0.borrow_mut();
        if probe.fail_food {
            probe.fail_food = false;
            return Err(GameError::Collision("stub food resolver failure".into()));
        }
        if probe.eat_pellet && probe.food > 0 {
            probe.eat_pellet = false;
            probe.food -= 1;
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
        let mut probe = self.0.borrow_mut();
        if probe.kill_player {
            probe.kill_player = false;
            return Ok(GhostOutcome {
                player_caught: true,
                ghosts_eaten: 0,
                score: 0,
            });
        }
        Ok(GhostOutcome::default())
    }
}

pub struct CountingRenderer(pub SharedProbe);

impl SceneRenderer for CountingRenderer {
    fn create_skybox(&mut self, _map_size: u32) -> GameResult<()> {
        Ok(())
    }

    fn create_ground(&mut self, _map_size: u32) -> GameResult<()> {
        Ok(())
    }

    fn create_level(&mut self) -> GameResult<()> {
        Ok(())
    }

    fn create_player(&mut self) -> GameResult<Pose> {
        Ok(Pose::at(Vec3::new(14.0, 0.0, 14.0)))
    }

    fn render(&mut self, _camera: &CameraPose, _projection: &Projection) -> GameResult<()> {
        self.0.borrow_mut().frames_rendered += 1;
        Ok(())
    }

    fn resize(&mut self, _size: UVec2) -> GameResult<()> {
        Ok(())
    }
}

pub struct RecordingUi(pub SharedProbe);

impl UiSurface for RecordingUi {
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
        let mut probe = self.0.borrow_mut();
        if visible {
            probe.overlays_shown.push(overlay);
        } else {
            probe.overlays_hidden.push(overlay);
        }
    }

    fn set_lives(&mut self, lives: u8) {
        self.0.borrow_mut().lives_display.push(lives);
    }

    fn set_score(&mut self, score: u32) {
        self.0.borrow_mut().scores_display.push(score);
    }

    fn set_cursor_hidden(&mut self, hidden: bool) {
        self.0.borrow_mut().cursor_hidden = Some(hidden);
    }
}

pub struct RecordingSink(pub SharedProbe);

impl AudioSink for RecordingSink {
    fn play(&mut self, cue: AudioCue) {
        self.0.borrow_mut().cues.push(cue);
    }

    fn set_muted(&mut self, _muted: bool) {}
}

/// Builds a session wired entirely to recording doubles.
pub fn build_game(lives: u8, food: u32) -> (Game, SharedProbe) {
    let probe: SharedProbe = Rc::new(RefCell::new(Probe {
        lives,
        food,
        ..Probe::default()
    }));
    let services = Services {
        store: Box::new(StubStore(probe.clone())),
        movement: Box::new(StubMovement),
        collision: Box::new(StubCollision(probe.clone())),
        renderer: Box::new(CountingRenderer(probe.clone())),
    };
    let ui = UiBridge::new(Box::new(RecordingUi(probe.clone()))).expect("recording surface is complete");
    let audio = Audio::new(Box::new(RecordingSink(probe.clone())), false);
    let game = Game::new(services, ui, audio).expect("session should initialize");
    (game, probe)
}
