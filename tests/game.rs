use muncher::audio::AudioCue;
use muncher::camera::{CameraMode, CameraPose};
use muncher::events::{InputEvent, Key};
use muncher::game::Game;
use muncher::systems::components::GameStatus;
use muncher::ui::Overlay;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;
use common::build_game;

const DT: f32 = 1.0 / 60.0;

fn begin(game: &mut Game) {
    game.queue_input(InputEvent::Begin);
    game.tick(DT);
}

#[test]
fn session_starts_on_the_start_screen() {
    let (game, probe) = build_game(3, 10);
    assert_eq!(*game.world.resource::<GameStatus>(), GameStatus::stopped(Overlay::Start));
    assert_that(&probe.borrow().overlays_shown).contains(Overlay::Start);
    // drawLives-equivalent priming at startup
    assert_that(&probe.borrow().lives_display).contains(3);
    assert_that(&probe.borrow().scores_display).contains(0);
}

#[test]
fn begin_hides_overlay_and_starts_running() {
    let (mut game, probe) = build_game(3, 10);
    begin(&mut game);
    assert_eq!(*game.world.resource::<GameStatus>(), GameStatus::Running);
    assert_that(&probe.borrow().overlays_hidden).contains(Overlay::Start);
    assert_eq!(probe.borrow().cursor_hidden, Some(true));
}

#[test]
fn food_resolution_keeps_session_running() {
    let (mut game, probe) = build_game(3, 10);
    begin(&mut game);

    probe.borrow_mut().eat_pellet = true;
    let frames_before = probe.borrow().frames_rendered;
    game.tick(DT);

    assert_eq!(probe.borrow().food, 9);
    assert_eq!(*game.world.resource::<GameStatus>(), GameStatus::Running);
    assert_that(&probe.borrow().frames_rendered).is_greater_than(frames_before);
    assert_that(&probe.borrow().cues).contains(AudioCue::Munch);
    assert_that(&probe.borrow().scores_display).contains(10);
    // No terminal overlay appeared.
    let shown = probe.borrow().overlays_shown.clone();
    assert_eq!(shown, vec![Overlay::Start]);
}

#[test]
fn losing_last_life_shows_defeat_and_reseeds_lives() {
    let (mut game, probe) = build_game(1, 10);
    begin(&mut game);

    probe.borrow_mut().kill_player = true;
    game.tick(DT);

    assert_eq!(
        *game.world.resource::<GameStatus>(),
        GameStatus::stopped(Overlay::GameOver)
    );
    assert_that(&probe.borrow().overlays_shown).contains(Overlay::GameOver);
    let shown = probe.borrow().overlays_shown.clone();
    assert_that(&shown.contains(&Overlay::Victory)).is_false();

    // The store reports the re-seeded starting lives after defeat.
    assert_eq!(probe.borrow().lives, 3);
    assert_that(&probe.borrow().lives_display).contains(0);
    assert_that(&probe.borrow().lives_display).contains(3);
    assert_that(&probe.borrow().cues).contains(AudioCue::Death);
    assert_eq!(*game.world.resource::<CameraPose>(), CameraPose::overhead());
}

#[test]
fn clearing_food_shows_victory_and_keeps_lives() {
    let (mut game, probe) = build_game(2, 1);
    begin(&mut game);

    probe.borrow_mut().eat_pellet = true;
    game.tick(DT);

    assert_eq!(
        *game.world.resource::<GameStatus>(),
        GameStatus::stopped(Overlay::Victory)
    );
    assert_that(&probe.borrow().overlays_shown).contains(Overlay::Victory);
    assert_eq!(probe.borrow().lives, 2);
    assert_eq!(*game.world.resource::<CameraPose>(), CameraPose::overhead());
}

#[test]
fn victory_transition_fires_once() {
    let (mut game, probe) = build_game(2, 1);
    begin(&mut game);
    probe.borrow_mut().eat_pellet = true;
    game.tick(DT);
    game.tick(DT);
    game.tick(DT);

    let shown = probe.borrow().overlays_shown.clone();
    let victories = shown.iter().filter(|overlay| **overlay == Overlay::Victory).count();
    assert_eq!(victories, 1);
}

#[test]
fn pausing_restores_overhead_camera() {
    let (mut game, probe) = build_game(3, 10);
    begin(&mut game);

    // Wander a little so the chase camera leaves the overhead pose.
    game.queue_input(InputEvent::KeyDown(Key::D));
    game.tick(DT);
    game.tick(DT);
    assert!(*game.world.resource::<CameraPose>() != CameraPose::overhead());

    game.queue_input(InputEvent::KeyDown(Key::Escape));
    game.tick(DT);

    assert_eq!(*game.world.resource::<GameStatus>(), GameStatus::stopped(Overlay::Pause));
    assert_eq!(*game.world.resource::<CameraPose>(), CameraPose::overhead());
    assert_that(&probe.borrow().overlays_shown).contains(Overlay::Pause);
    assert_eq!(probe.borrow().cursor_hidden, Some(false));
}

#[test]
fn begin_resumes_after_pause() {
    let (mut game, probe) = build_game(3, 10);
    begin(&mut game);
    game.queue_input(InputEvent::KeyDown(Key::P));
    game.tick(DT);

    game.queue_input(InputEvent::Begin);
    game.tick(DT);

    assert_eq!(*game.world.resource::<GameStatus>(), GameStatus::Running);
    assert_that(&probe.borrow().overlays_hidden).contains(Overlay::Pause);
}

#[test]
fn camera_mode_keys_switch_modes() {
    let (mut game, _probe) = build_game(3, 10);
    begin(&mut game);

    game.queue_input(InputEvent::KeyDown(Key::Num1));
    game.tick(DT);
    assert_eq!(*game.world.resource::<CameraMode>(), CameraMode::FirstPerson);

    game.queue_input(InputEvent::KeyDown(Key::Num2));
    game.tick(DT);
    assert_eq!(*game.world.resource::<CameraMode>(), CameraMode::TopDown);

    // Repeats are idempotent.
    game.queue_input(InputEvent::KeyDown(Key::Num2));
    game.tick(DT);
    assert_eq!(*game.world.resource::<CameraMode>(), CameraMode::TopDown);
}

#[test]
fn collision_failure_skips_frame_but_loop_continues() {
    let (mut game, probe) = build_game(3, 10);
    begin(&mut game);

    probe.borrow_mut().fail_food = true;
    let frames_before = probe.borrow().frames_rendered;
    game.tick(DT);

    // The failing frame still rendered and the session stayed up.
    assert_eq!(*game.world.resource::<GameStatus>(), GameStatus::Running);
    assert_that(&probe.borrow().frames_rendered).is_greater_than(frames_before);

    // The next frame resolves normally.
    probe.borrow_mut().eat_pellet = true;
    game.tick(DT);
    assert_eq!(probe.borrow().food, 9);
}

#[test]
fn renders_every_frame_while_paused() {
    let (mut game, probe) = build_game(3, 10);
    begin(&mut game);
    game.queue_input(InputEvent::KeyDown(Key::P));
    game.tick(DT);

    let frames_before = probe.borrow().frames_rendered;
    game.tick(DT);
    game.tick(DT);
    game.tick(DT);
    assert_eq!(probe.borrow().frames_rendered, frames_before + 3);
}

#[test]
fn quit_event_requests_exit() {
    let (mut game, _probe) = build_game(3, 10);
    begin(&mut game);
    game.queue_input(InputEvent::Quit);
    assert_that(&game.tick(DT)).is_true();
}

#[test]
fn mute_toggle_reaches_audio_bridge() {
    let (mut game, probe) = build_game(3, 10);
    begin(&mut game);

    game.queue_input(InputEvent::KeyDown(Key::M));
    game.tick(DT);

    // While muted, cue traffic is dropped by the bridge.
    probe.borrow_mut().cues.clear();
    probe.borrow_mut().eat_pellet = true;
    game.tick(DT);
    assert_that(&probe.borrow().cues).is_empty();

    // Unmute; cues flow again.
    game.queue_input(InputEvent::KeyDown(Key::M));
    game.tick(DT);
    probe.borrow_mut().eat_pellet = true;
    game.tick(DT);
    assert_that(&probe.borrow().cues).contains(AudioCue::Munch);
}
