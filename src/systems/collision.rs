use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{NonSendMut, Query, Res, ResMut};

use crate::audio::AudioCue;
use crate::error::GameError;
use crate::services::Services;
use crate::systems::audio::AudioEvent;
use crate::systems::components::{DeltaTime, PlayerControlled, Pose, ScoreResource};
use crate::systems::hud::UiEvent;

/// Resolves the frame's collisions in a fixed order: food, power-up, ghost
/// updates, ghost contact.
///
/// Every host call is individually checked; a failure is reported as a
/// `GameError` event and ends this frame's resolution, so one faulty
/// resolver cannot stall the frame scheduler. The loop picks up again on
/// the next frame.
pub fn collision_system(
    dt: Res<DeltaTime>,
    mut score: ResMut<ScoreResource>,
    mut services: NonSendMut<Services>,
    players: Query<&Pose, With<PlayerControlled>>,
    mut ui_events: EventWriter<UiEvent>,
    mut audio_events: EventWriter<AudioEvent>,
    mut errors: EventWriter<GameError>,
) {
    let pose = match players.single() {
        Ok(pose) => *pose,
        Err(e) => {
            errors.write(GameError::InvalidState(format!("no single player to collide: {e}")));
            return;
        }
    };

    let food = match services.collision.resolve_food(&pose) {
        Ok(outcome) => outcome,
        Err(e) => {
            errors.write(e);
            return;
        }
    };
    if food.eaten > 0 {
        score.0 += food.score;
        audio_events.write(AudioEvent::Play(AudioCue::Munch));
        ui_events.write(UiEvent::SetScore(score.0));
    }

    let power_up = match services.collision.resolve_power_up(&pose) {
        Ok(outcome) => outcome,
        Err(e) => {
            errors.write(e);
            return;
        }
    };
    if power_up.collected {
        score.0 += power_up.score;
        audio_events.write(AudioEvent::Play(AudioCue::PowerUp));
        ui_events.write(UiEvent::SetScore(score.0));
    }

    if let Err(e) = services.collision.update_ghosts(dt.seconds) {
        errors.write(e);
        return;
    }

    let ghosts = match services.collision.resolve_ghosts(&pose) {
        Ok(outcome) => outcome,
        Err(e) => {
            errors.write(e);
            return;
        }
    };
    if ghosts.ghosts_eaten > 0 {
        score.0 += ghosts.score;
        audio_events.write(AudioEvent::Play(AudioCue::EatGhost));
        ui_events.write(UiEvent::SetScore(score.0));
    }
    if ghosts.player_caught {
        let lives = services.store.lives().saturating_sub(1);
        services.store.set_lives(lives);
        audio_events.write(AudioEvent::Play(AudioCue::Death));
        ui_events.write(UiEvent::SetLives(lives));
    }
}
