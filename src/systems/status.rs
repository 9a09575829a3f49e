use bevy_ecs::event::{EventReader, EventWriter};
use bevy_ecs::system::{NonSendMut, ResMut};
use tracing::{error, info};

use crate::camera::CameraPose;
use crate::constants::STARTING_LIVES;
use crate::error::GameError;
use crate::services::Services;
use crate::systems::components::GameStatus;
use crate::systems::hud::UiEvent;
use crate::ui::Overlay;

/// Terminal-condition checks. Runs every frame irrespective of whether the
/// session is simulating, reading the counters owned by the maze store.
///
/// Defeat takes precedence when both counters hit zero on the same frame.
/// Defeat re-seeds the starting lives; victory deliberately does not, so a
/// continue flow keeps whatever the player had left.
pub fn status_system(
    mut status: ResMut<GameStatus>,
    mut camera: ResMut<CameraPose>,
    mut services: NonSendMut<Services>,
    mut ui_events: EventWriter<UiEvent>,
) {
    if services.store.lives() == 0 {
        info!("All lives lost, session over");
        *status = GameStatus::stopped(Overlay::GameOver);
        *camera = CameraPose::overhead();
        ui_events.write(UiEvent::ShowOverlay(Overlay::GameOver));
        ui_events.write(UiEvent::SetCursorHidden(false));
        services.store.set_lives(STARTING_LIVES);
        ui_events.write(UiEvent::SetLives(STARTING_LIVES));
        return;
    }

    // The cleared-maze condition would hold on every subsequent frame; the
    // transition fires only once.
    if services.store.food_count() == 0 && *status != GameStatus::stopped(Overlay::Victory) {
        info!(lives = services.store.lives(), "Maze cleared");
        *status = GameStatus::stopped(Overlay::Victory);
        *camera = CameraPose::overhead();
        ui_events.write(UiEvent::ShowOverlay(Overlay::Victory));
        ui_events.write(UiEvent::SetCursorHidden(false));
    }
}

/// Drains the failures reported during the frame and logs them. The frame
/// scheduler itself never unwinds on a host fault.
pub fn error_report_system(mut errors: EventReader<GameError>) {
    for report in errors.read() {
        error!(%report, "Frame step failed");
    }
}
