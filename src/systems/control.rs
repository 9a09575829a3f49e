use bevy_ecs::event::{EventReader, EventWriter};
use bevy_ecs::system::ResMut;
use tracing::{debug, info};

use crate::camera::{CameraMode, CameraPose};
use crate::events::{GameCommand, GameEvent};
use crate::systems::audio::AudioEvent;
use crate::systems::components::{GameStatus, GlobalState};
use crate::systems::hud::UiEvent;
use crate::ui::Overlay;

/// Applies the one-shot commands emitted by the input layer. Runs every
/// frame, paused or not, so the session can be resumed and exited from any
/// stopped screen.
pub fn command_system(
    mut events: EventReader<GameEvent>,
    mut status: ResMut<GameStatus>,
    mut camera_mode: ResMut<CameraMode>,
    mut camera: ResMut<CameraPose>,
    mut state: ResMut<GlobalState>,
    mut ui_events: EventWriter<UiEvent>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = *event;
        match command {
            GameCommand::Begin => {
                if let GameStatus::NotRunning { overlay } = *status {
                    info!(%overlay, "Session running");
                    *status = GameStatus::Running;
                    ui_events.write(UiEvent::HideOverlay(overlay));
                    ui_events.write(UiEvent::SetCursorHidden(true));
                }
            }
            GameCommand::TogglePause => {
                // Only a running session can pause; resuming goes through Begin.
                if status.is_running() {
                    info!("Session paused");
                    *status = GameStatus::stopped(Overlay::Pause);
                    *camera = CameraPose::overhead();
                    ui_events.write(UiEvent::ShowOverlay(Overlay::Pause));
                    ui_events.write(UiEvent::SetCursorHidden(false));
                }
            }
            GameCommand::SetCameraMode(mode) => {
                // Instantaneous cut; repeated presses are no-ops.
                if *camera_mode != mode {
                    debug!(%mode, "Camera mode switched");
                }
                *camera_mode = mode;
            }
            GameCommand::ToggleMute => {
                audio_events.write(AudioEvent::ToggleMute);
            }
            GameCommand::Exit => {
                info!("Exit requested");
                state.exit = true;
            }
        }
    }
}
