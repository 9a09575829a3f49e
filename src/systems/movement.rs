use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{NonSendMut, Query, Res};

use crate::camera::CameraMode;
use crate::error::GameError;
use crate::services::Services;
use crate::systems::components::{DeltaTime, PlayerControlled, Pose};
use crate::systems::input::InputState;

/// Applies the host movement rules to the player pose. First-person control
/// follows the camera facing; every other mode uses the standard grid rules.
pub fn movement_system(
    mode: Res<CameraMode>,
    input: Res<InputState>,
    dt: Res<DeltaTime>,
    mut services: NonSendMut<Services>,
    mut players: Query<&mut Pose, With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    let mut pose = match players.single_mut() {
        Ok(pose) => pose,
        Err(e) => {
            errors.write(GameError::InvalidState(format!("no single player to move: {e}")));
            return;
        }
    };

    let result = match *mode {
        CameraMode::FirstPerson => services.movement.apply_first_person(&mut pose, &input, dt.seconds),
        CameraMode::TopDown | CameraMode::ThirdPersonChase => {
            services.movement.apply_standard(&mut pose, &input, dt.seconds)
        }
    };

    if let Err(e) = result {
        errors.write(e);
    }
}
