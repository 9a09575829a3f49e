use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::camera::{compute_camera_pose, CameraMode, CameraPose};
use crate::error::GameError;
use crate::systems::components::{PlayerControlled, Pose};

/// Recomputes the camera pose from the player pose. Runs only while the
/// session is simulating, which is what lets the overhead pose set by pause
/// and the end screens persist.
pub fn camera_system(
    mode: Res<CameraMode>,
    mut camera: ResMut<CameraPose>,
    players: Query<&Pose, With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    match players.single() {
        Ok(pose) => *camera = compute_camera_pose(*mode, pose),
        Err(e) => {
            errors.write(GameError::InvalidState(format!("no single player to frame: {e}")));
        }
    }
}
