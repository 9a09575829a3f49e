//! Camera framing: maps the player pose and the selected view mode to a
//! camera pose, once per simulated frame.

use bevy_ecs::resource::Resource;
use glam::Vec3;
use strum_macros::Display;

use crate::constants::camera::{
    CHASE_OFFSET, EYE_LIFT, EYE_LOOK_HEIGHT, FAR_PLANE, FOV_Y_DEGREES, NEAR_PLANE, OVERHEAD_POSITION, OVERHEAD_TARGET,
    TOP_DOWN_ALTITUDE,
};
use crate::systems::components::Pose;

/// Selects which framing formula applies each frame.
///
/// Exactly one mode is active at a time and switching is an instantaneous
/// cut. The enum is matched exhaustively, so an unrecognized selector (and
/// the stale-pose fallthrough it would cause) cannot exist.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CameraMode {
    /// Eye-level view looking along the player's facing direction.
    FirstPerson,
    /// Overhead strategic view tracking the player from a fixed altitude.
    TopDown,
    /// Behind-and-above view whose offset rotates with the player.
    #[default]
    ThirdPersonChase,
}

/// Where the camera sits and what it looks at for one frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_target: Vec3,
}

impl CameraPose {
    /// The overhead pose shown before the session starts, while paused, and
    /// on the end screens.
    pub const fn overhead() -> Self {
        Self {
            position: OVERHEAD_POSITION,
            look_target: OVERHEAD_TARGET,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::overhead()
    }
}

/// Perspective projection parameters handed to the renderer. The aspect
/// ratio follows the render surface; everything else is fixed.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: FOV_Y_DEGREES,
            aspect: 16.0 / 9.0,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

/// Computes the camera pose for the current frame.
///
/// Pure function of its inputs: no state is carried between frames and no
/// smoothing is applied, so calling it twice with the same pose and mode
/// yields the same result.
pub fn compute_camera_pose(mode: CameraMode, pose: &Pose) -> CameraPose {
    match mode {
        CameraMode::FirstPerson => CameraPose {
            position: pose.position + Vec3::Y * EYE_LIFT,
            look_target: Vec3::new(
                pose.position.x + pose.facing.x,
                EYE_LOOK_HEIGHT,
                pose.position.z + pose.facing.y,
            ),
        },
        CameraMode::TopDown => CameraPose {
            position: Vec3::new(pose.position.x, TOP_DOWN_ALTITUDE, pose.position.z),
            look_target: pose.position,
        },
        CameraMode::ThirdPersonChase => CameraPose {
            // The local offset goes through the player's world transform, so
            // the camera swings around as the player rotates.
            position: pose.transform.transform_point3(CHASE_OFFSET),
            look_target: pose.position,
        },
    }
}
