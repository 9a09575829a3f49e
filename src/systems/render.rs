use bevy_ecs::event::EventWriter;
use bevy_ecs::system::{NonSendMut, Res, ResMut};
use tracing::debug;

use crate::camera::{CameraPose, Projection};
use crate::error::GameError;
use crate::services::Services;
use crate::systems::components::PendingResize;

/// Presents the scene. Runs every frame regardless of session status, so
/// the last simulated frame stays on screen while paused or stopped.
pub fn render_system(
    camera: Res<CameraPose>,
    projection: Res<Projection>,
    mut resize: ResMut<PendingResize>,
    mut services: NonSendMut<Services>,
    mut errors: EventWriter<GameError>,
) {
    if let Some(size) = resize.0.take() {
        debug!(width = size.x, height = size.y, "Resizing render surface");
        if let Err(e) = services.renderer.resize(size) {
            errors.write(e);
        }
    }

    if let Err(e) = services.renderer.render(&camera, &projection) {
        errors.write(e);
    }
}
