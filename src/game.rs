//! This module contains the session state and the per-frame schedule.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::Res;
use bevy_ecs::world::World;
use tracing::{debug, info};

use crate::audio::Audio;
use crate::camera::{CameraMode, CameraPose, Projection};
use crate::constants::MAP_SIZE;
use crate::error::{GameError, GameResult};
use crate::events::{GameEvent, InputEvent};
use crate::services::Services;
use crate::systems::{
    audio_system, camera_system, collision_system, command_system, error_report_system, hud_system, input_system,
    movement_system, render_system, status_system, AudioEvent, Bindings, DeltaTime, GameStatus, GlobalState, InputQueue,
    InputState, PendingResize, PlayerBundle, PlayerControlled, ScoreResource, TouchState, UiEvent,
};
use crate::ui::{Overlay, UiBridge};

/// System sets for the gameplay half of the frame.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Drains the host event queue and applies one-shot commands.
    Input,
    /// Movement, camera framing, and collision resolution; skipped while stopped.
    Update,
    /// Terminal-condition checks and error reporting.
    Respond,
}

/// System sets for the presentation half of the frame.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum RenderSet {
    /// UI and audio traffic toward the host bridges.
    Bridge,
    Present,
}

/// Core session state built on the Bevy ECS architecture.
///
/// Owns a `World` holding the player entity, the status/camera/input
/// resources, and the host service handles, while a `Schedule` fixes the
/// per-frame system order. Constructed once per session; there is no global
/// mutable state, so multiple sessions can coexist in tests.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Initializes a session against the given host services.
    ///
    /// Builds the static scene through the renderer, primes the UI surface
    /// (start overlay, lives, score), spawns the player entity at the pose
    /// the renderer reports, and wires the system schedule.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if scene construction fails; UI surface
    /// validation happens earlier, in [`UiBridge::new`].
    pub fn new(mut services: Services, mut ui: UiBridge, audio: Audio) -> GameResult<Game> {
        info!("Starting session initialization");

        debug!("Building scene geometry");
        services.renderer.create_skybox(MAP_SIZE)?;
        services.renderer.create_ground(MAP_SIZE)?;
        services.renderer.create_level()?;
        let player_pose = services.renderer.create_player()?;

        debug!(lives = services.store.lives(), "Priming UI displays");
        ui.show_overlay(Overlay::Start);
        ui.set_lives(services.store.lives());
        ui.set_score(0);

        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameError>(&mut world);
        EventRegistry::register_event::<GameEvent>(&mut world);
        EventRegistry::register_event::<UiEvent>(&mut world);
        EventRegistry::register_event::<AudioEvent>(&mut world);

        world.insert_resource(GameStatus::default());
        world.insert_resource(GlobalState::default());
        world.insert_resource(ScoreResource::default());
        world.insert_resource(DeltaTime::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(InputQueue::default());
        world.insert_resource(InputState::default());
        world.insert_resource(TouchState::default());
        world.insert_resource(CameraMode::default());
        world.insert_resource(CameraPose::overhead());
        world.insert_resource(Projection::default());
        world.insert_resource(PendingResize::default());

        world.insert_non_send_resource(services);
        world.insert_non_send_resource(ui);
        world.insert_non_send_resource(audio);

        world.spawn(PlayerBundle {
            player: PlayerControlled,
            pose: player_pose,
        });

        Self::configure_schedule(&mut schedule);

        info!("Session initialization completed");
        Ok(Game { world, schedule })
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                (input_system, command_system).chain().in_set(GameplaySet::Input),
                (movement_system, camera_system, collision_system)
                    .chain()
                    .in_set(GameplaySet::Update),
                (status_system, error_report_system).chain().in_set(GameplaySet::Respond),
                (hud_system, audio_system).chain().in_set(RenderSet::Bridge),
                render_system.in_set(RenderSet::Present),
            ))
            .configure_sets(
                (
                    GameplaySet::Input,
                    GameplaySet::Update.run_if(|status: Res<GameStatus>| status.is_running()),
                    GameplaySet::Respond,
                    RenderSet::Bridge,
                    RenderSet::Present,
                )
                    .chain(),
            );
    }

    /// Queues a host event for the next frame.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.world.resource_mut::<InputQueue>().0.push_back(event);
    }

    /// Runs one frame of the session.
    ///
    /// # Arguments
    ///
    /// * `dt` - Seconds since the previous frame.
    ///
    /// # Returns
    ///
    /// `true` if the session requested exit, `false` to continue.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.world.insert_resource(DeltaTime { seconds: dt });

        // Swap the per-frame event buffers before this frame's writes land.
        self.world.resource_mut::<Events<GameError>>().update();
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<UiEvent>>().update();
        self.world.resource_mut::<Events<AudioEvent>>().update();

        self.schedule.run(&mut self.world);

        self.world
            .get_resource::<GlobalState>()
            .map(|state| state.exit)
            .unwrap_or(true)
    }
}
