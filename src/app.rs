use std::time::{Duration, Instant};

use tracing::info;

use crate::constants::LOOP_TIME;
use crate::formatter;
use crate::game::Game;
use crate::platform;
use crate::services::InputPump;

/// Main application wrapper: owns the session, the host event pump, and
/// frame pacing.
pub struct App {
    pub game: Game,
    pump: Box<dyn InputPump>,
    last_tick: Instant,
    focused: bool,
}

impl App {
    pub fn new(game: Game, pump: Box<dyn InputPump>) -> Self {
        App {
            game,
            pump,
            last_tick: Instant::now(),
            focused: true,
        }
    }

    /// Lets the host report focus changes; unfocused frames use a coarser sleep.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Executes a single frame of the game loop with consistent timing.
    ///
    /// Forwards this frame's host events into the session, runs game logic
    /// via `game.tick()`, and sleeps out the remainder of the target
    /// `LOOP_TIME` when the frame finished early.
    ///
    /// # Returns
    ///
    /// `true` if the loop should continue, `false` if the session requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = start;

        // Increment the global tick counter for tracing
        formatter::increment_tick();

        for event in self.pump.poll() {
            self.game.queue_input(event);
        }

        if self.game.tick(dt) {
            info!("Exit requested. Exiting...");
            return false;
        }

        if start.elapsed() < LOOP_TIME {
            let remaining = LOOP_TIME.saturating_sub(start.elapsed());
            if remaining != Duration::ZERO {
                platform::sleep(remaining, self.focused);
            }
        }

        true
    }
}
