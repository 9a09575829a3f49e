//! Headless demo entry point: wires the reference backends into a session
//! and drives the frame loop at 60 Hz.

use std::env;

use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use muncher::app::App;
use muncher::audio::Audio;
use muncher::constants::LOOP_TIME;
use muncher::formatter::TickFormatter;
use muncher::game::Game;
use muncher::headless::{demo_services, LoggingUi, ScriptedPump, SilentSink};
use muncher::ui::UiBridge;

/// The main entry point of the application.
///
/// Initializes tracing, builds the session over the headless backends, and
/// enters the main game loop.
pub fn main() {
    let args: Vec<String> = env::args().collect();
    let start_muted = args.iter().any(|arg| arg == "--mute" || arg == "-m");
    let frames = args
        .iter()
        .position(|arg| arg == "--frames")
        .and_then(|index| args.get(index + 1))
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(600);

    let subscriber = tracing_subscriber::fmt()
        .event_format(TickFormatter)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber).expect("Could not set global default subscriber");

    let services = demo_services(20, 15);
    let ui = UiBridge::new(Box::new(LoggingUi::default())).expect("Headless UI surface is incomplete");
    let audio = Audio::new(Box::new(SilentSink), start_muted);

    let game = Game::new(services, ui, audio).expect("Could not create session");
    let mut app = App::new(game, Box::new(ScriptedPump::demo(frames)));

    info!(loop_time = ?LOOP_TIME, frames, "Starting game loop");
    loop {
        if !app.run() {
            break;
        }
    }
}
