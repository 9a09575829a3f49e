use bevy_ecs::event::{Event, EventReader};
use bevy_ecs::system::NonSendMut;
use tracing::debug;

use crate::audio::{Audio, AudioCue};

/// Audio traffic produced during the frame, applied to the bridge by
/// [`audio_system`].
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Play(AudioCue),
    ToggleMute,
}

pub fn audio_system(mut events: EventReader<AudioEvent>, mut audio: NonSendMut<Audio>) {
    for event in events.read() {
        match *event {
            AudioEvent::Play(cue) => audio.play(cue),
            AudioEvent::ToggleMute => {
                let muted = audio.toggle_mute();
                debug!(muted, "Audio mute toggled");
            }
        }
    }
}
