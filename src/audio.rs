//! This module handles audio cue dispatch for the game.
//!
//! The actual playback lives behind the [`AudioSink`] trait; this wrapper
//! owns the mute state machine so cue traffic is dropped consistently no
//! matter which backend is attached.

use strum_macros::Display;
use tracing::debug;

/// The audio cues the game can request from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AudioCue {
    /// Looping background track. Requested on every key press; backends
    /// treat a request while it is already looping as a no-op.
    Music,
    Munch,
    PowerUp,
    Death,
    EatGhost,
}

/// Host playback surface.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);

    /// Mutes or unmutes anything currently playing (the looping music track
    /// keeps running silently while muted).
    fn set_muted(&mut self, muted: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Enabled,
    Muted,
    Disabled,
}

/// The audio bridge for the game.
///
/// Cues are forwarded to the sink only while enabled. The mute flag is
/// tracked even when the sink is disabled, so the user's preference survives
/// a backend that failed to initialize.
pub struct Audio {
    sink: Box<dyn AudioSink>,
    state: SinkState,
}

impl Audio {
    /// Wraps a host sink. `start_muted` honors a mute launch flag.
    pub fn new(sink: Box<dyn AudioSink>, start_muted: bool) -> Self {
        let state = if start_muted { SinkState::Muted } else { SinkState::Enabled };
        let mut audio = Self { sink, state };
        if start_muted {
            audio.sink.set_muted(true);
        }
        audio
    }

    /// A bridge that drops every cue; used when the host has no audio device.
    pub fn disabled() -> Self {
        debug!("Audio disabled, cues will be dropped");
        Self {
            sink: Box::new(NullSink),
            state: SinkState::Disabled,
        }
    }

    /// Plays the provided cue, unless muted or disabled.
    pub fn play(&mut self, cue: AudioCue) {
        if self.state == SinkState::Enabled {
            self.sink.play(cue);
        }
    }

    /// Flips the mute flag and returns the new muted state.
    pub fn toggle_mute(&mut self) -> bool {
        match self.state {
            SinkState::Enabled => {
                self.state = SinkState::Muted;
                self.sink.set_muted(true);
            }
            SinkState::Muted => {
                self.state = SinkState::Enabled;
                self.sink.set_muted(false);
            }
            SinkState::Disabled => {}
        }
        self.is_muted()
    }

    /// Returns the current mute state regardless of whether audio is functional.
    pub fn is_muted(&self) -> bool {
        self.state == SinkState::Muted
    }

    pub fn is_disabled(&self) -> bool {
        self.state == SinkState::Disabled
    }
}

struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _cue: AudioCue) {}
    fn set_muted(&mut self, _muted: bool) {}
}
