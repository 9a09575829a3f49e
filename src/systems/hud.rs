use bevy_ecs::event::{Event, EventReader};
use bevy_ecs::system::NonSendMut;

use crate::ui::{Overlay, UiBridge};

/// UI traffic produced during the frame, applied to the host surface by
/// [`hud_system`] after gameplay and status systems have run.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    ShowOverlay(Overlay),
    HideOverlay(Overlay),
    SetLives(u8),
    SetScore(u32),
    SetCursorHidden(bool),
}

pub fn hud_system(mut events: EventReader<UiEvent>, mut bridge: NonSendMut<UiBridge>) {
    for event in events.read() {
        match *event {
            UiEvent::ShowOverlay(overlay) => bridge.show_overlay(overlay),
            UiEvent::HideOverlay(overlay) => bridge.hide_overlay(overlay),
            UiEvent::SetLives(lives) => bridge.set_lives(lives),
            UiEvent::SetScore(score) => bridge.set_score(score),
            UiEvent::SetCursorHidden(hidden) => bridge.set_cursor_hidden(hidden),
        }
    }
}
