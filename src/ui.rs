//! The UI side of the host bridge: overlay panels, the lives and score
//! displays, and cursor visibility.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::debug;

use crate::error::{GameResult, UiError};

/// Full-screen panels shown while the session is not running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Overlay {
    Start,
    Pause,
    GameOver,
    Victory,
}

/// The host's UI surface. Implementations toggle real overlay elements and
/// update the lives/score displays; the contract is that after a call
/// returns, the surface reflects the requested state.
pub trait UiSurface {
    /// Reports whether the host exposes a panel for `overlay`.
    fn has_overlay(&self, overlay: Overlay) -> bool;
    fn has_lives_display(&self) -> bool;
    fn has_score_display(&self) -> bool;

    fn set_overlay_visible(&mut self, overlay: Overlay, visible: bool);
    fn set_lives(&mut self, lives: u8);
    fn set_score(&mut self, score: u32);
    fn set_cursor_hidden(&mut self, hidden: bool);
}

/// Validated wrapper around the host UI surface.
///
/// Construction checks every required handle up front, so a missing element
/// fails at startup with a descriptive error instead of surfacing later
/// inside the frame loop.
pub struct UiBridge {
    surface: Box<dyn UiSurface>,
}

impl UiBridge {
    pub fn new(surface: Box<dyn UiSurface>) -> GameResult<Self> {
        for overlay in Overlay::iter() {
            if !surface.has_overlay(overlay) {
                return Err(UiError::MissingOverlay(overlay).into());
            }
        }
        if !surface.has_lives_display() {
            return Err(UiError::MissingLivesDisplay.into());
        }
        if !surface.has_score_display() {
            return Err(UiError::MissingScoreDisplay.into());
        }
        Ok(Self { surface })
    }

    pub fn show_overlay(&mut self, overlay: Overlay) {
        debug!(%overlay, "Showing overlay");
        self.surface.set_overlay_visible(overlay, true);
    }

    pub fn hide_overlay(&mut self, overlay: Overlay) {
        debug!(%overlay, "Hiding overlay");
        self.surface.set_overlay_visible(overlay, false);
    }

    pub fn set_lives(&mut self, lives: u8) {
        self.surface.set_lives(lives);
    }

    pub fn set_score(&mut self, score: u32) {
        self.surface.set_score(score);
    }

    pub fn set_cursor_hidden(&mut self, hidden: bool) {
        self.surface.set_cursor_hidden(hidden);
    }
}
