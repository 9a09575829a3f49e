//! Centralized error types for the game core.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use bevy_ecs::event::Event;

use crate::ui::Overlay;

/// Main error type for the game core.
///
/// This is the primary error type that should be used in public APIs. It
/// also derives `Event` so per-frame failures can be reported through the
/// ECS event queue instead of unwinding the frame scheduler.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("UI error: {0}")]
    Ui(#[from] UiError),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Movement error: {0}")]
    Movement(String),

    #[error("Collision error: {0}")]
    Collision(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised while validating the host UI surface at startup.
///
/// A missing element fails session construction immediately rather than
/// surfacing as a broken lookup mid-frame.
#[derive(thiserror::Error, Debug)]
pub enum UiError {
    #[error("Overlay element missing: {0}")]
    MissingOverlay(Overlay),

    #[error("Lives display missing")]
    MissingLivesDisplay,

    #[error("Score display missing")]
    MissingScoreDisplay,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
