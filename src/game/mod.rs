//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine reports [`GameEvent`]s that the rest of the crate reacts to.

pub mod action;
pub mod config;
pub mod engine;
pub mod event;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::GameEngine;
pub use event::{GameEvent, PauseState};
pub use state::{CollisionType, GameState, GameStatus, Position, Snake};
