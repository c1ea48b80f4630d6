//! Chat Snake - a terminal Snake game with a talking snake
//!
//! This library provides:
//! - Core game logic (game module)
//! - The snake's personality, replies and chat log (chat module)
//! - Spoken replies through a serialized speech queue (speech module)
//! - Sound effects (audio module)
//! - TUI rendering and keyboard input (render, input modules)
//! - The interactive game loop (modes module)

pub mod audio;
pub mod chat;
pub mod config;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod speech;

pub use config::AppConfig;
