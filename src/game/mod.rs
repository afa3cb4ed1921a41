//! Core game logic for Snake
//!
//! Everything in here is pure state: no I/O, no timers, no rendering.
//! The engine advances one step per `tick` call and reports state changes
//! as events, so it can be driven by any scheduler and unit tested without
//! one.

pub mod config;
pub mod direction;
pub mod engine;
pub mod event;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::GameEngine;
pub use event::GameEvent;
pub use grid::OccupancyGrid;
pub use state::{Cell, Phase, Snake};
