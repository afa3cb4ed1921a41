//! Snake in the terminal
//!
//! - `game`: the tick-driven engine, pure state with no I/O
//! - `render`: event-fed board view and ratatui drawing
//! - `input`: key event mapping
//! - `metrics`: per-session stats
//! - `app`: the tokio game loop tying it all together

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
