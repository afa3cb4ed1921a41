//! Terminal rendering
//!
//! `BoardView` mirrors the board by consuming engine events; `Renderer`
//! draws that view with ratatui.

pub mod renderer;
pub mod view;

pub use renderer::Renderer;
pub use view::{BoardView, CellKind};
