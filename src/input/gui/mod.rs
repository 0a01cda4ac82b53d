//! GUI input adapter for interactive exploration.
//!
//! This module provides a windowed interface using winit for window
//! management and keyboard input, and pixels for framebuffer rendering.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;

pub use events::GuiEvent;
