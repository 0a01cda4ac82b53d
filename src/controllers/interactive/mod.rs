//! Interactive render session for real-time exploration.
//!
//! # Architecture
//!
//! The session follows the ports & adapters pattern:
//! - **Input**: move, zoom and resize intents from the display side
//! - **Output**: the published [`FrameData`], plus an optional
//!   [`FrameListener`] notified after each publish
//! - **Core**: uses the render pass from `core/` for the actual computation

pub mod data;
pub mod errors;
pub mod ports;
pub mod quality;
mod session;
pub mod state;

pub use data::frame_data::FrameData;
pub use errors::SessionError;
pub use ports::frame_listener::FrameListener;
pub use session::RenderSession;
