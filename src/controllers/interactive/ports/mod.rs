//! Port definitions for the render session.
//!
//! Contains trait definitions that define interfaces between the session
//! and the display side.

pub mod frame_listener;
