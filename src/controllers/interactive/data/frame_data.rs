use std::num::NonZeroU32;
use std::time::Duration;

use crate::core::data::frame_buffer::FrameBuffer;

/// A fully painted buffer together with the view it was computed for.
/// Never mutated after it is published.
#[derive(Debug)]
pub struct FrameData {
    pub version: u64,
    pub sample_size: NonZeroU32,
    pub frame_buffer: FrameBuffer,
    pub render_duration: Duration,
}

impl FrameData {
    #[must_use]
    pub fn pixels(&self) -> &[f32] {
        self.frame_buffer.data()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.frame_buffer.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.frame_buffer.height()
    }
}
