use std::num::NonZeroU32;

use crate::core::actions::render_pass::render_pass::PassParams;
use crate::core::config::render_config::SampleSizeBounds;
use crate::core::data::viewport::{MoveDirection, Viewport, ZoomDirection};

/// Everything the input side writes and the compute side snapshots at the
/// start of a pass. Guarded as a unit by the session's view lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    viewport: Viewport,
    width: u32,
    height: u32,
    version: u64,
    sample_size: NonZeroU32,
}

impl ViewState {
    #[must_use]
    pub fn new(viewport: Viewport, width: u32, height: u32, bounds: SampleSizeBounds) -> Self {
        Self {
            viewport,
            width,
            height,
            version: 0,
            sample_size: bounds.max(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn sample_size(&self) -> NonZeroU32 {
        self.sample_size
    }

    /// The point-in-time snapshot a pass works from.
    #[must_use]
    pub fn pass_params(&self) -> PassParams {
        PassParams {
            width: self.width,
            height: self.height,
            sample_size: self.sample_size,
            viewport: self.viewport,
        }
    }

    /// Stores the new surface size. Zero-area sizes (a minimised window) are
    /// ignored so the last visible frame stays valid.
    pub fn resize(&mut self, width: u32, height: u32, bounds: SampleSizeBounds) -> bool {
        if width == 0 || height == 0 {
            return false;
        }

        self.width = width;
        self.height = height;
        self.invalidate(bounds.max());
        true
    }

    pub fn apply_move(
        &mut self,
        direction: Option<MoveDirection>,
        dt: f64,
        bounds: SampleSizeBounds,
    ) -> bool {
        let Some(direction) = direction else {
            return false;
        };

        self.viewport.pan(direction, dt);
        self.invalidate(bounds.max());
        true
    }

    pub fn apply_zoom(
        &mut self,
        direction: Option<ZoomDirection>,
        dt: f64,
        bounds: SampleSizeBounds,
    ) -> bool {
        let Some(direction) = direction else {
            return false;
        };

        self.viewport.zoom(direction, dt);
        self.invalidate(bounds.max());
        true
    }

    /// Schedules a pass over the unchanged view at a finer sample size.
    pub fn refine(&mut self, sample_size: NonZeroU32) {
        self.invalidate(sample_size);
    }

    fn invalidate(&mut self, sample_size: NonZeroU32) {
        self.sample_size = sample_size;
        self.version += 1;
    }
}

/// Bounds one input step to `[0, max_dt]`; negative or non-finite steps
/// (a clock hiccup) count as no elapsed time.
#[must_use]
pub fn clamp_input_dt(dt: f64, max_dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(max_dt)
    } else {
        0.0
    }
}
