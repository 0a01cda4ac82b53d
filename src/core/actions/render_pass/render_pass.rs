use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::render_pass::evaluate_sample::evaluate_sample;
use crate::core::actions::render_pass::ports::colour_map::ColourMap;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::sample::Sample;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;
use crate::core::util::project_sample::project_sample;
use crate::core::util::sampler::Sampler;
use std::num::NonZeroU32;

/// Everything one pass needs, captured once before the pass starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassParams {
    pub width: u32,
    pub height: u32,
    pub sample_size: NonZeroU32,
    pub viewport: Viewport,
}

/// Renders a full pass with no way to abort it.
#[must_use]
pub fn render_pass<Alg, CMap>(
    params: &PassParams,
    algorithm: &Alg,
    colour_map: &CMap,
) -> FrameBuffer
where
    Alg: EscapeTimeAlgorithm,
    CMap: ColourMap,
{
    match render_pass_cancelable(params, algorithm, colour_map, &NeverCancel) {
        Ok(buffer) => buffer,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Renders one pass: sample the grid, project and colour every block on the
/// rayon pool, then paint the blocks into a fresh buffer.
///
/// `cancel` is polled before every block's projection and evaluation and
/// again before every fill, so a stale pass stops within one block of work
/// per worker. A cancelled pass returns [`Cancelled`] and its buffer is
/// dropped.
pub fn render_pass_cancelable<Alg, CMap, C>(
    params: &PassParams,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<FrameBuffer, Cancelled>
where
    Alg: EscapeTimeAlgorithm,
    CMap: ColourMap,
    C: CancelToken,
{
    if cancel.is_cancelled() {
        return Err(Cancelled);
    }

    let sampler = Sampler::new(params.width, params.height, params.sample_size);
    let mut samples: Vec<Sample> = Vec::with_capacity(sampler.block_count());
    samples.extend(sampler.samples());

    samples.par_iter_mut().try_for_each(|sample| {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        project_sample(sample, params.width, params.height, &params.viewport);
        evaluate_sample(sample, algorithm, colour_map);

        Ok(())
    })?;

    let mut buffer = FrameBuffer::new(params.width, params.height);

    for sample in &samples {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        buffer.fill(sample);
    }

    Ok(buffer)
}
