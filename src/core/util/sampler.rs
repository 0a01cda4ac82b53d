use crate::core::data::point::Point;
use crate::core::data::sample::Sample;
use std::num::NonZeroU32;

/// Tiles a `width × height` buffer with square blocks of edge `sample_size`,
/// starting at the origin.
///
/// Only whole blocks are produced: the rightmost `width % sample_size`
/// columns and bottom `height % sample_size` rows are left uncovered for
/// the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    columns: u32,
    rows: u32,
    sample_size: NonZeroU32,
}

impl Sampler {
    #[must_use]
    pub fn new(width: u32, height: u32, sample_size: NonZeroU32) -> Self {
        Self {
            columns: width / sample_size.get(),
            rows: height / sample_size.get(),
            sample_size,
        }
    }

    /// Number of whole blocks in a pass.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Row-major blocks. Each call starts a fresh sequence.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        let size = self.sample_size;

        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| {
                Sample::new(
                    Point {
                        x: column * size.get(),
                        y: row * size.get(),
                    },
                    size,
                )
            })
        })
    }
}
