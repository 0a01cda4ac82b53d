use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use std::num::NonZeroU32;

/// One square block of a pass: the sampler fills in `origin` and `size`,
/// projection fills in `world`, evaluation fills in `colour`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub origin: Point,
    pub size: NonZeroU32,
    pub world: Complex,
    pub colour: Colour,
}

impl Sample {
    #[must_use]
    pub fn new(origin: Point, size: NonZeroU32) -> Self {
        Self {
            origin,
            size,
            world: Complex::ZERO,
            colour: Colour::BLACK,
        }
    }

    /// Center of the block in continuous pixel coordinates.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        let half = f64::from(self.size.get()) / 2.0;

        (
            f64::from(self.origin.x) + half,
            f64::from(self.origin.y) + half,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sample_is_unprojected_and_black() {
        let sample = Sample::new(Point { x: 10, y: 20 }, NonZeroU32::new(4).unwrap());

        assert_eq!(sample.world, Complex::ZERO);
        assert_eq!(sample.colour, Colour::BLACK);
    }

    #[test]
    fn test_center_of_odd_sized_block_is_fractional() {
        let sample = Sample::new(Point { x: 0, y: 6 }, NonZeroU32::new(3).unwrap());

        assert_eq!(sample.center(), (1.5, 7.5));
    }
}
