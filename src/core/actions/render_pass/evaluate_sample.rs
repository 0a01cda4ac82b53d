use crate::core::actions::render_pass::ports::colour_map::ColourMap;
use crate::core::data::sample::Sample;
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;

/// Colours a projected sample. Reads only `sample.world` and writes only
/// `sample.colour`, so disjoint samples can be evaluated concurrently.
#[inline]
pub fn evaluate_sample<Alg, CMap>(sample: &mut Sample, algorithm: &Alg, colour_map: &CMap)
where
    Alg: EscapeTimeAlgorithm + ?Sized,
    CMap: ColourMap + ?Sized,
{
    sample.colour = colour_map.map(algorithm.escape(sample.world));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_maps::greyscale::GreyscaleEscapeSpeed;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use std::num::NonZeroU32;

    fn sample_at(world: Complex) -> Sample {
        let mut sample = Sample::new(Point { x: 0, y: 0 }, NonZeroU32::new(1).unwrap());
        sample.world = world;
        sample
    }

    #[test]
    fn test_origin_gets_darkest_colour() {
        let algorithm = MandelbrotAlgorithm::default();
        let colour_map = GreyscaleEscapeSpeed::new(algorithm.max_iterations());
        let mut sample = sample_at(Complex::ZERO);

        evaluate_sample(&mut sample, &algorithm, &colour_map);

        assert_eq!(sample.colour, Colour::BLACK);
    }

    #[test]
    fn test_far_point_gets_near_white_grey() {
        let algorithm = MandelbrotAlgorithm::default();
        let colour_map = GreyscaleEscapeSpeed::new(algorithm.max_iterations());
        let mut sample = sample_at(Complex::new(1000.0, 1000.0));

        evaluate_sample(&mut sample, &algorithm, &colour_map);

        assert!(sample.colour.r > 0.99);
        assert_eq!(sample.colour.r, sample.colour.g);
        assert_eq!(sample.colour.g, sample.colour.b);
    }

    #[test]
    fn test_evaluation_leaves_geometry_untouched() {
        let algorithm = MandelbrotAlgorithm::default();
        let colour_map = GreyscaleEscapeSpeed::new(algorithm.max_iterations());
        let mut sample = sample_at(Complex::new(0.3, 0.5));
        let before = sample;

        evaluate_sample(&mut sample, &algorithm, &colour_map);

        assert_eq!(sample.origin, before.origin);
        assert_eq!(sample.size, before.size);
        assert_eq!(sample.world, before.world);
    }
}
