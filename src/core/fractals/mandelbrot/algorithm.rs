use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::{Escape, EscapeTimeAlgorithm};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 400;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// The canonical Mandelbrot recurrence `z ← z² + c`, starting from `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(MandelbrotError::InvalidEscapeRadius { escape_radius });
        }

        Ok(Self {
            max_iterations,
            escape_radius_squared: escape_radius * escape_radius,
        })
    }
}

impl Default for MandelbrotAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS * DEFAULT_ESCAPE_RADIUS,
        }
    }
}

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    fn escape(&self, c: Complex) -> Escape {
        let mut z = Complex::ZERO;

        for iteration in 1..=self.max_iterations {
            let next = z.square() + c;

            // Exact comparison: an orbit that lands on itself never moves again.
            if next == z {
                return Escape::Inside { iterations: iteration };
            }

            z = next;

            if z.magnitude_squared() > self.escape_radius_squared {
                return Escape::Escaped { iterations: iteration };
            }
        }

        Escape::Inside {
            iterations: self.max_iterations,
        }
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_iterations() {
        assert_eq!(
            MandelbrotAlgorithm::new(0, 2.0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_new_rejects_invalid_escape_radius() {
        assert_eq!(
            MandelbrotAlgorithm::new(10, 0.0),
            Err(MandelbrotError::InvalidEscapeRadius { escape_radius: 0.0 })
        );
        assert!(MandelbrotAlgorithm::new(10, -1.0).is_err());
        assert!(MandelbrotAlgorithm::new(10, f64::INFINITY).is_err());
        assert!(MandelbrotAlgorithm::new(10, f64::NAN).is_err());
    }

    #[test]
    fn test_default_uses_reference_constants() {
        let algorithm = MandelbrotAlgorithm::default();

        assert_eq!(algorithm.max_iterations(), 400);
        assert_eq!(algorithm, MandelbrotAlgorithm::new(400, 2.0).unwrap());
    }

    #[test]
    fn test_origin_is_inside_the_set() {
        let algorithm = MandelbrotAlgorithm::default();

        assert!(matches!(
            algorithm.escape(Complex::ZERO),
            Escape::Inside { .. }
        ));
    }

    #[test]
    fn test_origin_is_detected_as_fixed_point_on_first_iteration() {
        let algorithm = MandelbrotAlgorithm::default();

        assert_eq!(
            algorithm.escape(Complex::ZERO),
            Escape::Inside { iterations: 1 }
        );
    }

    #[test]
    fn test_far_point_escapes_on_first_iteration() {
        let algorithm = MandelbrotAlgorithm::default();

        assert_eq!(
            algorithm.escape(Complex::new(1000.0, 1000.0)),
            Escape::Escaped { iterations: 1 }
        );
    }

    #[test]
    fn test_period_two_cycle_runs_to_the_cap() {
        // c = -1 cycles 0 → -1 → 0 → -1 ... and never repeats consecutively.
        let algorithm = MandelbrotAlgorithm::new(50, 2.0).unwrap();

        assert_eq!(
            algorithm.escape(Complex::new(-1.0, 0.0)),
            Escape::Inside { iterations: 50 }
        );
    }

    #[test]
    fn test_point_exactly_on_escape_radius_is_inside() {
        // c = -2: 0 → -2 → 2 → 2, |z| == 2 never exceeds the radius and
        // 2 is a fixed point of z² - 2.
        let algorithm = MandelbrotAlgorithm::default();

        assert!(matches!(
            algorithm.escape(Complex::new(-2.0, 0.0)),
            Escape::Inside { .. }
        ));
    }

    #[test]
    fn test_point_just_outside_escapes_after_a_few_iterations() {
        // c = 1: 0 → 1 → 2 → 5
        let algorithm = MandelbrotAlgorithm::default();

        assert_eq!(
            algorithm.escape(Complex::new(1.0, 0.0)),
            Escape::Escaped { iterations: 3 }
        );
    }

    #[test]
    fn test_smaller_radius_escapes_sooner() {
        let algorithm = MandelbrotAlgorithm::new(400, 0.5).unwrap();

        assert_eq!(
            algorithm.escape(Complex::new(1.0, 0.0)),
            Escape::Escaped { iterations: 1 }
        );
    }
}
