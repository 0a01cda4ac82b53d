use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::{Escape, EscapeTimeAlgorithm};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Selects which fractal family a session renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
}

impl FractalKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
        }
    }

    pub fn build(
        self,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Fractal, MandelbrotError> {
        match self {
            Self::Mandelbrot => Ok(Fractal::Mandelbrot(MandelbrotAlgorithm::new(
                max_iterations,
                escape_radius,
            )?)),
        }
    }
}

/// A constructed escape-time evaluator. New families become new variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fractal {
    Mandelbrot(MandelbrotAlgorithm),
}

impl Fractal {
    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
        }
    }
}

impl EscapeTimeAlgorithm for Fractal {
    #[inline]
    fn escape(&self, c: Complex) -> Escape {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.escape(c),
        }
    }

    fn max_iterations(&self) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.max_iterations(),
        }
    }
}
