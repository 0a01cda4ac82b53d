use crate::core::data::complex::Complex;
use crate::core::data::viewport::{DEFAULT_MOVE_RATE, DEFAULT_ZOOM_RATE, Viewport};
use crate::core::fractals::fractal_kinds::{Fractal, FractalKinds};
use crate::core::fractals::mandelbrot::algorithm::{DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

pub const DEFAULT_MIN_SAMPLE_SIZE: u32 = 1;
pub const DEFAULT_MAX_SAMPLE_SIZE: u32 = 20;
pub const DEFAULT_MAX_INPUT_DT: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    ZeroSampleSize,
    InvertedSampleSizes { min: u32, max: u32 },
    Fractal(MandelbrotError),
    InvalidRate { name: &'static str, value: f64 },
    InvalidScale { scale: f64 },
    ZoomStepCollapsesScale { zoom_rate: f64, max_input_dt: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSampleSize => write!(f, "sample sizes must be at least one pixel"),
            Self::InvertedSampleSizes { min, max } => {
                write!(
                    f,
                    "minimum sample size {} is larger than maximum sample size {}",
                    min, max
                )
            }
            Self::Fractal(err) => write!(f, "fractal parameters: {}", err),
            Self::InvalidRate { name, value } => {
                write!(f, "{} must be a positive finite number, got {}", name, value)
            }
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be a positive finite number, got {}", scale)
            }
            Self::ZoomStepCollapsesScale {
                zoom_rate,
                max_input_dt,
            } => {
                write!(
                    f,
                    "zoom rate {} over an input step of {}s would shrink the scale to zero \
                     or below",
                    zoom_rate, max_input_dt
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fractal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MandelbrotError> for ConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::Fractal(err)
    }
}

/// Block edge lengths a session alternates between: `max` while the view is
/// moving, `min` for the refinement pass once it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSizeBounds {
    min: NonZeroU32,
    max: NonZeroU32,
}

impl SampleSizeBounds {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        let (Some(min_size), Some(max_size)) = (NonZeroU32::new(min), NonZeroU32::new(max)) else {
            return Err(ConfigError::ZeroSampleSize);
        };

        if min_size > max_size {
            return Err(ConfigError::InvertedSampleSizes { min, max });
        }

        Ok(Self {
            min: min_size,
            max: max_size,
        })
    }

    #[must_use]
    pub fn min(&self) -> NonZeroU32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> NonZeroU32 {
        self.max
    }
}

/// The options a render session is parameterised by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub fractal: FractalKinds,
    pub min_sample_size: u32,
    pub max_sample_size: u32,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub move_rate: f64,
    pub zoom_rate: f64,
    /// Longest input step applied in one go; a stalled tick is clamped to this.
    pub max_input_dt: f64,
    pub initial_center: Complex,
    pub initial_scale: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fractal: FractalKinds::default(),
            min_sample_size: DEFAULT_MIN_SAMPLE_SIZE,
            max_sample_size: DEFAULT_MAX_SAMPLE_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            move_rate: DEFAULT_MOVE_RATE,
            zoom_rate: DEFAULT_ZOOM_RATE,
            max_input_dt: DEFAULT_MAX_INPUT_DT,
            initial_center: Complex::ZERO,
            initial_scale: 1.0,
        }
    }
}

fn positive_finite(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidRate { name, value })
    }
}

impl RenderConfig {
    /// Checks every option, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sample_size_bounds()?;
        self.build_fractal()?;

        positive_finite("move rate", self.move_rate)?;
        positive_finite("zoom rate", self.zoom_rate)?;
        positive_finite("max input dt", self.max_input_dt)?;

        if !self.initial_scale.is_finite() || self.initial_scale <= 0.0 {
            return Err(ConfigError::InvalidScale {
                scale: self.initial_scale,
            });
        }

        if self.zoom_rate * self.max_input_dt >= 1.0 {
            return Err(ConfigError::ZoomStepCollapsesScale {
                zoom_rate: self.zoom_rate,
                max_input_dt: self.max_input_dt,
            });
        }

        Ok(())
    }

    pub fn sample_size_bounds(&self) -> Result<SampleSizeBounds, ConfigError> {
        SampleSizeBounds::new(self.min_sample_size, self.max_sample_size)
    }

    pub fn build_fractal(&self) -> Result<Fractal, ConfigError> {
        Ok(self.fractal.build(self.max_iterations, self.escape_radius)?)
    }

    #[must_use]
    pub fn initial_viewport(&self) -> Viewport {
        Viewport::new(
            self.initial_center,
            self.initial_scale,
            self.move_rate,
            self.zoom_rate,
        )
    }
}
