use crate::core::data::complex::Complex;
use std::fmt;

pub const DEFAULT_MOVE_RATE: f64 = 0.2;
pub const DEFAULT_ZOOM_RATE: f64 = 1.2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// The window onto world space: a center point and the number of world
/// units spanned by the buffer width.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    scale: f64,
    /// Fraction of the viewport width travelled per second of movement.
    move_rate: f64,
    /// Fraction of the scale gained or lost per second of zoom.
    zoom_rate: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(center: Complex, scale: f64, move_rate: f64, zoom_rate: f64) -> Self {
        Self {
            center,
            scale,
            move_rate,
            zoom_rate,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Pans by `dt · move_rate · scale` world units, so the on-screen speed
    /// is the same at every zoom depth.
    pub fn pan(&mut self, direction: MoveDirection, dt: f64) {
        let step = dt * self.move_rate * self.scale;

        match direction {
            MoveDirection::Up => self.center.imag += step,
            MoveDirection::Down => self.center.imag -= step,
            MoveDirection::Left => self.center.real -= step,
            MoveDirection::Right => self.center.real += step,
        }
    }

    pub fn zoom(&mut self, direction: ZoomDirection, dt: f64) {
        let step = self.scale * self.zoom_rate * dt;

        match direction {
            ZoomDirection::In => self.scale -= step,
            ZoomDirection::Out => self.scale += step,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Complex::ZERO, 1.0, DEFAULT_MOVE_RATE, DEFAULT_ZOOM_RATE)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport({},{},{})",
            self.center.real, self.center.imag, self.scale
        )
    }
}
