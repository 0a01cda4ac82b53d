/// Linear RGB colour with each channel in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// A grey with the same intensity on all three channels.
    #[must_use]
    pub fn grey(intensity: f32) -> Self {
        let v = intensity.clamp(0.0, 1.0);
        Self { r: v, g: v, b: v }
    }

    #[must_use]
    pub fn channels(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Quantises a `[0, 1]` channel to a byte. NaN maps to 0.
#[must_use]
pub fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
