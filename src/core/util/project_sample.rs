use crate::core::data::complex::Complex;
use crate::core::data::sample::Sample;
use crate::core::data::viewport::Viewport;

/// Maps the center of a sample's block to world space.
///
/// One pixel spans `scale / buffer_width` world units on both axes, so a
/// non-square buffer shows more (or less) world vertically than
/// horizontally; the aspect ratio is never corrected.
#[must_use]
pub fn pixel_to_world(
    pixel_x: f64,
    pixel_y: f64,
    buffer_width: u32,
    buffer_height: u32,
    viewport: &Viewport,
) -> Complex {
    let units_per_pixel = viewport.scale() / f64::from(buffer_width);
    let half_width = f64::from(buffer_width) / 2.0;
    let half_height = f64::from(buffer_height) / 2.0;
    let center = viewport.center();

    Complex {
        real: center.real + (pixel_x - half_width) * units_per_pixel,
        imag: center.imag + (pixel_y - half_height) * units_per_pixel,
    }
}

/// Writes the world-space position of the sample's center into `sample.world`.
pub fn project_sample(
    sample: &mut Sample,
    buffer_width: u32,
    buffer_height: u32,
    viewport: &Viewport,
) {
    let (x, y) = sample.center();
    sample.world = pixel_to_world(x, y, buffer_width, buffer_height, viewport);
}
