//! Pixel format conversion helpers for presentation adapters.
//!
//! Frame buffers store float RGB with row 0 at the bottom of the picture
//! (world imaginary axis pointing up). Image files and window surfaces
//! expect byte channels with row 0 at the top, so every conversion here
//! flips rows.

use crate::core::data::colour::channel_to_u8;
use crate::core::data::frame_buffer::{CHANNELS, FrameBuffer};

/// Copies a frame into 8-bit RGB, top row first.
///
/// # Panics
/// Panics if `dst.len()` is not `width * height * 3`.
pub fn copy_frame_to_rgb(frame: &FrameBuffer, dst: &mut [u8]) {
    copy_frame_flipped(frame, dst, 3, |src_pixel, dst_pixel| {
        for (dst_channel, src_channel) in dst_pixel.iter_mut().zip(src_pixel) {
            *dst_channel = channel_to_u8(*src_channel);
        }
    });
}

/// Copies a frame into 8-bit RGBA with opaque alpha, top row first.
///
/// # Panics
/// Panics if `dst.len()` is not `width * height * 4`.
pub fn copy_frame_to_rgba(frame: &FrameBuffer, dst: &mut [u8]) {
    copy_frame_flipped(frame, dst, 4, |src_pixel, dst_pixel| {
        dst_pixel[0] = channel_to_u8(src_pixel[0]);
        dst_pixel[1] = channel_to_u8(src_pixel[1]);
        dst_pixel[2] = channel_to_u8(src_pixel[2]);
        dst_pixel[3] = 255;
    });
}

#[must_use]
pub fn frame_to_rgb_bytes(frame: &FrameBuffer) -> Vec<u8> {
    let mut bytes = vec![0; frame.width() as usize * frame.height() as usize * 3];
    copy_frame_to_rgb(frame, &mut bytes);
    bytes
}

fn copy_frame_flipped(
    frame: &FrameBuffer,
    dst: &mut [u8],
    dst_channels: usize,
    convert: impl Fn(&[f32], &mut [u8]),
) {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let expected_dst_len = width * height * dst_channels;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {} for {}x{}",
        dst.len(),
        expected_dst_len,
        width,
        height
    );

    if width == 0 || height == 0 {
        return;
    }

    let src_rows = frame.data().chunks_exact(width * CHANNELS);
    let dst_rows = dst.chunks_exact_mut(width * dst_channels).rev();

    for (src_row, dst_row) in src_rows.zip(dst_rows) {
        for (src_pixel, dst_pixel) in src_row
            .chunks_exact(CHANNELS)
            .zip(dst_row.chunks_exact_mut(dst_channels))
        {
            convert(src_pixel, dst_pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::sample::Sample;
    use std::num::NonZeroU32;

    fn paint(frame: &mut FrameBuffer, x: u32, y: u32, colour: Colour) {
        let mut sample = Sample::new(Point { x, y }, NonZeroU32::new(1).unwrap());
        sample.colour = colour;
        frame.fill(&sample);
    }

    #[test]
    fn test_rgba_conversion_flips_rows_and_sets_alpha() {
        let mut frame = FrameBuffer::new(2, 2);
        paint(&mut frame, 0, 0, Colour::grey(1.0));
        paint(&mut frame, 1, 1, Colour { r: 1.0, g: 0.0, b: 0.0 });

        let mut dst = vec![0; 2 * 2 * 4];
        copy_frame_to_rgba(&frame, &mut dst);

        assert_eq!(
            dst,
            vec![
                0, 0, 0, 255, 255, 0, 0, 255, // top row is buffer row 1
                255, 255, 255, 255, 0, 0, 0, 255, // bottom row is buffer row 0
            ]
        );
    }

    #[test]
    fn test_rgb_conversion_scales_channels() {
        let mut frame = FrameBuffer::new(1, 1);
        paint(&mut frame, 0, 0, Colour { r: 0.5, g: 0.0, b: 1.0 });

        assert_eq!(frame_to_rgb_bytes(&frame), vec![128, 0, 255]);
    }

    #[test]
    fn test_empty_frame_converts_to_nothing() {
        let frame = FrameBuffer::new(0, 5);
        let mut dst: Vec<u8> = vec![];

        copy_frame_to_rgba(&frame, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_mismatched_destination_panics() {
        let frame = FrameBuffer::new(2, 2);
        let mut dst = vec![0; 3];

        copy_frame_to_rgba(&frame, &mut dst);
    }
}
