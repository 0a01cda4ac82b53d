use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::sample::Sample;

pub const CHANNELS: usize = 3;

/// Interleaved RGB float storage, row-major, `width * height * 3` values.
pub type FrameBufferData = Vec<f32>;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: FrameBufferData,
}

impl FrameBuffer {
    /// Allocates a zeroed (black) buffer. Allocation failure aborts the
    /// process; there is no degraded mode without a buffer.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;

        Self {
            width,
            height,
            data: vec![0.0; len],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        if point.x >= self.width || point.y >= self.height {
            return None;
        }

        let index = self.index_of(point.x, point.y);

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }

    /// Paints every pixel under the sample's footprint with its colour.
    /// The footprint is clipped to the buffer bounds.
    pub fn fill(&mut self, sample: &Sample) {
        let size = sample.size.get();
        let x_start = sample.origin.x.min(self.width);
        let y_start = sample.origin.y.min(self.height);
        let x_end = sample.origin.x.saturating_add(size).min(self.width);
        let y_end = sample.origin.y.saturating_add(size).min(self.height);
        let rgb = sample.colour.channels();

        for y in y_start..y_end {
            let row_start = self.index_of(x_start, y);
            let row_end = self.index_of(x_end, y);

            for pixel in self.data[row_start..row_end].chunks_exact_mut(CHANNELS) {
                pixel.copy_from_slice(&rgb);
            }
        }
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn sample(x: u32, y: u32, size: u32, colour: Colour) -> Sample {
        let mut sample = Sample::new(Point { x, y }, NonZeroU32::new(size).unwrap());
        sample.colour = colour;
        sample
    }

    fn red() -> Colour {
        Colour {
            r: 1.0,
            g: 0.0,
            b: 0.0,
        }
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = FrameBuffer::new(10, 10);

        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 10);
        assert_eq!(buffer.data().len(), 300);
        assert!(buffer.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_new_calculates_correct_size_for_non_square_buffer() {
        let buffer = FrameBuffer::new(100, 50);

        assert_eq!(buffer.data().len(), 15000);
    }

    #[test]
    fn test_zero_sized_buffer_is_empty() {
        let buffer = FrameBuffer::new(0, 40);

        assert!(buffer.data().is_empty());
    }

    #[test]
    fn test_fill_paints_exactly_the_block_footprint() {
        let mut buffer = FrameBuffer::new(6, 6);

        buffer.fill(&sample(2, 2, 2, red()));

        for y in 0..6 {
            for x in 0..6 {
                let inside = (2..4).contains(&x) && (2..4).contains(&y);
                let expected = if inside { red() } else { Colour::BLACK };

                assert_eq!(buffer.pixel(Point { x, y }), Some(expected), "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn test_fill_writes_rgb_layout() {
        let mut buffer = FrameBuffer::new(2, 2);
        let colour = Colour {
            r: 0.1,
            g: 0.2,
            b: 0.3,
        };

        buffer.fill(&sample(1, 1, 1, colour));

        assert_eq!(&buffer.data()[9..12], &[0.1, 0.2, 0.3]);
        assert!(buffer.data()[..9].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_fill_clips_block_at_buffer_edge() {
        let mut buffer = FrameBuffer::new(5, 5);

        buffer.fill(&sample(4, 4, 3, red()));

        assert_eq!(buffer.pixel(Point { x: 4, y: 4 }), Some(red()));
        assert_eq!(buffer.pixel(Point { x: 3, y: 4 }), Some(Colour::BLACK));
    }

    #[test]
    fn test_fill_outside_buffer_is_ignored() {
        let mut buffer = FrameBuffer::new(4, 4);

        buffer.fill(&sample(10, 10, 2, red()));

        assert!(buffer.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = FrameBuffer::new(3, 3);

        assert_eq!(buffer.pixel(Point { x: 3, y: 0 }), None);
        assert_eq!(buffer.pixel(Point { x: 0, y: 3 }), None);
    }
}
