use crate::adapters::pixel_format::frame_to_rgb_bytes;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);
        write_ppm(frame, &mut writer)?;
        writer.flush()
    }
}

/// Encodes `frame` as binary PPM, top row first.
pub fn write_ppm<W: Write>(frame: &FrameBuffer, writer: &mut W) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", frame.width(), frame.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&frame_to_rgb_bytes(frame))?;

    Ok(())
}
