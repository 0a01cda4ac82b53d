use crate::adapters::pixel_format::copy_frame_to_rgba;
use crate::controllers::interactive::{FrameData, FrameListener};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use pixels::Pixels;
use pixels::SurfaceTexture;
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    /// Size of the pixels buffer, which follows the presented frame.
    buffer_width: u32,
    buffer_height: u32,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        for pixel in pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            buffer_width: size.width,
            buffer_height: size.height,
            surface_width: size.width,
            surface_height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn present(&mut self, frame: &FrameData) -> Result<(), GuiError> {
        if frame.width() == 0 || frame.height() == 0 {
            return Ok(());
        }

        // A frame computed before a resize is stretched over the surface
        // until its successor arrives.
        if (frame.width(), frame.height()) != (self.buffer_width, self.buffer_height) {
            self.pixels.resize_buffer(frame.width(), frame.height())?;
            self.buffer_width = frame.width();
            self.buffer_height = frame.height();
        }

        copy_frame_to_rgba(&frame.frame_buffer, self.pixels.frame_mut());

        Ok(())
    }

    fn render(&mut self) -> Result<(), GuiError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        Ok(self.pixels.render()?)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;

        Ok(())
    }

    fn share_listener(&self) -> Arc<dyn FrameListener> {
        Arc::clone(&self.adapter) as Arc<dyn FrameListener>
    }
}
