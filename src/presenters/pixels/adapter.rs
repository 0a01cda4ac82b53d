use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::FrameListener;
use crate::input::gui::events::GuiEvent;

/// Forwards publish notifications from the render thread to the event loop.
pub struct PixelsAdapter {
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self { event_loop_proxy }
    }
}

impl FrameListener for PixelsAdapter {
    fn frame_published(&self, _version: u64) {
        // Fails only once the event loop has exited.
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}
