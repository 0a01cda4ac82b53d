/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Sent from the render thread after a frame is published. The handler
    /// requests a redraw, which picks up the newest published frame.
    Wake,
}
