use std::sync::Arc;

use crate::controllers::interactive::{FrameData, FrameListener};
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort {
    /// Copies a published frame into the presenter's surface buffer.
    fn present(&mut self, frame: &FrameData) -> Result<(), GuiError>;
    fn render(&mut self) -> Result<(), GuiError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
    /// The listener the render session notifies after each publish.
    fn share_listener(&self) -> Arc<dyn FrameListener>;
}
