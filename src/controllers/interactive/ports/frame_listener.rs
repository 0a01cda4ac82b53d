/// Notified from the compute thread right after a frame is published.
/// Implementations must be quick; the next pass waits for them.
pub trait FrameListener: Send + Sync {
    fn frame_published(&self, version: u64);
}
