use std::sync::atomic::{AtomicU64, Ordering};

/// Marker returned by a pass that stopped because its work went stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "render pass cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Polled by a pass before each expensive step.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Cancelled as soon as the live view version moves past the version the
/// pass captured at its start.
#[derive(Debug, Clone, Copy)]
pub struct StaleVersion<'a> {
    live_version: &'a AtomicU64,
    captured_version: u64,
}

impl<'a> StaleVersion<'a> {
    #[must_use]
    pub fn new(live_version: &'a AtomicU64, captured_version: u64) -> Self {
        Self {
            live_version,
            captured_version,
        }
    }
}

impl CancelToken for StaleVersion<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.live_version.load(Ordering::Acquire) != self.captured_version
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn never_cancel_always_returns_false() {
        let token = NeverCancel;

        assert!(!token.is_cancelled());
    }

    #[test]
    fn stale_version_fires_once_the_live_version_moves() {
        let live = AtomicU64::new(7);
        let token = StaleVersion::new(&live, 7);

        assert!(!token.is_cancelled());

        live.store(8, Ordering::Release);
        assert!(token.is_cancelled());
    }

    #[test]
    fn closure_token_reflects_atomic_state() {
        let flag = AtomicBool::new(false);
        let token = || flag.load(Ordering::Relaxed);

        assert!(!token.is_cancelled());

        flag.store(true, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }
}
