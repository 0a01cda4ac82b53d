use crate::core::data::complex::Complex;

/// How an orbit behaved under the escape-time iteration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Escape {
    /// The orbit stayed within the escape radius: the iteration cap ran out
    /// or the orbit reached a fixed point.
    Inside { iterations: u32 },
    /// `|z|` exceeded the escape radius on the given iteration (1-based).
    Escaped { iterations: u32 },
}

/// A fractal family that classifies a world-space point by escape time.
///
/// Implementations are pure and hold no mutable state, so one instance can
/// be shared by every worker evaluating a pass.
pub trait EscapeTimeAlgorithm: Send + Sync {
    fn escape(&self, c: Complex) -> Escape;

    fn max_iterations(&self) -> u32;
}
