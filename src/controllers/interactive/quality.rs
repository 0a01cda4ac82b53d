use std::num::NonZeroU32;

use crate::core::config::render_config::SampleSizeBounds;

/// What the session does after a pass has been published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityDecision {
    /// Start one more pass at the given (finest) sample size.
    Refine { sample_size: NonZeroU32 },
    /// Wait for the next view change.
    Settle,
}

/// A coarse pass that survived to publish means the view has stopped
/// moving, so one fine pass follows. Anything else settles. With equal
/// bounds the fine pass would repeat the coarse one, so it is skipped.
#[must_use]
pub fn after_publish(
    bounds: SampleSizeBounds,
    published_sample_size: NonZeroU32,
) -> QualityDecision {
    if published_sample_size == bounds.max() && bounds.min() < bounds.max() {
        QualityDecision::Refine {
            sample_size: bounds.min(),
        }
    } else {
        QualityDecision::Settle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn coarse_publish_schedules_fine_pass() {
        let bounds = SampleSizeBounds::new(1, 20).unwrap();

        assert_eq!(
            after_publish(bounds, size(20)),
            QualityDecision::Refine {
                sample_size: size(1)
            }
        );
    }

    #[test]
    fn fine_publish_settles() {
        let bounds = SampleSizeBounds::new(1, 20).unwrap();

        assert_eq!(after_publish(bounds, size(1)), QualityDecision::Settle);
    }

    #[test]
    fn equal_bounds_never_refine() {
        let bounds = SampleSizeBounds::new(4, 4).unwrap();

        assert_eq!(after_publish(bounds, size(4)), QualityDecision::Settle);
    }
}
