//! The cosmetic progress estimator.

/// Ceiling the estimator approaches while a request is pending.
pub const PROGRESS_CEILING: f64 = 90.0;
/// Value snapped to when the request settles.
pub const PROGRESS_DONE: f64 = 100.0;
/// Smallest per-tick increment, so the bar keeps moving near the ceiling.
const MIN_STEP: f64 = 0.2;

/// One estimator tick: approach the ceiling asymptotically, at least
/// [`MIN_STEP`] per tick, and hold once there. This animates a pending
/// request; it measures nothing.
pub fn advance(progress: f64) -> f64 {
    if progress >= PROGRESS_CEILING {
        return progress;
    }
    let step = ((PROGRESS_CEILING - progress) * 0.05).max(MIN_STEP);
    (progress + step).min(PROGRESS_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_from_zero() {
        assert!((advance(0.0) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_and_capped() {
        let mut progress = 0.0;
        for _ in 0..10_000 {
            let next = advance(progress);
            assert!(next >= progress);
            assert!(next <= PROGRESS_CEILING);
            progress = next;
        }
        assert!((progress - PROGRESS_CEILING).abs() < 1e-9);
    }

    #[test]
    fn test_minimum_step_near_ceiling() {
        // At 89.0 the proportional step would be 0.05; the floor kicks in.
        let next = advance(89.0);
        assert!((next - 89.2).abs() < 1e-9);
    }

    #[test]
    fn test_holds_at_ceiling() {
        assert_eq!(advance(PROGRESS_CEILING), PROGRESS_CEILING);
        assert_eq!(advance(95.0), 95.0);
    }
}
