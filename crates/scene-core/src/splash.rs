//! Timing for the one-shot splash overlay: staggered entrance stages and a
//! single self-dismiss signal. No persistent animation loop.

use crate::constants::{SPLASH_DURATION_MS, SPLASH_REDUCED_MS};

/// Entrance stages of the overlay, in visual order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Ring,
    Title,
    Subtitle,
    Shimmer,
    Status,
}

impl Stage {
    /// Seconds after mount before the stage starts animating in.
    pub fn delay_sec(self, reduce_motion: bool) -> f32 {
        if reduce_motion {
            return 0.0;
        }
        match self {
            Stage::Ring => 0.0,
            Stage::Title => 0.05,
            Stage::Subtitle => 0.22,
            Stage::Shimmer => 0.42,
            Stage::Status => 0.55,
        }
    }

    /// Seconds the entrance transition runs.
    pub fn duration_sec(self, reduce_motion: bool) -> f32 {
        if reduce_motion {
            return match self {
                Stage::Shimmer => 0.25,
                _ => 0.2,
            };
        }
        match self {
            Stage::Ring => 0.8,
            Stage::Title => 0.7,
            Stage::Subtitle => 0.55,
            Stage::Shimmer => 0.8,
            Stage::Status => 0.5,
        }
    }
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Time-boxed splash state. `tick` reports completion exactly once; the
/// timeline never re-arms.
#[derive(Clone, Copy, Debug)]
pub struct SplashTimeline {
    duration_ms: f32,
    reduce_motion: bool,
    elapsed_ms: f32,
    done: bool,
}

impl SplashTimeline {
    pub fn new(duration_ms: Option<f32>, reduce_motion: bool) -> Self {
        let duration_ms = if reduce_motion {
            SPLASH_REDUCED_MS
        } else {
            duration_ms.unwrap_or(SPLASH_DURATION_MS)
        };
        Self {
            duration_ms,
            reduce_motion,
            elapsed_ms: 0.0,
            done: false,
        }
    }

    /// Milliseconds until self-dismissal.
    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance the timeline. Returns `true` on the tick where the duration
    /// elapses, and never again after that.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.done {
            return false;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.done = true;
            return true;
        }
        false
    }

    /// Eased progress of one entrance stage at the current time, in [0, 1].
    pub fn stage_progress(&self, stage: Stage) -> f32 {
        let delay = stage.delay_sec(self.reduce_motion);
        let duration = stage.duration_sec(self.reduce_motion);
        let t = (self.elapsed_ms / 1000.0 - delay) / duration;
        ease_out_cubic(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_default_duration() {
        let mut tl = SplashTimeline::new(None, false);
        let mut fired = 0;
        for _ in 0..300 {
            if tl.tick(16.0) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(tl.is_done());
    }

    #[test]
    fn reduced_motion_forces_short_duration() {
        let tl = SplashTimeline::new(Some(5000.0), true);
        assert_eq!(tl.duration_ms(), 350.0);
    }

    #[test]
    fn reduced_motion_completes_within_350ms() {
        let mut tl = SplashTimeline::new(None, true);
        let mut elapsed = 0.0;
        let mut fired_at = None;
        while fired_at.is_none() && elapsed < 1000.0 {
            elapsed += 16.0;
            if tl.tick(16.0) {
                fired_at = Some(elapsed);
            }
        }
        assert!(fired_at.expect("splash never completed") <= 350.0 + 16.0);
    }

    #[test]
    fn stage_progress_is_staggered() {
        let mut tl = SplashTimeline::new(None, false);
        tl.tick(100.0);
        assert!(tl.stage_progress(Stage::Ring) > 0.0);
        assert_eq!(tl.stage_progress(Stage::Shimmer), 0.0);
        assert_eq!(tl.stage_progress(Stage::Status), 0.0);
    }

    #[test]
    fn stages_start_immediately_under_reduced_motion() {
        let mut tl = SplashTimeline::new(None, true);
        tl.tick(50.0);
        for stage in [
            Stage::Ring,
            Stage::Title,
            Stage::Subtitle,
            Stage::Shimmer,
            Stage::Status,
        ] {
            assert!(tl.stage_progress(stage) > 0.0);
        }
    }

    #[test]
    fn ease_endpoints_are_stable() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
