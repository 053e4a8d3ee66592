use crate::constants::MAX_FRAME_DT;

/// Converts caller-supplied timestamps into clamped delta-seconds.
///
/// The web driver feeds this with `instant::Instant`-derived milliseconds;
/// tests feed it synthetic times. Clamping keeps a backgrounded tab from
/// producing one giant integration step when frames resume.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Delta-seconds since the previous tick, clamped to [0, MAX_FRAME_DT].
    /// The first tick yields 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1000.0), 0.0);
    }

    #[test]
    fn steady_frames_pass_through() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        let dt = clock.tick(16.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn long_gaps_are_clamped() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        assert_eq!(clock.tick(5000.0), MAX_FRAME_DT);
    }

    #[test]
    fn backwards_time_is_floored() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(50.0), 0.0);
    }
}
