/// Turns `requestAnimationFrame` timestamps into frame deltas.
///
/// The first frame has no predecessor and reports a zero delta. Timestamps
/// that go backwards (tab restore, clock adjustments) also report zero.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timestamp in milliseconds. Returns seconds since the previous one.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => ((now_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1234.0), 0.0);
    }

    #[test]
    fn reports_seconds_between_frames() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(1500.0), 0.5);
        assert_eq!(clock.advance(1750.0), 0.25);
    }

    #[test]
    fn backwards_time_is_zero() {
        let mut clock = FrameClock::new();
        clock.advance(2000.0);
        assert_eq!(clock.advance(1000.0), 0.0);
        assert_eq!(clock.advance(1100.0), 0.1_f64 as f32);
    }

    #[test]
    fn long_pause_is_reported_in_full() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        assert_eq!(clock.advance(7000.0), 7.0);
    }
}
