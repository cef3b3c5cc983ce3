//! Time management utilities

/// Reference step length all per-step tuning constants are expressed in.
pub const REFERENCE_STEP: f32 = 1.0 / 60.0;

/// Fixed-timestep clock
///
/// Simulation time advances by exactly `step` every frame, independent of
/// wall-clock time, so a run is reproducible frame for frame.
#[derive(Debug, Clone)]
pub struct FixedClock {
    step: f32,
    elapsed: f64,
    frame_count: u64,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(REFERENCE_STEP)
    }
}

impl FixedClock {
    /// Create a clock advancing by `step` seconds per frame
    pub fn new(step: f32) -> Self {
        Self {
            step,
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        self.elapsed += f64::from(self.step);
        self.frame_count += 1;
    }

    /// Seconds per frame
    pub fn delta_time(&self) -> f32 {
        self.step
    }

    /// Total simulated time in seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of frames simulated so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clock_advances_by_step() {
        let mut clock = FixedClock::new(0.5);
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame_count(), 2);
        assert_relative_eq!(clock.elapsed(), 1.0);
    }

    #[test]
    fn test_default_is_sixty_hz() {
        let clock = FixedClock::default();
        assert_relative_eq!(clock.delta_time(), 1.0 / 60.0);
    }
}
