use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The fixed scale the sequencer draws from: C3, D3, E3, F3, G3.
pub const SCALE_HZ: [f32; 5] = [130.81, 146.83, 164.81, 174.61, 196.00];

/// Periodic trigger. Fires once per period of the configured rate; the rate
/// may be changed between any two samples and takes effect immediately.
#[derive(Clone, Debug)]
pub struct Clock {
    phase: f32,
    increment: f32,
    sample_rate: f32,
}

impl Clock {
    pub fn new(rate_hz: f32, sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            increment: rate_hz / sample_rate,
            sample_rate,
        }
    }

    pub fn set_rate(&mut self, rate_hz: f32) {
        self.increment = rate_hz / self.sample_rate;
    }

    /// Advance one sample; true when a period boundary was crossed.
    pub fn process(&mut self) -> bool {
        self.phase += self.increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

/// Clocked note source: on every clock tick, picks a base pitch uniformly at
/// random from the scale.
pub struct Sequencer {
    clock: Clock,
    rng: SmallRng,
}

impl Sequencer {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            clock: Clock::new(1.0, sample_rate),
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn with_seed(sample_rate: f32, seed: u64) -> Self {
        Self {
            clock: Clock::new(1.0, sample_rate),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn set_rate(&mut self, rate_hz: f32) {
        self.clock.set_rate(rate_hz);
    }

    /// Advance one sample. Returns the base pitch for a new note when the
    /// clock fires, None otherwise.
    pub fn process(&mut self) -> Option<f32> {
        if self.clock.process() {
            Some(self.pick_pitch())
        } else {
            None
        }
    }

    /// Uniform draw from the scale.
    pub fn pick_pitch(&mut self) -> f32 {
        SCALE_HZ[self.rng.random_range(0..SCALE_HZ.len())]
    }
}
