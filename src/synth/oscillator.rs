use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Naive sawtooth oscillator driven by a phase accumulator in [0, 1).
// TODO: the naive saw aliases audibly in the top octaves; PolyBLEP would
// clean it up without touching the callers.
#[derive(Clone, Debug)]
pub struct Oscillator {
    phase: f32,
    frequency: f32,
    amplitude: f32,
    sample_rate: f32,
}

impl Oscillator {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            frequency: 440.0,
            amplitude: 0.0,
            sample_rate,
        }
    }

    pub fn set_freq(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn set_amp(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    /// Advance one sample and return the scaled output.
    pub fn process(&mut self) -> f32 {
        // Saw in [-1, 1) from the current cycle position
        let sample = 2.0 * (self.phase - (self.phase + 0.5).floor());

        self.phase += self.frequency / self.sample_rate;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample * self.amplitude
    }
}

/// White noise generator with its own RNG, so the audio callback never
/// reaches for a shared or thread-local source.
#[derive(Clone, Debug)]
pub struct WhiteNoise {
    amplitude: f32,
    rng: SmallRng,
}

impl WhiteNoise {
    pub fn new() -> Self {
        Self {
            amplitude: 0.0,
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn set_amp(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    pub fn process(&mut self) -> f32 {
        self.rng.random_range(-1.0..1.0) * self.amplitude
    }
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self::new()
    }
}
