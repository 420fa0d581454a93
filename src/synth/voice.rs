use super::oscillator::{Oscillator, WhiteNoise};

pub const NUM_VOICES: usize = 4;

/// Fixed detune layout of the drone: root, a fifth-ish shimmer above and
/// below at +-110 Hz, and +220 Hz on top.
const VOICE_OFFSETS_HZ: [f32; NUM_VOICES] = [0.0, 110.0, -110.0, 220.0];

/// Four detuned sawtooth voices plus a noise source, mixed as an unweighted
/// sum. Headroom is the downstream stages' problem.
pub struct VoiceBank {
    oscillators: [Oscillator; NUM_VOICES],
    noise: WhiteNoise,
}

impl VoiceBank {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            oscillators: std::array::from_fn(|_| Oscillator::new(sample_rate)),
            noise: WhiteNoise::new(),
        }
    }

    /// Retune all four voices for a new note.
    pub fn set_note(&mut self, base_hz: f32, offset_hz: f32) {
        for (osc, detune) in self.oscillators.iter_mut().zip(VOICE_OFFSETS_HZ) {
            osc.set_freq(base_hz + detune + offset_hz);
        }
    }

    /// Per-sample amplitude update: `level` drives every oscillator, the
    /// noise source additionally scales by its own mix level.
    pub fn set_amplitude(&mut self, level: f32, noise_level: f32) {
        for osc in &mut self.oscillators {
            osc.set_amp(level);
        }
        self.noise.set_amp(level * noise_level);
    }

    /// Advance every source one sample and return the sum.
    pub fn process(&mut self) -> f32 {
        let mut sum = self.noise.process();
        for osc in &mut self.oscillators {
            sum += osc.process();
        }
        sum
    }

    /// Current voice frequencies, in bank order.
    pub fn frequencies(&self) -> [f32; NUM_VOICES] {
        std::array::from_fn(|i| self.oscillators[i].frequency())
    }
}
