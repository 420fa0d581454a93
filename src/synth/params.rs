use std::sync::atomic::{AtomicU32, Ordering};

/// Atomic f32 wrapper for lock-free parameter hand-off.
pub struct AtomicF32 {
    storage: AtomicU32,
}

impl AtomicF32 {
    pub fn new(value: f32) -> Self {
        Self {
            storage: AtomicU32::new(value.to_bits()),
        }
    }

    pub fn load(&self, ordering: Ordering) -> f32 {
        f32::from_bits(self.storage.load(ordering))
    }

    pub fn store(&self, value: f32, ordering: Ordering) {
        self.storage.store(value.to_bits(), ordering);
    }
}

/// Current mapped value of every panel control.
///
/// Single writer (the control loop), single reader (the audio callback).
/// All fields hold engineering values, never raw knob readings. Reads and
/// writes are relaxed: a value observed one block late, or torn across a
/// block boundary, is indistinguishable from a slightly different knob
/// position and is accepted by contract.
pub struct Params {
    /// Noise level relative to the oscillators (0.0 to 1.0)
    pub noise_level: AtomicF32,
    /// Offset added to every voice frequency, in Hz
    pub osc_offset: AtomicF32,
    /// Sequencer clock rate in Hz
    pub clock_rate: AtomicF32,
    /// Delay time in seconds
    pub delay_time: AtomicF32,
    /// Delay feedback gain (0.0 to 1.0)
    pub delay_feedback: AtomicF32,
    /// Envelope attack time in seconds
    pub env_attack: AtomicF32,
    /// Envelope decay time in seconds
    pub env_decay: AtomicF32,
    /// Filter cutoff in Hz
    pub filter_cutoff: AtomicF32,
    /// Filter resonance (0.0 to 1.0)
    pub filter_resonance: AtomicF32,
    /// Master output level (0.0 to 1.0)
    pub main_volume: AtomicF32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            noise_level: AtomicF32::new(0.5),
            osc_offset: AtomicF32::new(440.0),
            clock_rate: AtomicF32::new(1.0),
            delay_time: AtomicF32::new(0.0),
            delay_feedback: AtomicF32::new(0.0),
            env_attack: AtomicF32::new(0.1),
            env_decay: AtomicF32::new(0.4),
            filter_cutoff: AtomicF32::new(5000.0),
            filter_resonance: AtomicF32::new(0.0),
            main_volume: AtomicF32::new(0.5),
        }
    }
}
