/// Shortest usable segment duration; keeps the per-sample increments finite
/// when a knob is turned all the way down.
const MIN_TIME: f32 = 1.0 / 48_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Idle,
    Attack,
    Decay,
}

/// Two-segment linear amplitude envelope.
///
/// The attack and decay durations are re-applied every sample, so changing
/// them mid-segment rescales the rate of the remaining ramp rather than
/// restarting the segment.
#[derive(Debug, Clone)]
pub struct EnvelopeGenerator {
    stage: EnvelopeStage,
    level: f32,
    attack: f32,
    decay: f32,
    sample_rate: f32,
}

impl EnvelopeGenerator {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            stage: EnvelopeStage::Idle,
            level: 0.0,
            attack: 0.1,
            decay: 0.4,
            sample_rate,
        }
    }

    pub fn set_times(&mut self, attack: f32, decay: f32) {
        self.attack = attack;
        self.decay = decay;
    }

    /// Restart the attack segment from zero, from any stage. A trigger that
    /// lands mid-note retriggers; it never layers.
    pub fn trigger(&mut self) {
        self.level = 0.0;
        self.stage = EnvelopeStage::Attack;
    }

    /// Advance one sample and return the current output level in [0, 1].
    pub fn process(&mut self) -> f32 {
        match self.stage {
            EnvelopeStage::Idle => {
                self.level = 0.0;
            }

            EnvelopeStage::Attack => {
                let increment = 1.0 / (self.attack.max(MIN_TIME) * self.sample_rate);
                self.level += increment;

                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.stage = EnvelopeStage::Decay;
                }
            }

            EnvelopeStage::Decay => {
                let decrement = 1.0 / (self.decay.max(MIN_TIME) * self.sample_rate);
                self.level -= decrement;

                if self.level <= 0.0 {
                    self.level = 0.0;
                    self.stage = EnvelopeStage::Idle;
                }
            }
        }

        self.level
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    pub fn is_active(&self) -> bool {
        self.stage != EnvelopeStage::Idle
    }
}
