use std::f32::consts::PI;

/// Resonant low-pass filter (state-variable topology, two integrators).
///
/// Cutoff and resonance may be changed between any two samples; the
/// coefficients are derived fresh in `process`. Resonance maps onto the
/// damping term `k = 2 - 2 * resonance`, so 0.0 is a flat response and
/// values approaching 1.0 ring at the cutoff.
#[derive(Clone, Debug)]
pub struct Filter {
    // Integrator memories
    ic1: f32,
    ic2: f32,

    cutoff: f32,
    resonance: f32,
    sample_rate: f32,
}

impl Filter {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            ic1: 0.0,
            ic2: 0.0,
            cutoff: 5000.0,
            resonance: 0.0,
            sample_rate,
        }
    }

    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        self.cutoff = cutoff_hz;
    }

    pub fn set_resonance(&mut self, resonance: f32) {
        self.resonance = resonance;
    }

    /// Process a single sample and return the low-pass output.
    pub fn process(&mut self, input: f32) -> f32 {
        // Keep the cutoff away from 0 and below Nyquist so tan() stays finite
        let cutoff = self.cutoff.max(1.0).min(self.sample_rate * 0.49);

        let g = (PI * cutoff / self.sample_rate).tan();
        let k = 2.0 - 2.0 * self.resonance;
        let h = 1.0 / (1.0 + g * (g + k));

        let v1 = h * (self.ic1 + g * (input - self.ic2));
        let v2 = self.ic2 + g * v1;

        self.ic1 = 2.0 * v1 - self.ic1;
        self.ic2 = 2.0 * v2 - self.ic2;

        v2
    }

    pub fn reset(&mut self) {
        self.ic1 = 0.0;
        self.ic2 = 0.0;
    }
}
