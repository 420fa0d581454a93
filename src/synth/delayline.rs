/// Minimum allowed delay in samples. Also keeps a zero-length setting from
/// aliasing to a full-buffer delay under the wrapping arithmetic.
const MIN_DELAY_SAMPLES: usize = 1;

/// Single-tap delay line with the read and write halves split, so the caller
/// can form both the direct mix and the re-injected feedback in between.
///
/// Call order per sample: `read`, then `set_delay` if the time changed, then
/// `write` (which advances the cursor).
pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
    delay_samples: usize,
}

impl DelayLine {
    /// `max_samples` sizes the buffer; the largest usable delay is one
    /// sample less.
    pub fn new(max_samples: usize) -> Self {
        let capacity = max_samples.max(MIN_DELAY_SAMPLES + 1);
        Self {
            buffer: vec![0.0; capacity],
            write_pos: 0,
            delay_samples: MIN_DELAY_SAMPLES,
        }
    }

    /// Set the current delay length, clamped to what the buffer supports.
    pub fn set_delay(&mut self, samples: usize) {
        self.delay_samples = samples.clamp(MIN_DELAY_SAMPLES, self.buffer.len() - 1);
    }

    pub fn delay_samples(&self) -> usize {
        self.delay_samples
    }

    /// Read the sample written `delay_samples` writes ago.
    pub fn read(&self) -> f32 {
        let len = self.buffer.len();
        self.buffer[(self.write_pos + len - self.delay_samples) % len]
    }

    /// Write one sample at the cursor and advance it.
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}
