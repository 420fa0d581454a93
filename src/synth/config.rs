/// Frames per audio callback. Small, to bound latency: at 48 kHz one block
/// is about 1.3 ms.
pub const BLOCK_SIZE: usize = 64;

/// Longest supported delay time in seconds; sizes the delay buffer.
pub const MAX_DELAY_SECS: f32 = 0.75;

#[derive(Debug, Clone, Copy)]
pub struct SynthConfig {
    pub sample_rate: f32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
        }
    }
}
