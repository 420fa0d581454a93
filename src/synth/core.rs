use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::config::{SynthConfig, MAX_DELAY_SECS};
use super::delayline::DelayLine;
use super::envelope::EnvelopeGenerator;
use super::filter::Filter;
use super::params::Params;
use super::sequencer::Sequencer;
use super::voice::VoiceBank;

/// The synthesizer engine: a clocked note sequencer feeding four detuned
/// voices plus noise, shaped by an envelope, recirculated through a feedback
/// delay and low-passed.
///
/// Owned entirely by the audio callback; the only state shared with the
/// control loop is the `Params` store, read field-by-field once per sample
/// with relaxed ordering. `process` never locks, blocks, or allocates.
pub struct Synth {
    params: Arc<Params>,
    sequencer: Sequencer,
    envelope: EnvelopeGenerator,
    voices: VoiceBank,
    delay: DelayLine,
    filter: Filter,
    sample_rate: f32,
}

impl Synth {
    pub fn new(config: SynthConfig, params: Arc<Params>) -> Self {
        let sample_rate = config.sample_rate;
        let max_delay_samples = (sample_rate * MAX_DELAY_SECS) as usize;

        Self {
            params,
            sequencer: Sequencer::new(sample_rate),
            envelope: EnvelopeGenerator::new(sample_rate),
            voices: VoiceBank::new(sample_rate),
            delay: DelayLine::new(max_delay_samples),
            filter: Filter::new(sample_rate),
            sample_rate,
        }
    }

    /// Fill an interleaved stereo buffer. Both channels carry the same
    /// signal.
    pub fn process(&mut self, output: &mut [f32]) {
        for frame in output.chunks_exact_mut(2) {
            let sample = self.next_sample();
            frame[0] = sample;
            frame[1] = sample;
        }
    }

    /// One sample of the full chain. The stage order is the signal-flow
    /// contract: sequencer, envelope, voices, delay read/mix/write, filter,
    /// master volume. Do not reorder.
    fn next_sample(&mut self) -> f32 {
        let params = &self.params;

        // Clock: the rate knob is live, so a rate change moves the very
        // next tick.
        self.sequencer
            .set_rate(params.clock_rate.load(Ordering::Relaxed));
        if let Some(base_hz) = self.sequencer.process() {
            self.voices
                .set_note(base_hz, params.osc_offset.load(Ordering::Relaxed));
            self.envelope.trigger();
        }

        // Envelope, with the current segment times
        self.envelope.set_times(
            params.env_attack.load(Ordering::Relaxed),
            params.env_decay.load(Ordering::Relaxed),
        );
        let env_out = self.envelope.process();

        // Voices
        let volume = params.main_volume.load(Ordering::Relaxed);
        self.voices
            .set_amplitude(env_out * volume, params.noise_level.load(Ordering::Relaxed));
        let voice_sum = self.voices.process();

        // Delay: read first, then mix and feedback, then write
        let delayed = self.delay.read();
        let mix = delayed + voice_sum;
        let feedback = delayed * params.delay_feedback.load(Ordering::Relaxed) + voice_sum;
        self.delay
            .set_delay((params.delay_time.load(Ordering::Relaxed) * self.sample_rate) as usize);
        self.delay.write(feedback);

        // Filter
        self.filter
            .set_cutoff(params.filter_cutoff.load(Ordering::Relaxed));
        self.filter
            .set_resonance(params.filter_resonance.load(Ordering::Relaxed));
        let filtered = self.filter.process(mix);

        filtered * volume
    }
}
