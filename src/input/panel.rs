use crate::input::ControlSource;
use crate::synth::params::Params;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub const NUM_KNOBS: usize = 10;

/// The ten panel controls, one per parameter store field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Knob {
    NoiseLevel = 0,
    OscOffset,
    ClockRate,
    DelayTime,
    DelayFeedback,
    EnvAttack,
    EnvDecay,
    FilterCutoff,
    FilterResonance,
    MainVolume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    Exponential,
}

/// Response of one knob: the engineering range and the curve through it.
#[derive(Debug, Clone, Copy)]
pub struct KnobSpec {
    pub knob: Knob,
    pub lo: f32,
    pub hi: f32,
    pub curve: Curve,
}

/// The panel wiring. Both curves are inverted so that a fully
/// counter-clockwise pot (raw 0) lands on the maximum: brightest filter,
/// fastest clock, loudest output. The physical panels are labeled that way
/// around, so the inversion is part of the panel interface.
pub const KNOB_MAP: [KnobSpec; NUM_KNOBS] = [
    KnobSpec { knob: Knob::NoiseLevel, lo: 0.0, hi: 1.0, curve: Curve::Linear },
    KnobSpec { knob: Knob::OscOffset, lo: 0.0, hi: 493.88, curve: Curve::Exponential },
    KnobSpec { knob: Knob::ClockRate, lo: 0.0001, hi: 5.0, curve: Curve::Exponential },
    KnobSpec { knob: Knob::DelayTime, lo: 0.0, hi: 1.0, curve: Curve::Linear },
    KnobSpec { knob: Knob::DelayFeedback, lo: 0.0, hi: 1.0, curve: Curve::Linear },
    KnobSpec { knob: Knob::EnvAttack, lo: 0.01, hi: 2.0, curve: Curve::Exponential },
    KnobSpec { knob: Knob::EnvDecay, lo: 0.01, hi: 2.0, curve: Curve::Exponential },
    KnobSpec { knob: Knob::FilterCutoff, lo: 0.0, hi: 5000.0, curve: Curve::Exponential },
    KnobSpec { knob: Knob::FilterResonance, lo: 0.0, hi: 1.0, curve: Curve::Linear },
    KnobSpec { knob: Knob::MainVolume, lo: 0.0, hi: 1.0, curve: Curve::Linear },
];

/// Square-law sweep from `lo` to `hi` as `raw` goes 0 to 1.
fn exp_map(raw: f32, lo: f32, hi: f32) -> f32 {
    (lo + raw * raw * (hi - lo)).clamp(lo.min(hi), lo.max(hi))
}

impl KnobSpec {
    /// Map a normalized raw reading to the engineering value. Pure; raw is
    /// trusted to be in [0, 1] per the driver contract.
    pub fn apply(&self, raw: f32) -> f32 {
        match self.curve {
            Curve::Linear => self.hi - raw * (self.hi - self.lo),
            Curve::Exponential => self.hi - exp_map(raw, self.lo, self.hi),
        }
    }
}

/// The control-mapping layer: polls every channel once per iteration and
/// writes the mapped values into the parameter store.
pub struct PanelMapper {
    params: Arc<Params>,
}

impl PanelMapper {
    pub fn new(params: Arc<Params>) -> Self {
        Self { params }
    }

    pub fn update(&mut self, source: &mut dyn ControlSource) {
        for spec in &KNOB_MAP {
            if let Some(raw) = source.read(spec.knob) {
                self.write_param(spec.knob, spec.apply(raw));
            }
        }
    }

    fn write_param(&self, knob: Knob, value: f32) {
        let params = &self.params;
        let field = match knob {
            Knob::NoiseLevel => &params.noise_level,
            Knob::OscOffset => &params.osc_offset,
            Knob::ClockRate => &params.clock_rate,
            Knob::DelayTime => &params.delay_time,
            Knob::DelayFeedback => &params.delay_feedback,
            Knob::EnvAttack => &params.env_attack,
            Knob::EnvDecay => &params.env_decay,
            Knob::FilterCutoff => &params.filter_cutoff,
            Knob::FilterResonance => &params.filter_resonance,
            Knob::MainVolume => &params.main_volume,
        };
        field.store(value, Ordering::Relaxed);
    }
}
