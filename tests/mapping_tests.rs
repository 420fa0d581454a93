use rustdronesynth::input::{ControlSource, Curve, Knob, PanelMapper, KNOB_MAP, NUM_KNOBS};
use rustdronesynth::synth::params::Params;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Stand-in for the analog driver: a fixed raw reading per channel.
struct StaticControls([f32; NUM_KNOBS]);

impl ControlSource for StaticControls {
    fn read(&mut self, knob: Knob) -> Option<f32> {
        Some(self.0[knob as usize])
    }
}

fn snapshot(params: &Params) -> [f32; NUM_KNOBS] {
    [
        params.noise_level.load(Ordering::Relaxed),
        params.osc_offset.load(Ordering::Relaxed),
        params.clock_rate.load(Ordering::Relaxed),
        params.delay_time.load(Ordering::Relaxed),
        params.delay_feedback.load(Ordering::Relaxed),
        params.env_attack.load(Ordering::Relaxed),
        params.env_decay.load(Ordering::Relaxed),
        params.filter_cutoff.load(Ordering::Relaxed),
        params.filter_resonance.load(Ordering::Relaxed),
        params.main_volume.load(Ordering::Relaxed),
    ]
}

#[test]
fn linear_knobs_hit_exact_endpoints() {
    for spec in KNOB_MAP.iter().filter(|s| s.curve == Curve::Linear) {
        assert_eq!(
            spec.apply(0.0),
            spec.hi,
            "{:?}: fully counter-clockwise must yield the maximum",
            spec.knob
        );
        assert!(
            (spec.apply(1.0) - spec.lo).abs() < 1e-6,
            "{:?}: fully clockwise must yield the minimum",
            spec.knob
        );
    }
}

#[test]
fn exponential_knobs_hit_endpoints_within_tolerance() {
    for spec in KNOB_MAP.iter().filter(|s| s.curve == Curve::Exponential) {
        // The inverted curve lands at hi - lo and 0; the configured lo
        // values are all near zero, so both ends are within lo of the ideal.
        assert!(
            (spec.apply(0.0) - spec.hi).abs() <= spec.lo + 1e-6,
            "{:?}: raw 0 should be within {} of hi, got {}",
            spec.knob,
            spec.lo,
            spec.apply(0.0)
        );
        assert!(
            (spec.apply(1.0) - spec.lo).abs() <= spec.lo + 1e-6,
            "{:?}: raw 1 should be within {} of lo, got {}",
            spec.knob,
            spec.lo,
            spec.apply(1.0)
        );
    }
}

#[test]
fn all_knobs_are_monotone_non_increasing() {
    for spec in &KNOB_MAP {
        let mut previous = spec.apply(0.0);
        for step in 1..=100 {
            let value = spec.apply(step as f32 / 100.0);
            assert!(
                value <= previous + 1e-6,
                "{:?}: map must not increase with raw (raw {} gave {} after {})",
                spec.knob,
                step as f32 / 100.0,
                value,
                previous
            );
            previous = value;
        }
    }
}

#[test]
fn mapping_is_idempotent() {
    let params = Arc::new(Params::default());
    let mut mapper = PanelMapper::new(params.clone());
    let mut controls = StaticControls([0.13, 0.25, 0.5, 0.75, 0.9, 0.01, 0.99, 0.33, 0.66, 0.42]);

    mapper.update(&mut controls);
    let first = snapshot(&params);
    mapper.update(&mut controls);
    let second = snapshot(&params);

    assert_eq!(first, second, "same raw inputs must map to the same values");
}

#[test]
fn full_counter_clockwise_panel_is_maximal() {
    let params = Arc::new(Params::default());
    let mut mapper = PanelMapper::new(params.clone());
    let mut controls = StaticControls([0.0; NUM_KNOBS]);

    mapper.update(&mut controls);

    assert_eq!(params.main_volume.load(Ordering::Relaxed), 1.0);
    assert_eq!(params.noise_level.load(Ordering::Relaxed), 1.0);
    assert_eq!(params.delay_feedback.load(Ordering::Relaxed), 1.0);
    assert_eq!(params.filter_cutoff.load(Ordering::Relaxed), 5000.0);
    assert_eq!(params.clock_rate.load(Ordering::Relaxed), 5.0 - 0.0001);
}

#[test]
fn unreported_channels_keep_their_defaults() {
    struct SilentControls;
    impl ControlSource for SilentControls {
        fn read(&mut self, _knob: Knob) -> Option<f32> {
            None
        }
    }

    let params = Arc::new(Params::default());
    let defaults = snapshot(&params);
    let mut mapper = PanelMapper::new(params.clone());

    mapper.update(&mut SilentControls);

    assert_eq!(snapshot(&params), defaults);
}
