use rustdronesynth::synth::sequencer::{Clock, Sequencer, SCALE_HZ};

#[test]
fn clock_fires_at_the_configured_rate() {
    let sample_rate = 48_000.0;
    let mut clock = Clock::new(100.0, sample_rate);

    let mut ticks = Vec::new();
    for n in 0..48_000 {
        if clock.process() {
            ticks.push(n);
        }
    }

    // 100 Hz for one second, with a sample of float slack either way
    assert!(
        (99..=101).contains(&ticks.len()),
        "expected ~100 ticks, got {}",
        ticks.len()
    );
    for pair in ticks.windows(2) {
        let spacing = pair[1] - pair[0];
        assert!(
            (479..=481).contains(&spacing),
            "tick spacing drifted: {spacing}"
        );
    }
}

#[test]
fn rate_changes_take_effect_immediately() {
    let sample_rate = 1_000.0;
    let mut clock = Clock::new(10.0, sample_rate); // period 100 samples

    // Sit just short of a tick, then crank the rate: the boundary should
    // arrive on the next sample, not after the old period runs out.
    for _ in 0..99 {
        assert!(!clock.process());
    }
    clock.set_rate(500.0);
    assert!(clock.process());
}

#[test]
fn pitch_choice_is_roughly_uniform() {
    let mut sequencer = Sequencer::with_seed(48_000.0, 42);

    const DRAWS: usize = 5_000;
    let mut counts = [0usize; SCALE_HZ.len()];
    for _ in 0..DRAWS {
        let pitch = sequencer.pick_pitch();
        let index = SCALE_HZ
            .iter()
            .position(|&p| p == pitch)
            .expect("pitch must come from the scale");
        counts[index] += 1;
    }

    // Uniform would be 20% each; allow 16%..24%
    for (index, &count) in counts.iter().enumerate() {
        assert!(
            (800..=1200).contains(&count),
            "pitch class {index} drawn {count} times out of {DRAWS}"
        );
    }
}

#[test]
fn process_emits_scale_pitches_on_ticks_only() {
    let mut sequencer = Sequencer::with_seed(48_000.0, 7);
    sequencer.set_rate(4_800.0); // tick every 10 samples

    let mut notes = 0;
    for _ in 0..1_000 {
        if let Some(pitch) = sequencer.process() {
            assert!(SCALE_HZ.contains(&pitch));
            notes += 1;
        }
    }
    assert!(
        (99..=101).contains(&notes),
        "expected ~100 notes, got {notes}"
    );
}
