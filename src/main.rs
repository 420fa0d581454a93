use rustdronesynth::audio::{AudioBackend, CpalBackend};
use rustdronesynth::input::{MidiControls, PanelMapper};
use rustdronesynth::synth::params::Params;
use std::sync::Arc;

fn main() {
    // The parameter store is the only state shared between the control loop
    // and the audio callback.
    let params = Arc::new(Params::default());

    let mut audio_backend = CpalBackend::new(params.clone());
    audio_backend
        .start()
        .expect("Failed to start audio stream");

    let mut controls = MidiControls::new().expect("Failed to open control input");
    let mut panel = PanelMapper::new(params);

    // Control loop: re-read every knob and remap parameters, forever. The
    // mapping is O(1) and idempotent, so no pacing is needed.
    loop {
        panel.update(&mut controls);
    }
}
