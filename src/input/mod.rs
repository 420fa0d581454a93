mod midi;
pub mod panel;

pub use self::midi::MidiControls;
pub use self::panel::{Curve, Knob, KnobSpec, PanelMapper, KNOB_MAP, NUM_KNOBS};

/// The analog input driver seam: one normalized reading per named channel.
///
/// A hardware ADC always has a position for every pot; sources that learn
/// values over time (like the MIDI adapter) return None for channels they
/// have not seen yet, and the mapper leaves those parameters at their
/// defaults.
pub trait ControlSource {
    fn read(&mut self, knob: Knob) -> Option<f32>;
}
