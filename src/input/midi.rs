use crate::input::panel::{Knob, NUM_KNOBS};
use crate::input::ControlSource;
use midir::{MidiInput, MidiInputConnection, MidiInputPort};
use std::error::Error;
use std::sync::mpsc::{self, Receiver};

/// First CC number of the knob bank; CC 21..=30 cover the ten panel pots in
/// `Knob` declaration order.
const BASE_CC: u8 = 21;

/// Control surface adapter: ten MIDI CCs standing in for the ten analog
/// pots, each exposed as a normalized [0, 1] reading.
pub struct MidiControls {
    /// Holds the connection to keep it alive
    #[allow(dead_code)]
    connection: MidiInputConnection<()>,
    receiver: Receiver<(u8, u8)>, // (cc, value)
    values: [Option<f32>; NUM_KNOBS],
}

impl MidiControls {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let midi_in = MidiInput::new("rustdronesynth controls")?;
        let port = Self::select_input_port(&midi_in)?;
        let port_name = midi_in.port_name(&port)?;

        let (sender, receiver) = mpsc::channel();

        let connection = midi_in.connect(
            &port,
            "dronesynth-cc-input",
            move |_, message, _| {
                // Control Change on any MIDI channel
                if message.len() >= 3 && message[0] & 0xF0 == 0xB0 {
                    let _ = sender.send((message[1], message[2]));
                }
            },
            (),
        )?;

        println!("Opened MIDI control port: {}", port_name);

        Ok(Self {
            connection,
            receiver,
            values: [None; NUM_KNOBS],
        })
    }

    fn select_input_port(midi_in: &MidiInput) -> Result<MidiInputPort, Box<dyn Error>> {
        let in_ports = midi_in.ports();
        let port = in_ports.first().ok_or("No MIDI input ports found")?;
        Ok(port.clone())
    }

    /// Latest-wins drain of everything the connection thread forwarded.
    fn drain(&mut self) {
        while let Ok((cc, value)) = self.receiver.try_recv() {
            let index = cc.wrapping_sub(BASE_CC) as usize;
            if index < NUM_KNOBS {
                self.values[index] = Some(value as f32 / 127.0);
            }
        }
    }
}

impl ControlSource for MidiControls {
    fn read(&mut self, knob: Knob) -> Option<f32> {
        self.drain();
        self.values[knob as usize]
    }
}
