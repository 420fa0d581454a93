use crate::audio::AudioBackend;
use crate::synth::config::{SynthConfig, BLOCK_SIZE};
use crate::synth::core::Synth;
use crate::synth::params::Params;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream};
use std::error::Error;
use std::sync::Arc;

pub struct CpalBackend {
    stream: Option<Stream>,
    params: Arc<Params>,
}

impl CpalBackend {
    pub fn new(params: Arc<Params>) -> Self {
        Self {
            stream: None,
            params,
        }
    }

    fn build_stream(&mut self) -> Result<Stream, Box<dyn Error>> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or("No output device available")?;
        println!("Selected device: {}", device.name().unwrap_or_default());

        let supported_config = device.default_output_config()?;
        if supported_config.sample_format() != SampleFormat::F32 {
            return Err("Unsupported sample format".into());
        }

        let stream_config = cpal::StreamConfig {
            channels: 2,
            sample_rate: supported_config.sample_rate(),
            buffer_size: cpal::BufferSize::Fixed(BLOCK_SIZE as u32),
        };

        let sample_rate = stream_config.sample_rate.0 as f32;
        println!("Sample rate: {} Hz, block size: {}", sample_rate, BLOCK_SIZE);

        // The engine moves into the callback closure: the audio domain owns
        // all per-sample state, and only the parameter store is shared.
        let mut synth = Synth::new(SynthConfig { sample_rate }, self.params.clone());

        let stream = device.build_output_stream(
            &stream_config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                synth.process(data);
            },
            |err| eprintln!("Stream error: {}", err),
            None,
        )?;

        Ok(stream)
    }
}

impl AudioBackend for CpalBackend {
    fn start(&mut self) -> Result<(), Box<dyn Error>> {
        let stream = self.build_stream()?;
        stream.play()?;
        self.stream = Some(stream);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(stream) = &self.stream {
            if let Err(e) = stream.pause() {
                eprintln!("Failed to stop stream: {}", e);
            }
        }
    }
}
