//! Playback sink over the default audio host.
//!
//! A thin wrapper around cpal: a finished buffer is pushed into a ring
//! buffer once, and the stream callback drains it frame by frame, fanning
//! the mono signal out to every channel. The core never reads anything
//! back from here.

use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use thiserror::Error;

use crate::buffer::SampleBuffer;
use crate::config::AudioConfig;

/// Failures at the audio device boundary.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no output device available")]
    NoDevice,

    #[error("output device index {0} out of range")]
    BadDeviceIndex(usize),

    #[error("device enumeration failed: {0}")]
    Devices(#[from] cpal::DevicesError),

    #[error(transparent)]
    Config(#[from] cpal::DefaultStreamConfigError),

    #[error(transparent)]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error(transparent)]
    PlayStream(#[from] cpal::PlayStreamError),
}

/// Exclusive handle on one output device.
///
/// At most one stream plays at a time; starting a new one stops the
/// previous. Non-blocking playback keeps the stream alive inside the
/// handle until [`AudioOutput::stop`] or the next play.
pub struct AudioOutput {
    device: cpal::Device,
    stream: Option<cpal::Stream>,
}

impl AudioOutput {
    /// Open the default output device of the default host.
    pub fn new() -> Result<Self, PlaybackError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(PlaybackError::NoDevice)?;
        log::debug!(
            "opened output device: {}",
            device.name().unwrap_or_else(|_| "unknown".into())
        );
        Ok(Self {
            device,
            stream: None,
        })
    }

    /// Names of all output devices on the default host, in index order.
    pub fn list_devices() -> Result<Vec<String>, PlaybackError> {
        let host = cpal::default_host();
        Ok(host
            .output_devices()?
            .map(|device| device.name().unwrap_or_else(|_| "unknown".into()))
            .collect())
    }

    /// Switch to the output device at `index` (see [`Self::list_devices`]).
    pub fn set_device(&mut self, index: usize) -> Result<(), PlaybackError> {
        let host = cpal::default_host();
        let device = host
            .output_devices()?
            .nth(index)
            .ok_or(PlaybackError::BadDeviceIndex(index))?;

        self.stop();
        log::info!(
            "switched to output device {index}: {}",
            device.name().unwrap_or_else(|_| "unknown".into())
        );
        self.device = device;
        Ok(())
    }

    /// Play a baked signal at the config's sample rate.
    ///
    /// Blocking playback sleeps for the signal's duration and releases the
    /// stream afterwards; non-blocking returns immediately.
    pub fn play(
        &mut self,
        signal: &SampleBuffer,
        config: &AudioConfig,
        blocking: bool,
    ) -> Result<(), PlaybackError> {
        self.stop();
        if signal.is_empty() {
            return Ok(());
        }

        let device_config = self.device.default_output_config()?;
        let channels = device_config.channels() as usize;
        let stream_config = cpal::StreamConfig {
            channels: device_config.channels(),
            sample_rate: cpal::SampleRate(config.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        // Fill the ring once; the callback only drains.
        let (mut producer, mut consumer) = rtrb::RingBuffer::<f32>::new(signal.len());
        for &sample in signal.iter() {
            let _ = producer.push(sample);
        }

        let stream = self.device.build_output_stream(
            &stream_config,
            move |data: &mut [f32], _| {
                for frame in data.chunks_mut(channels) {
                    // Silence once the signal is drained.
                    let sample = consumer.pop().unwrap_or(0.0);
                    for out in frame.iter_mut() {
                        *out = sample;
                    }
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )?;
        stream.play()?;
        log::debug!(
            "playing {} samples at {} Hz",
            signal.len(),
            config.sample_rate
        );

        if blocking {
            std::thread::sleep(Duration::from_secs_f32(signal.duration(config)));
        } else {
            self.stream = Some(stream);
        }
        Ok(())
    }

    /// Stop whatever is currently playing.
    pub fn stop(&mut self) {
        self.stream = None;
    }
}
