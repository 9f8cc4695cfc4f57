use super::{AudioSink, StreamParams};
use crate::{constants::RING_CAPACITY, error::DeviceError};
use basedrop::Collector;
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    BufferSize, Device, Host, SampleRate, Stream, StreamConfig,
};
use ringbuf_basedrop as ringbuf;
use std::{fmt, sync::mpsc};

/// Plays mono samples on the default output device of the default cpal host.
///
/// Samples travel from `write` to the output callback through a lock-free ring
/// buffer. When the ring is full, `write` waits for the callback to drain it,
/// which gives the blocking behaviour the write loop relies on.
pub struct CpalSink {
    collector: Collector,
    host: Option<Host>,
    device: Option<Device>,
    output: Option<OutputStream>,
    buffer: Vec<f32>,
}

struct OutputStream {
    stream: Stream,
    channel: ringbuf::Producer<f32>,
    notify: mpsc::Receiver<()>,
}

impl CpalSink {
    pub fn new() -> Self {
        Self {
            collector: Collector::new(),
            host: None,
            device: None,
            output: None,
            buffer: vec![],
        }
    }

    fn output(&mut self) -> Result<&mut OutputStream, DeviceError> {
        self.output.as_mut().ok_or(DeviceError::StreamNotOpen)
    }
}

impl Default for CpalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink for CpalSink {
    fn initialize(&mut self) -> Result<(), DeviceError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(DeviceError::NoOutputDevice)?;
        println!("Output device: {}", device.name()?);

        self.host = Some(host);
        self.device = Some(device);
        Ok(())
    }

    fn open_stream(&mut self, params: StreamParams) -> Result<(), DeviceError> {
        // The ring carries one sample per frame
        if params.channels != 1 {
            return Err(DeviceError::UnsupportedChannels(params.channels));
        }
        let device = self.device.as_ref().ok_or(DeviceError::NotInitialized)?;

        let config = StreamConfig {
            channels: device.default_output_config()?.channels(),
            sample_rate: SampleRate(params.sample_rate),
            buffer_size: BufferSize::Default,
        };
        let device_channels = config.channels.max(1) as usize;

        let (tx, mut rx) = ringbuf::RingBuffer::new(RING_CAPACITY).split(&self.collector.handle());
        let (tx2, rx2) = mpsc::sync_channel(0);

        let stream = device.build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(device_channels) {
                    // Underruns play silence
                    let value = match rx.pop_slice(&mut frame[..1]) {
                        1 => frame[0],
                        _ => 0.0,
                    };
                    frame.fill(value);
                }
                tx2.try_send(()).ok();
            },
            move |err| {
                eprintln!("an error occurred on stream: {}", err);
            },
            None,
        )?;

        self.buffer = vec![0.0; params.buffer_size];
        self.output = Some(OutputStream {
            stream,
            channel: tx,
            notify: rx2,
        });
        Ok(())
    }

    fn start(&mut self) -> Result<(), DeviceError> {
        self.output()?.stream.play()?;
        Ok(())
    }

    fn buffer_mut(&mut self) -> &mut [f32] {
        &mut self.buffer
    }

    fn write(&mut self) -> Result<(), DeviceError> {
        let output = self.output.as_mut().ok_or(DeviceError::StreamNotOpen)?;

        let mut pending = &self.buffer[..];
        while !pending.is_empty() {
            let pushed = output.channel.push_slice(pending);
            pending = &pending[pushed..];
            if !pending.is_empty() {
                // The ring is full, wait for the callback to consume some of it
                output
                    .notify
                    .recv()
                    .map_err(|_| DeviceError::Write("output stream has shut down".to_string()))?;
            }
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), DeviceError> {
        self.output()?.stream.pause()?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), DeviceError> {
        self.output.take().ok_or(DeviceError::StreamNotOpen)?;
        self.buffer = vec![];
        Ok(())
    }

    fn terminate(&mut self) -> Result<(), DeviceError> {
        self.output = None;
        self.device = None;
        self.host = None;
        self.collector.collect();
        Ok(())
    }
}

/// Summary of one audio device of the default host.
#[derive(Clone, Debug)]
pub struct DeviceInfo {
    pub name: String,
    pub max_input_channels: u16,
    pub max_output_channels: u16,
    pub default_sample_rate: u32,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, MaxInputChannels: {}, MaxOutputChannels: {}, DefaultSampleRate: {}",
            self.name, self.max_input_channels, self.max_output_channels, self.default_sample_rate
        )
    }
}

/// Lists every input and output device of the default host.
pub fn list_devices() -> Result<Vec<DeviceInfo>, DeviceError> {
    let host = cpal::default_host();
    host.devices()?.map(|device| describe(&device)).collect()
}

fn describe(device: &Device) -> Result<DeviceInfo, DeviceError> {
    // Devices without any input or output configs report zero channels
    let max_input_channels = device
        .supported_input_configs()
        .map(|configs| configs.map(|c| c.channels()).max().unwrap_or(0))
        .unwrap_or(0);
    let max_output_channels = device
        .supported_output_configs()
        .map(|configs| configs.map(|c| c.channels()).max().unwrap_or(0))
        .unwrap_or(0);
    let default_sample_rate = device
        .default_output_config()
        .or_else(|_| device.default_input_config())
        .map(|config| config.sample_rate().0)
        .unwrap_or(0);

    Ok(DeviceInfo {
        name: device.name()?,
        max_input_channels,
        max_output_channels,
        default_sample_rate,
    })
}
