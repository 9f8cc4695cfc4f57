use crate::error::DeviceError;

pub use device::{list_devices, CpalSink, DeviceInfo};

mod device;

/// Parameters of the output stream requested from a sink.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StreamParams {
    /// Number of interleaved channels in the write buffer.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples in the write buffer.
    pub buffer_size: usize,
}

/// An audio output that accepts one buffer of samples at a time.
///
/// The calls follow a fixed lifecycle: `initialize`, `open_stream`, `start`, any
/// number of `write`s, then `stop`, `close` and `terminate` in that order.
pub trait AudioSink {
    /// Acquires the audio subsystem.
    fn initialize(&mut self) -> Result<(), DeviceError>;

    /// Opens an output stream with a write buffer of `params.buffer_size` samples.
    fn open_stream(&mut self, params: StreamParams) -> Result<(), DeviceError>;

    /// Starts the opened stream.
    fn start(&mut self) -> Result<(), DeviceError>;

    /// The buffer that the next call to `write` reads from.
    /// Empty until a stream has been opened.
    fn buffer_mut(&mut self) -> &mut [f32];

    /// Sends the write buffer to the device, blocking until the device has accepted it.
    fn write(&mut self) -> Result<(), DeviceError>;

    /// Stops the stream.
    fn stop(&mut self) -> Result<(), DeviceError>;

    /// Closes the stream.
    fn close(&mut self) -> Result<(), DeviceError>;

    /// Releases the audio subsystem.
    fn terminate(&mut self) -> Result<(), DeviceError>;
}
