use crate::duration::ParseDurationError;
use thiserror::Error;

/// Top-level error of a run. Every variant is fatal.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
    #[error(transparent)]
    Device(#[from] DeviceError),
    #[error("Could not install interrupt handler: {0}")]
    Interrupt(#[from] ctrlc::Error),
}

/// Rejected user input, detected before any synthesis or audio I/O.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("invalid noise type: {0}")]
    UnknownNoiseType(String),
    #[error("Could not parse duration: {0}")]
    Duration(#[from] ParseDurationError),
    #[error("flag needs an argument: {0}")]
    MissingValue(String),
    #[error("flag provided but not defined: {0}")]
    UnknownFlag(String),
    #[error("render needs an output file (--output FILE)")]
    MissingOutput,
}

/// Failures of the audio device or of the output it writes to.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("No output device available")]
    NoOutputDevice,
    #[error("Audio subsystem is not initialized")]
    NotInitialized,
    #[error("Stream is not open")]
    StreamNotOpen,
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(u16),
    #[error("Could not list devices: {0}")]
    Devices(#[from] cpal::DevicesError),
    #[error("Could not read device name: {0}")]
    DeviceName(#[from] cpal::DeviceNameError),
    #[error("Could not read device config: {0}")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),
    #[error("Could not open default stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("Could not start stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
    #[error("Could not stop stream: {0}")]
    PauseStream(#[from] cpal::PauseStreamError),
    #[error("Could not write audio: {0}")]
    Write(String),
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}
