/// Sample rate of every generated buffer and of the output stream.
pub const SAMPLE_RATE: u32 = 44100;

/// Length of the looped playback buffer in seconds.
pub const BUFFER_SECONDS: u32 = 60;

/// Length of each note of the minor noise in seconds.
pub const NOTE_LENGTH: u32 = 2;

/// Speed of the vibrato effect, in oscillations per second.
pub const VIBRATO_RATE: f64 = 5.0;

/// Depth of the vibrato effect, as a fraction of the amplitude.
pub const VIBRATO_DEPTH: f64 = 0.1;

/// Number of frequencies drawn for each minor noise pass.
pub const NOTE_TABLE_SIZE: usize = 16;

/// Number of rolling slots used by the pink noise generator.
pub const PINK_SLOTS: usize = 16;

/// Capacity of the ring buffer between the writer and the output callback, in samples.
pub const RING_CAPACITY: usize = 8192;
