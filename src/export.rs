use hound::{SampleFormat, WavSpec, WavWriter};
use std::{
    io::{Seek, Write},
    path::Path,
};

fn spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    }
}

/// Writes `samples` as a mono 32-bit float WAV stream.
pub fn write_wav<W: Write + Seek>(writer: W, samples: &[f32], sample_rate: u32) -> Result<(), hound::Error> {
    let mut wav = WavWriter::new(writer, spec(sample_rate))?;
    for &sample in samples {
        wav.write_sample(sample)?;
    }
    wav.finalize()
}

/// Saves `samples` as a mono 32-bit float WAV file at `path`.
pub fn save_wav(path: impl AsRef<Path>, samples: &[f32], sample_rate: u32) -> Result<(), hound::Error> {
    let mut wav = WavWriter::create(path, spec(sample_rate))?;
    for &sample in samples {
        wav.write_sample(sample)?;
    }
    wav.finalize()
}
