use crate::{
    constants::{BUFFER_SECONDS, SAMPLE_RATE},
    duration::parse_duration,
    engine::{spawn_timer, stop_channel, StreamingEngine},
    error::{ArgumentError, Error},
    noise::{self, NoiseType, SampleBuffer},
    sink::{AudioSink, StreamParams},
};
use rand::Rng;
use std::time::Duration;

/// Unvalidated options of the `play` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayArgs {
    pub noise_type: String,
    pub duration: Option<String>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            noise_type: "white".to_string(),
            duration: None,
        }
    }
}

/// Validated options of the `play` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayRequest {
    pub noise_type: NoiseType,
    pub duration: Option<Duration>,
}

impl TryFrom<&PlayArgs> for PlayRequest {
    type Error = ArgumentError;

    fn try_from(args: &PlayArgs) -> Result<Self, Self::Error> {
        let noise_type = args.noise_type.parse::<NoiseType>()?;
        let duration = args.duration.as_deref().map(parse_duration).transpose()?;
        Ok(Self { noise_type, duration })
    }
}

/// Generates one buffer of noise and loops it into `sink`.
///
/// The arguments are validated before the sink is touched. Returns once the
/// requested duration has elapsed, or never if no duration was given.
pub fn play<S, R>(args: &PlayArgs, sink: &mut S, rng: &mut R) -> Result<usize, Error>
where
    S: AudioSink + ?Sized,
    R: Rng + ?Sized,
{
    let request = PlayRequest::try_from(args)?;

    let length = (SAMPLE_RATE * BUFFER_SECONDS) as usize;
    let buffer = noise::generate(request.noise_type, length, rng);

    let (handle, mut signal) = stop_channel();
    let timer = request.duration.map(|duration| spawn_timer(duration, handle));

    match request.duration {
        Some(duration) => println!("Playing {} noise for {:?}", request.noise_type, duration),
        None => println!("Playing {} noise until interrupted", request.noise_type),
    }

    let engine = StreamingEngine::new(StreamParams {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        buffer_size: buffer.len(),
    });
    let writes = engine.run(&buffer, sink, &mut signal)?;

    if let Some(timer) = timer {
        timer.join().ok();
    }
    Ok(writes)
}

/// Generates the noise requested by `args` without playing it.
///
/// The buffer covers the requested duration, or one minute if none was given.
pub fn render<R: Rng + ?Sized>(args: &PlayArgs, rng: &mut R) -> Result<SampleBuffer, Error> {
    let request = PlayRequest::try_from(args)?;
    let length = match request.duration {
        Some(duration) => (duration.as_secs_f64() * SAMPLE_RATE as f64).round() as usize,
        None => (SAMPLE_RATE * BUFFER_SECONDS) as usize,
    };
    Ok(noise::generate(request.noise_type, length, rng))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{duration::ParseDurationError, engine::test::MockSink};
    use rand::{rngs::StdRng, SeedableRng};

    fn args(noise_type: &str, duration: Option<&str>) -> PlayArgs {
        PlayArgs {
            noise_type: noise_type.to_string(),
            duration: duration.map(str::to_string),
        }
    }

    #[test]
    fn test_request() {
        assert_eq!(
            PlayRequest::try_from(&args("Pink", Some("2s"))),
            Ok(PlayRequest {
                noise_type: NoiseType::Pink,
                duration: Some(Duration::from_secs(2)),
            })
        );
        assert_eq!(
            PlayRequest::try_from(&PlayArgs::default()),
            Ok(PlayRequest {
                noise_type: NoiseType::White,
                duration: None,
            })
        );
    }

    #[test]
    fn test_invalid_type_fails_before_sink() {
        let mut sink = MockSink::new();
        let result = play(&args("red", Some("2s")), &mut sink, &mut StdRng::seed_from_u64(0));

        assert!(matches!(
            result,
            Err(Error::InvalidArgument(ArgumentError::UnknownNoiseType(_)))
        ));
        assert!(sink.calls().is_empty());
    }

    #[test]
    fn test_invalid_duration_fails_before_sink() {
        let mut sink = MockSink::new();
        let result = play(&args("brown", Some("abc")), &mut sink, &mut StdRng::seed_from_u64(0));

        assert!(matches!(
            result,
            Err(Error::InvalidArgument(ArgumentError::Duration(ParseDurationError::Invalid(_))))
        ));
        assert!(sink.calls().is_empty());
    }

    #[test]
    fn test_plays_until_duration() {
        let mut sink = MockSink::new();
        sink.write_delay = Duration::from_millis(10);

        let writes = play(&args("white", Some("50ms")), &mut sink, &mut StdRng::seed_from_u64(0)).unwrap();

        assert!(writes > 0);
        assert_eq!(sink.buffer.len(), 44100 * 60);
        assert!(sink.written.iter().all(|w| w == &sink.written[0]));
        let calls = sink.calls();
        assert_eq!(calls[..3], ["initialize", "open_stream", "start"]);
        assert_eq!(calls[calls.len() - 3..], ["stop", "close", "terminate"]);
    }

    #[test]
    fn test_render() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(render(&args("pink", Some("1.5s")), &mut rng).unwrap().len(), 66150);
        assert_eq!(render(&args("brown", None), &mut rng).unwrap().len(), 44100 * 60);
        assert!(matches!(
            render(&args("red", None), &mut rng),
            Err(Error::InvalidArgument(ArgumentError::UnknownNoiseType(_)))
        ));
    }
}
