//! Command line parsing.
//!
//! Usage:
//!
//! ```text
//! play [--duration D] [--type white|brown|pink|minor]
//! list
//! render [--duration D] [--type white|brown|pink|minor] --output FILE
//! help
//! ```

use crate::{error::ArgumentError, player::PlayArgs};
use std::path::PathBuf;

pub const USAGE: &str = "Expected 'play' or 'list' commands";

pub const HELP: &str = "\
play: Play noise until interrupted. Options:
  --duration D    Stop after D (format: 10s, 2m, 3h, 1h30m)
  --type T        Type of noise: white, brown, pink, minor (default: white)
list: List audio devices. No options.
render: Save noise to a WAV file instead of playing it. Options:
  --duration D    Length of the file (default: 1m)
  --type T        Type of noise (default: white)
  --output FILE   Path of the WAV file to write
help: Show this help message.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(PlayArgs),
    Render { play: PlayArgs, output: PathBuf },
    List,
    Help,
}

/// Parses the arguments following the program name.
/// Returns `None` when no known command is given.
pub fn parse_command<I, S>(args: I) -> Option<Result<Command, ArgumentError>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let command = args.next()?;
    let rest: Vec<String> = args.collect();

    match command.as_str() {
        "play" => Some(parse_flags(&rest, &["duration", "type"]).map(|flags| Command::Play(flags.play))),
        "render" => Some(parse_flags(&rest, &["duration", "type", "output"]).and_then(|flags| {
            let output = flags.output.ok_or(ArgumentError::MissingOutput)?;
            Ok(Command::Render {
                play: flags.play,
                output: PathBuf::from(output),
            })
        })),
        "list" => Some(Ok(Command::List)),
        "help" => Some(Ok(Command::Help)),
        _ => None,
    }
}

struct Flags {
    play: PlayArgs,
    output: Option<String>,
}

/// Accepts `--name value`, `--name=value` and the single-dash forms of both.
fn parse_flags(args: &[String], allowed: &[&str]) -> Result<Flags, ArgumentError> {
    let mut flags = Flags {
        play: PlayArgs::default(),
        output: None,
    };

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        let stripped = arg
            .strip_prefix("--")
            .or_else(|| arg.strip_prefix('-'))
            .ok_or_else(|| ArgumentError::UnknownFlag(arg.clone()))?;
        let (name, inline) = match stripped.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (stripped, None),
        };
        if !allowed.contains(&name) {
            return Err(ArgumentError::UnknownFlag(format!("-{}", name)));
        }

        let value = match inline {
            Some(value) => value,
            None => args
                .next()
                .cloned()
                .ok_or_else(|| ArgumentError::MissingValue(format!("-{}", name)))?,
        };

        match name {
            "duration" => flags.play.duration = Some(value),
            "type" => flags.play.noise_type = value,
            "output" => flags.output = Some(value),
            _ => unreachable!(),
        }
    }

    Ok(flags)
}
