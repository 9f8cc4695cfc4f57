use std::time::Duration;
use thiserror::Error;

/// Parses a span such as `10s`, `2m`, `1h30m`, `1.5s` or `300ms`.
///
/// A span is an optional sign followed by one or more decimal numbers, each with
/// a unit suffix. Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`.
/// Negative spans are rejected, except for zero.
pub fn parse_duration(input: &str) -> Result<Duration, ParseDurationError> {
    let invalid = || ParseDurationError::Invalid(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total_nanos = 0.0f64;
    while !rest.is_empty() {
        // Leading number, with an optional fractional part
        let number_len = rest.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(rest.len());
        let number = &rest[..number_len];
        if number.is_empty() || number == "." {
            return Err(invalid());
        }
        let value: f64 = number.parse().map_err(|_| invalid())?;
        rest = &rest[number_len..];

        // Unit suffix
        let unit_len = rest.find(|c: char| c.is_ascii_digit() || c == '.').unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        let scale = match unit {
            "" => return Err(ParseDurationError::MissingUnit(input.to_string())),
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return Err(ParseDurationError::UnknownUnit(unit.to_string(), input.to_string())),
        };
        rest = &rest[unit_len..];

        total_nanos += value * scale;
    }

    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return Err(invalid());
    }
    if negative && total_nanos > 0.0 {
        return Err(ParseDurationError::Negative(input.to_string()));
    }

    Ok(Duration::from_nanos(total_nanos.round() as u64))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    #[error("invalid duration \"{0}\"")]
    Invalid(String),
    #[error("missing unit in duration \"{0}\"")]
    MissingUnit(String),
    #[error("unknown unit \"{0}\" in duration \"{1}\"")]
    UnknownUnit(String, String),
    #[error("negative duration \"{0}\"")]
    Negative(String),
}
