use std::time::Duration;

use tracing::{debug, trace};

use crate::base;
use crate::error::ParseError;
use crate::units::{Unit, NANOS_PER_SEC};

/// Parses a sloppy duration string: a number followed by one unit, where
/// the unit is `d`, `w`, `M`, `y` or anything the standard grammar accepts.
pub(crate) fn parse_duration(input: &str) -> Result<Duration, ParseError> {
    let result = parse_inner(input);
    match &result {
        Ok(duration) => trace!(input, ?duration, "parsed sloppy duration"),
        Err(err) => debug!(input, error = %err, "rejected sloppy duration"),
    }
    result
}

fn parse_inner(input: &str) -> Result<Duration, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let (numeral, suffix) = split_suffix(input);
    trace!(numeral, suffix, "split sloppy duration");

    // This is also what turns away composites: "1m30s" leaves "1m30" here.
    numeral
        .parse::<f64>()
        .map_err(|source| ParseError::Numeral {
            numeral: numeral.to_string(),
            source,
        })?;
    if numeral.starts_with('-') {
        return Err(ParseError::Negative {
            input: input.to_string(),
        });
    }

    match Unit::from_extended_symbol(suffix) {
        Some(unit) => scale(numeral, unit, input),
        None => base::parse(input),
    }
}

/// Splits off the trailing run of non-digits.
fn split_suffix(input: &str) -> (&str, &str) {
    let at = input.rfind(|c: char| c.is_ascii_digit()).map_or(0, |i| i + 1);
    input.split_at(at)
}

/// `numeral` units of `unit`. The numeral is read as a count of whole
/// nanoseconds first, so a fraction is dropped: `1.5d` is one day.
fn scale(numeral: &str, unit: Unit, input: &str) -> Result<Duration, ParseError> {
    let unsigned = numeral.strip_prefix('+').unwrap_or(numeral);
    let whole = unsigned.split_once('.').map_or(unsigned, |(int, _)| int);
    let whole = if whole.is_empty() { "0" } else { whole };
    let count = base::parse_as(&format!("{whole}ns"), input)?;

    count
        .as_nanos()
        .checked_mul(unit.duration().as_nanos())
        .and_then(nanos_to_duration)
        .ok_or_else(|| ParseError::Overflow {
            input: input.to_string(),
        })
}

fn nanos_to_duration(nanos: u128) -> Option<Duration> {
    let secs = u64::try_from(nanos / NANOS_PER_SEC).ok()?;
    let subsec = (nanos % NANOS_PER_SEC) as u32;
    Some(Duration::new(secs, subsec))
}
