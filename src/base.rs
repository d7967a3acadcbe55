//! The standard duration grammar (`"500ms"`, `"90s"`, `"2h"`), handled by
//! `humantime`, with its errors mapped onto [`ParseError`].

use std::time::Duration;

use humantime::DurationError;

use crate::error::ParseError;

/// Parses `input` in the standard grammar.
pub(crate) fn parse(input: &str) -> Result<Duration, ParseError> {
    parse_as(input, input)
}

/// Parses `text`, reporting any failure against `input`.
pub(crate) fn parse_as(text: &str, input: &str) -> Result<Duration, ParseError> {
    humantime::parse_duration(text).map_err(|err| from_humantime(err, input))
}

fn from_humantime(err: DurationError, input: &str) -> ParseError {
    let input = input.to_string();
    match err {
        DurationError::UnknownUnit { unit, .. } if unit.is_empty() => {
            ParseError::MissingUnit { input }
        }
        DurationError::UnknownUnit { unit, .. } => ParseError::UnknownUnit { unit, input },
        DurationError::NumberOverflow => ParseError::Overflow { input },
        _ => ParseError::Invalid { input },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_units() {
        assert_eq!(parse("7ns"), Ok(Duration::from_nanos(7)));
        assert_eq!(parse("7us"), Ok(Duration::from_micros(7)));
        assert_eq!(parse("7ms"), Ok(Duration::from_millis(7)));
        assert_eq!(parse("7s"), Ok(Duration::from_secs(7)));
        assert_eq!(parse("7m"), Ok(Duration::from_secs(7 * 60)));
        assert_eq!(parse("7h"), Ok(Duration::from_secs(7 * 3600)));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            parse("1c"),
            Err(ParseError::UnknownUnit {
                unit: "c".to_string(),
                input: "1c".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_as_reports_original_input() {
        assert_eq!(parse_as("12ns", "12d"), Ok(Duration::from_nanos(12)));
        assert_eq!(
            parse_as("1e3ns", "1e3d"),
            Err(ParseError::UnknownUnit {
                unit: "e".to_string(),
                input: "1e3d".to_string(),
            })
        );
    }

    #[test]
    fn test_error_mapping() {
        let unknown = |unit: &str| DurationError::UnknownUnit {
            start: 1,
            end: 1 + unit.len(),
            unit: unit.to_string(),
            value: 1,
        };
        assert_eq!(
            from_humantime(unknown(""), "10"),
            ParseError::MissingUnit {
                input: "10".to_string()
            }
        );
        assert_eq!(
            from_humantime(unknown("yy"), "2yy"),
            ParseError::UnknownUnit {
                unit: "yy".to_string(),
                input: "2yy".to_string(),
            }
        );
        assert_eq!(
            from_humantime(DurationError::NumberOverflow, "9h"),
            ParseError::Overflow {
                input: "9h".to_string()
            }
        );
        assert_eq!(
            from_humantime(DurationError::InvalidCharacter(1), "1.5h"),
            ParseError::Invalid {
                input: "1.5h".to_string()
            }
        );
        assert_eq!(
            from_humantime(DurationError::Empty, ""),
            ParseError::Invalid {
                input: String::new()
            }
        );
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            parse("99999999999999999999999999h"),
            Err(ParseError::Overflow { .. })
        ));
    }
}
