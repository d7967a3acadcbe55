//! Sloppy, single-unit durations.
//!
//! Parse things a person might type, like `"2d"`, `"1w"`, `"3M"` or `"1y"`,
//! into an exact [`Duration`], and print exact durations back out as
//! something roughly right, like `"2w"` or `"11M"`.
//!
//! Months and years are fixed: a year is 365 days and a month is a twelfth
//! of that. Composites such as `"1h30m"` and negative durations are not
//! accepted.
//!
//! ```
//! use std::time::Duration;
//! use sloppy_duration::{SloppyDuration, DAY};
//!
//! let two_days = SloppyDuration::parse("2d").unwrap();
//! assert_eq!(two_days.duration(), DAY * 2);
//! assert_eq!(two_days.to_string(), "2d");
//!
//! let week = SloppyDuration::wrap(DAY * 7);
//! assert_eq!(week.to_string(), "7d");
//! assert_eq!(SloppyDuration::wrap(DAY * 14).to_string(), "2w");
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

mod base;
mod error;
mod opts;
mod parse;
mod template;
mod units;

pub use error::{ParseError, TemplateError};
pub use opts::StringerOpts;
pub use template::{StringerData, Template};
pub use units::{Unit, DAY, MONTH, WEEK, YEAR};

use units::NANOS_PER_MILLI;

/// A [`Duration`] paired with the options used to display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SloppyDuration {
    dur: Duration,
    opts: StringerOpts,
}

impl SloppyDuration {
    /// Wraps an exact duration, displayed with the default options.
    pub fn wrap(dur: Duration) -> Self {
        Self::wrap_with_opts(dur, &StringerOpts::default())
    }

    /// Wraps an exact duration, displayed with `opts` filled in from the defaults.
    pub fn wrap_with_opts(dur: Duration, opts: &StringerOpts) -> Self {
        Self {
            dur,
            opts: opts.resolve(),
        }
    }

    /// Parses a sloppy duration string such as `"90s"`, `"2d"` or `"3w"`.
    ///
    /// On top of the standard units (`ns`, `us`, `ms`, `s`, `m`, `h`), the
    /// suffixes `d` (day), `w` (week), `M` (month) and `y` (year) are
    /// accepted. A fractional count of those is cut down to a whole one.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with_opts(input, &StringerOpts::default())
    }

    /// Like [`parse`](Self::parse), displaying the result with `opts`.
    pub fn parse_with_opts(input: &str, opts: &StringerOpts) -> Result<Self, ParseError> {
        let dur = parse::parse_duration(input)?;
        Ok(Self::wrap_with_opts(dur, opts))
    }

    /// The exact wrapped duration.
    pub fn duration(&self) -> Duration {
        self.dur
    }

    /// The resolved display options.
    pub fn opts(&self) -> &StringerOpts {
        &self.opts
    }

    pub fn milliseconds(&self) -> u128 {
        self.dur.as_nanos() / NANOS_PER_MILLI
    }

    pub fn seconds(&self) -> u64 {
        self.dur.as_secs()
    }

    pub fn minutes(&self) -> u64 {
        self.dur.as_secs() / 60
    }

    pub fn hours(&self) -> u64 {
        self.dur.as_secs() / (60 * 60)
    }

    pub fn days(&self) -> u64 {
        self.dur.as_secs() / DAY.as_secs()
    }

    pub fn weeks(&self) -> u64 {
        self.dur.as_secs() / WEEK.as_secs()
    }

    pub fn months(&self) -> u64 {
        self.dur.as_secs() / MONTH.as_secs()
    }

    pub fn years(&self) -> u64 {
        self.dur.as_secs() / YEAR.as_secs()
    }

    /// Picks the display bucket, or `None` when below the minimum threshold.
    pub fn stringer_data(&self) -> Option<StringerData> {
        let opts = &self.opts;
        if self.dur < opts.minimum_threshold {
            return None;
        }

        let ladder = [
            (opts.millisecond_threshold, Unit::Millisecond),
            (opts.second_threshold, Unit::Second),
            (opts.minute_threshold, Unit::Minute),
            (opts.hour_threshold, Unit::Hour),
            (opts.day_threshold, Unit::Day),
            (opts.week_threshold, Unit::Week),
            (opts.month_threshold, Unit::Month),
        ];
        let unit = ladder
            .iter()
            .find(|(threshold, _)| self.dur < *threshold)
            .map_or(Unit::Year, |&(_, unit)| unit);

        Some(StringerData {
            value: unit.count(self.dur),
            unit,
        })
    }
}

impl fmt::Display for SloppyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(data) = self.stringer_data() else {
            return f.write_str(&self.opts.minimum_string);
        };
        match &self.opts.template {
            Some(template) => template.render_to(f, &data),
            None => Template::default().render_to(f, &data),
        }
    }
}

impl FromStr for SloppyDuration {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Duration> for SloppyDuration {
    fn from(dur: Duration) -> Self {
        Self::wrap(dur)
    }
}

impl From<SloppyDuration> for Duration {
    fn from(sd: SloppyDuration) -> Self {
        sd.dur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(h: u64) -> Duration {
        Duration::from_secs(h * 3600)
    }

    #[test]
    fn test_parse_scales_days() {
        let d = SloppyDuration::parse("2d").unwrap();
        assert_eq!(d.duration(), hours(48));
    }

    #[test]
    fn test_week_equals_seven_days() {
        assert_eq!(
            SloppyDuration::parse("1w").unwrap().duration(),
            SloppyDuration::parse("7d").unwrap().duration()
        );
    }

    #[test]
    fn test_year_and_month() {
        let year = SloppyDuration::parse("1y").unwrap();
        assert_eq!(year.days(), 365);
        assert_eq!(
            SloppyDuration::parse("1M").unwrap().duration(),
            year.duration() / 12
        );
    }

    #[test]
    fn test_accessors_truncate() {
        let d = SloppyDuration::wrap(Duration::new(90_061, 999_999_999));
        assert_eq!(d.milliseconds(), 90_061_999);
        assert_eq!(d.seconds(), 90_061);
        assert_eq!(d.minutes(), 1501);
        assert_eq!(d.hours(), 25);
        assert_eq!(d.days(), 1);
        assert_eq!(d.weeks(), 0);
        assert_eq!(d.months(), 0);
        assert_eq!(d.years(), 0);
    }

    #[test]
    fn test_accessors_on_long_durations() {
        let d = SloppyDuration::parse("2y").unwrap();
        assert_eq!(d.years(), 2);
        assert_eq!(d.months(), 24);
        assert_eq!(d.weeks(), 104);
        assert_eq!(d.days(), 730);
        assert_eq!(d.hours(), 17_520);
    }

    #[test]
    fn test_default_display() {
        assert_eq!(SloppyDuration::wrap(Duration::from_millis(500)).to_string(), "< 1s");
        assert_eq!(SloppyDuration::wrap(Duration::from_secs(1)).to_string(), "1s");
        assert_eq!(SloppyDuration::wrap(Duration::from_secs(90)).to_string(), "1m");
        assert_eq!(SloppyDuration::wrap(hours(24)).to_string(), "1d");
        assert_eq!(SloppyDuration::wrap(hours(336)).to_string(), "2w");
        assert_eq!(SloppyDuration::wrap(hours(730)).to_string(), "1M");
        assert_eq!(SloppyDuration::wrap(hours(8760)).to_string(), "1y");
    }

    #[test]
    fn test_millisecond_bucket_is_reachable() {
        let opts = StringerOpts::empty().with_minimum_threshold(Duration::from_millis(1));
        let d = SloppyDuration::wrap_with_opts(Duration::from_millis(250), &opts);
        assert_eq!(d.to_string(), "250ms");

        let d = SloppyDuration::wrap_with_opts(Duration::from_micros(1500), &opts);
        assert_eq!(d.to_string(), "1ms");
    }

    #[test]
    fn test_minimum_string_skips_template() {
        let opts = StringerOpts::empty()
            .with_minimum(Duration::from_secs(60), "less than a minute")
            .with_template(Template::parse("~{value} {longUnit}").unwrap());
        assert_eq!(
            SloppyDuration::parse_with_opts("59s", &opts).unwrap().to_string(),
            "less than a minute"
        );
        assert_eq!(
            SloppyDuration::parse_with_opts("61s", &opts).unwrap().to_string(),
            "~1 minute"
        );
    }

    #[test]
    fn test_zero_value_is_singular() {
        // A minimum below the millisecond bucket lets a zero count through.
        let opts = StringerOpts::empty()
            .with_minimum_threshold(Duration::from_nanos(1))
            .with_template(Template::parse("{value} {longUnit}").unwrap());
        let d = SloppyDuration::wrap_with_opts(Duration::from_micros(10), &opts);
        assert_eq!(d.to_string(), "0 millisecond");
    }

    #[test]
    fn test_stringer_data() {
        assert_eq!(SloppyDuration::wrap(Duration::from_millis(10)).stringer_data(), None);
        assert_eq!(
            SloppyDuration::wrap(hours(49)).stringer_data(),
            Some(StringerData {
                value: 2,
                unit: Unit::Day
            })
        );
    }

    #[test]
    fn test_opts_are_resolved_on_wrap() {
        let partial = StringerOpts::empty().with_second_threshold(Duration::from_secs(90));
        let d = SloppyDuration::wrap_with_opts(Duration::from_secs(1), &partial);
        assert_eq!(d.opts(), &partial.resolve());
        assert!(d.opts().template.is_some());
    }

    #[test]
    fn test_unresolved_template_falls_back() {
        let d = SloppyDuration {
            dur: hours(48),
            opts: StringerOpts {
                template: None,
                ..StringerOpts::default()
            },
        };
        assert_eq!(d.to_string(), "2d");
    }

    #[test]
    fn test_from_str_and_conversions() {
        let d: SloppyDuration = "3w".parse().unwrap();
        assert_eq!(Duration::from(d.clone()), WEEK * 3);
        assert_eq!(SloppyDuration::from(WEEK * 3), d);
        assert!("".parse::<SloppyDuration>().is_err());
    }

    #[test]
    fn test_wrap_round_trip() {
        let d = Duration::new(123_456, 789);
        let once = SloppyDuration::wrap(d);
        assert_eq!(SloppyDuration::wrap(once.duration()).duration(), d);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SloppyDuration>();
        assert_send_sync::<StringerOpts>();
        assert_send_sync::<ParseError>();
    }
}
