use std::fmt;
use std::time::Duration;

/// 24 hours.
pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);
/// 7 days.
pub const WEEK: Duration = Duration::from_secs(7 * DAY.as_secs());
/// 365 days. Leap years are not a thing here.
pub const YEAR: Duration = Duration::from_secs(365 * DAY.as_secs());
/// A twelfth of a 365-day year (730 hours).
pub const MONTH: Duration = Duration::from_secs(YEAR.as_secs() / 12);

pub(crate) const NANOS_PER_MILLI: u128 = 1_000_000;
pub(crate) const NANOS_PER_SEC: u128 = 1_000_000_000;

/// A display bucket, and for the four coarse ones also a parse suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// Every unit, smallest first.
    pub const ALL: [Unit; 8] = [
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
    ];

    /// Maps one of the suffixes the standard grammar lacks (`d`, `w`, `M`,
    /// `y`) to its unit. Matching is exact and case-sensitive: `m` is a
    /// minute, `M` a month.
    pub fn from_extended_symbol(symbol: &str) -> Option<Unit> {
        match symbol {
            "d" => Some(Unit::Day),
            "w" => Some(Unit::Week),
            "M" => Some(Unit::Month),
            "y" => Some(Unit::Year),
            _ => None,
        }
    }

    pub fn duration(self) -> Duration {
        match self {
            Unit::Millisecond => Duration::from_millis(1),
            Unit::Second => Duration::from_secs(1),
            Unit::Minute => Duration::from_secs(60),
            Unit::Hour => Duration::from_secs(60 * 60),
            Unit::Day => DAY,
            Unit::Week => WEEK,
            Unit::Month => MONTH,
            Unit::Year => YEAR,
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Month => "M",
            Unit::Year => "y",
        }
    }

    /// Singular long name, e.g. "week".
    pub fn long(self) -> &'static str {
        match self {
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Long name with an "s" appended when `value > 1`. Zero stays singular.
    pub fn long_for(self, value: u128) -> String {
        if value > 1 {
            format!("{}s", self.long())
        } else {
            self.long().to_string()
        }
    }

    /// How many whole units fit in `dur`.
    pub fn count(self, dur: Duration) -> u128 {
        dur.as_nanos() / self.duration().as_nanos()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}
