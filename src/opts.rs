use std::time::Duration;

use crate::template::Template;
use crate::units::{DAY, MONTH, WEEK, YEAR};

/// Controls how a [`SloppyDuration`](crate::SloppyDuration) is displayed.
///
/// A zero threshold, an empty `minimum_string` or a `None` template counts as
/// unset and is filled in from [`StringerOpts::default`] by
/// [`resolve`](StringerOpts::resolve). So a threshold cannot be set to zero to
/// switch its bucket off.
///
/// Thresholds are expected to ascend; nothing checks that they do.
///
/// ```
/// use std::time::Duration;
/// use sloppy_duration::{SloppyDuration, StringerOpts};
///
/// let opts = StringerOpts::empty().with_second_threshold(Duration::from_secs(90));
/// let d = SloppyDuration::parse_with_opts("89s", &opts).unwrap();
/// assert_eq!(d.to_string(), "89s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StringerOpts {
    /// Anything shorter prints as `minimum_string`, untemplated.
    pub minimum_threshold: Duration,
    pub minimum_string: String,
    pub template: Option<Template>,

    pub millisecond_threshold: Duration,
    pub second_threshold: Duration,
    pub minute_threshold: Duration,
    pub hour_threshold: Duration,
    pub day_threshold: Duration,
    pub week_threshold: Duration,
    /// At or above this, durations print in years.
    pub month_threshold: Duration,
}

impl StringerOpts {
    /// Every field unset.
    pub const fn empty() -> Self {
        Self {
            minimum_threshold: Duration::ZERO,
            minimum_string: String::new(),
            template: None,
            millisecond_threshold: Duration::ZERO,
            second_threshold: Duration::ZERO,
            minute_threshold: Duration::ZERO,
            hour_threshold: Duration::ZERO,
            day_threshold: Duration::ZERO,
            week_threshold: Duration::ZERO,
            month_threshold: Duration::ZERO,
        }
    }

    /// Returns a copy with every unset field taken from the defaults.
    pub fn resolve(&self) -> Self {
        let def = Self::default();
        let pick = |value: Duration, fallback: Duration| {
            if value.is_zero() {
                fallback
            } else {
                value
            }
        };

        Self {
            minimum_threshold: pick(self.minimum_threshold, def.minimum_threshold),
            minimum_string: if self.minimum_string.is_empty() {
                def.minimum_string
            } else {
                self.minimum_string.clone()
            },
            template: self.template.clone().or(def.template),
            millisecond_threshold: pick(self.millisecond_threshold, def.millisecond_threshold),
            second_threshold: pick(self.second_threshold, def.second_threshold),
            minute_threshold: pick(self.minute_threshold, def.minute_threshold),
            hour_threshold: pick(self.hour_threshold, def.hour_threshold),
            day_threshold: pick(self.day_threshold, def.day_threshold),
            week_threshold: pick(self.week_threshold, def.week_threshold),
            month_threshold: pick(self.month_threshold, def.month_threshold),
        }
    }

    pub fn with_minimum(mut self, threshold: Duration, text: impl Into<String>) -> Self {
        self.minimum_threshold = threshold;
        self.minimum_string = text.into();
        self
    }

    pub fn with_minimum_threshold(mut self, threshold: Duration) -> Self {
        self.minimum_threshold = threshold;
        self
    }

    pub fn with_minimum_string(mut self, text: impl Into<String>) -> Self {
        self.minimum_string = text.into();
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_millisecond_threshold(mut self, threshold: Duration) -> Self {
        self.millisecond_threshold = threshold;
        self
    }

    pub fn with_second_threshold(mut self, threshold: Duration) -> Self {
        self.second_threshold = threshold;
        self
    }

    pub fn with_minute_threshold(mut self, threshold: Duration) -> Self {
        self.minute_threshold = threshold;
        self
    }

    pub fn with_hour_threshold(mut self, threshold: Duration) -> Self {
        self.hour_threshold = threshold;
        self
    }

    pub fn with_day_threshold(mut self, threshold: Duration) -> Self {
        self.day_threshold = threshold;
        self
    }

    pub fn with_week_threshold(mut self, threshold: Duration) -> Self {
        self.week_threshold = threshold;
        self
    }

    pub fn with_month_threshold(mut self, threshold: Duration) -> Self {
        self.month_threshold = threshold;
        self
    }
}

/// The built-in configuration: `< 1s` below a second, then seconds, minutes
/// and hours up to a day, days up to two weeks, weeks up to a month, months
/// up to a year, years beyond.
impl Default for StringerOpts {
    fn default() -> Self {
        Self {
            minimum_threshold: Duration::from_secs(1),
            minimum_string: "< 1s".to_string(),
            template: Some(Template::default()),
            millisecond_threshold: Duration::from_secs(1),
            second_threshold: Duration::from_secs(60),
            minute_threshold: Duration::from_secs(60 * 60),
            hour_threshold: DAY,
            day_threshold: WEEK * 2,
            week_threshold: MONTH,
            month_threshold: YEAR,
        }
    }
}
