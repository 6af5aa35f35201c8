/*!
 * Timestamp recognition and formatting.
 *
 * A transcript timestamp is a whole line of the form `M:SS`, `MM:SS` or
 * `H:MM:SS` where the hour group may be arbitrarily wide. Minutes and seconds
 * must be in `00..=59`.
 */

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use regex::Regex;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;
const MILLISECONDS_PER_SECOND: u64 = 1000;

// @const: Whole-line timestamp regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+):([0-5]\d):([0-5]\d)|(\d{1,2}):([0-5]\d))$")
        .expect("timestamp regex is valid")
});

/// Display width class of a timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimestampLayout {
    /// `M:SS`
    MinutesSeconds,
    /// `H:MM:SS`
    HoursMinutesSeconds,
}

/// A non-negative offset from the start of a video, in whole seconds.
///
/// The layout the timestamp was written in is kept so that a three-group
/// timestamp such as `0:05:00` is never printed back as `5:00`. Equality,
/// ordering and hashing only look at the offset, so `0:05:00 == 5:00`.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp {
    seconds: u64,
    layout: TimestampLayout,
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.seconds == other.seconds
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds.cmp(&other.seconds)
    }
}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seconds.hash(state);
    }
}

impl Timestamp {
    /// Create a timestamp from seconds, picking the narrowest layout that fits
    pub fn from_seconds(seconds: u64) -> Self {
        let layout = if seconds >= SECONDS_PER_HOUR {
            TimestampLayout::HoursMinutesSeconds
        } else {
            TimestampLayout::MinutesSeconds
        };
        Self { seconds, layout }
    }

    /// Create a timestamp from milliseconds; fractional seconds are floored
    pub fn from_millis(millis: u64) -> Self {
        Self::from_seconds(millis / MILLISECONDS_PER_SECOND)
    }

    /// Parse a line that is exactly a timestamp.
    ///
    /// Surrounding whitespace is ignored. Returns `None` when the line holds
    /// anything besides the timestamp, or when the hour group overflows.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = TIMESTAMP_REGEX.captures(line.trim())?;

        if let (Some(hours), Some(minutes), Some(seconds)) = (caps.get(1), caps.get(2), caps.get(3)) {
            let hours: u64 = hours.as_str().parse().ok()?;
            let minutes: u64 = minutes.as_str().parse().ok()?;
            let seconds: u64 = seconds.as_str().parse().ok()?;
            let total = hours
                .checked_mul(SECONDS_PER_HOUR)?
                .checked_add(minutes * SECONDS_PER_MINUTE + seconds)?;
            return Some(Self {
                seconds: total,
                layout: TimestampLayout::HoursMinutesSeconds,
            });
        }

        let minutes: u64 = caps.get(4)?.as_str().parse().ok()?;
        let seconds: u64 = caps.get(5)?.as_str().parse().ok()?;
        Some(Self {
            seconds: minutes * SECONDS_PER_MINUTE + seconds,
            layout: TimestampLayout::MinutesSeconds,
        })
    }

    /// Total offset in seconds
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn layout(&self) -> TimestampLayout {
        self.layout
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / SECONDS_PER_HOUR;
        let minutes = (self.seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let seconds = self.seconds % SECONDS_PER_MINUTE;

        match self.layout {
            TimestampLayout::HoursMinutesSeconds => {
                write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)
            }
            // A minutes-only layout cannot hold an hour, widen rather than wrap
            TimestampLayout::MinutesSeconds if hours > 0 => {
                write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)
            }
            TimestampLayout::MinutesSeconds => write!(f, "{}:{:02}", minutes, seconds),
        }
    }
}

/// Whether a line is exactly a timestamp
pub fn is_timestamp(line: &str) -> bool {
    Timestamp::parse(line).is_some()
}

/// Seconds value of a timestamp line, if it is one
pub fn timestamp_to_seconds(line: &str) -> Option<u64> {
    Timestamp::parse(line).map(|ts| ts.seconds())
}
