//! Wall-clock times within a single day.
//!
//! Itineraries never cross midnight, so a time is stored as minutes since
//! 00:00 and arithmetic saturates at 23:59 instead of wrapping.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Errors returned when parsing a [`TimeOfDay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeOfDayError {
    /// The input was not an `HH:MM` time.
    #[error("invalid time '{input}': expected HH:MM")]
    InvalidFormat {
        /// The rejected input.
        input: String,
    },
    /// Hour or minute components were out of range.
    #[error("time {hour}:{minute:02} is outside 00:00..=23:59")]
    OutOfRange {
        /// Parsed hour component.
        hour: u16,
        /// Parsed minute component.
        minute: u16,
    },
}

/// A time of day with minute precision.
///
/// # Examples
/// ```
/// use compass_core::TimeOfDay;
///
/// let start: TimeOfDay = "09:40".parse()?;
/// assert_eq!(start.add_minutes(20).to_string(), "10:00");
/// assert_eq!(start.hour(), 9);
/// # Ok::<(), compass_core::TimeOfDayError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight.
    pub const MIDNIGHT: Self = Self(0);
    /// The last representable minute of the day.
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY - 1);

    /// Build a time from hour and minute components.
    pub const fn from_hm(hour: u16, minute: u16) -> Result<Self, TimeOfDayError> {
        if hour >= 24 || minute >= MINUTES_PER_HOUR {
            return Err(TimeOfDayError::OutOfRange { hour, minute });
        }
        Ok(Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Hour component in `0..=23`.
    pub const fn hour(self) -> u16 {
        self.0.div_euclid(MINUTES_PER_HOUR)
    }

    /// Minute component in `0..=59`.
    pub const fn minute(self) -> u16 {
        self.0.rem_euclid(MINUTES_PER_HOUR)
    }

    /// Advance by `minutes`, saturating at [`TimeOfDay::END_OF_DAY`].
    #[must_use]
    pub fn add_minutes(self, minutes: u32) -> Self {
        let end = u32::from(Self::END_OF_DAY.0);
        let total = u32::from(self.0).saturating_add(minutes).min(end);
        Self(u16::try_from(total).unwrap_or(Self::END_OF_DAY.0))
    }

    /// Minutes from `earlier` to `self`, or zero when `earlier` is later.
    pub const fn minutes_since(self, earlier: Self) -> u16 {
        self.0.saturating_sub(earlier.0)
    }

    /// The day-part this time falls into.
    pub const fn day_part(self) -> DayPart {
        DayPart::of(self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeOfDayError::InvalidFormat {
            input: s.to_owned(),
        };
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(hours) || hours.len() > 2 || !digits(minutes) || minutes.len() != 2 {
            return Err(invalid());
        }
        let hour = hours.parse::<u16>().map_err(|_| invalid())?;
        let minute = minutes.parse::<u16>().map_err(|_| invalid())?;
        Self::from_hm(hour, minute)
    }
}

impl TryFrom<&str> for TimeOfDay {
    type Error = TimeOfDayError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Coarse bucket of the day used to look up crowd levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayPart {
    /// Before 12:00.
    Morning,
    /// From 12:00 until 17:00.
    Afternoon,
    /// From 17:00 onwards.
    Evening,
}

impl DayPart {
    /// Bucket a time of day.
    ///
    /// # Examples
    /// ```
    /// use compass_core::{DayPart, TimeOfDay};
    ///
    /// let noon = TimeOfDay::from_hm(12, 0)?;
    /// assert_eq!(DayPart::of(noon), DayPart::Afternoon);
    /// # Ok::<(), compass_core::TimeOfDayError>(())
    /// ```
    pub const fn of(time: TimeOfDay) -> Self {
        match time.hour() {
            0..12 => Self::Morning,
            12..17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("09:00", 9, 0)]
    #[case("9:05", 9, 5)]
    #[case(" 23:59 ", 23, 59)]
    #[case("00:00", 0, 0)]
    fn parses_valid_times(#[case] input: &str, #[case] hour: u16, #[case] minute: u16) {
        let time: TimeOfDay = input.parse().expect("valid time");
        assert_eq!((time.hour(), time.minute()), (hour, minute));
    }

    #[rstest]
    #[case("")]
    #[case("0900")]
    #[case("9:5")]
    #[case("ab:cd")]
    #[case("123:00")]
    #[case("-1:00")]
    #[case("10:00:00")]
    fn rejects_malformed_times(#[case] input: &str) {
        let err = input.parse::<TimeOfDay>().expect_err("malformed time");
        assert!(matches!(err, TimeOfDayError::InvalidFormat { .. }));
    }

    #[rstest]
    #[case("24:00")]
    #[case("12:60")]
    fn rejects_out_of_range_times(#[case] input: &str) {
        let err = input.parse::<TimeOfDay>().expect_err("out of range");
        assert!(matches!(err, TimeOfDayError::OutOfRange { .. }));
    }

    #[rstest]
    fn formats_zero_padded() {
        let time = TimeOfDay::from_hm(7, 5).expect("valid");
        assert_eq!(time.to_string(), "07:05");
    }

    #[rstest]
    fn addition_saturates_at_end_of_day() {
        let late = TimeOfDay::from_hm(23, 30).expect("valid");
        assert_eq!(late.add_minutes(120), TimeOfDay::END_OF_DAY);
    }

    #[rstest]
    fn minutes_since_is_saturating() {
        let nine = TimeOfDay::from_hm(9, 0).expect("valid");
        let eleven = TimeOfDay::from_hm(11, 17).expect("valid");
        assert_eq!(eleven.minutes_since(nine), 137);
        assert_eq!(nine.minutes_since(eleven), 0);
    }

    #[rstest]
    #[case("11:59", DayPart::Morning)]
    #[case("12:00", DayPart::Afternoon)]
    #[case("16:59", DayPart::Afternoon)]
    #[case("17:00", DayPart::Evening)]
    fn buckets_day_parts(#[case] input: &str, #[case] expected: DayPart) {
        let time: TimeOfDay = input.parse().expect("valid time");
        assert_eq!(time.day_part(), expected);
    }
}
