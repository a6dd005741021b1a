//! Points of interest and their scheduling attributes.

use std::collections::BTreeSet;

use geo::Coord;

use crate::{DayPart, TimeOfDay};

/// Descriptive tags attached to a point of interest.
pub type Tags = BTreeSet<String>;

/// Highest weather sensitivity score; fully outdoor and exposed to rain.
pub const MAX_WEATHER_SENSITIVITY: u8 = 10;

/// Daily opening window of a point of interest.
///
/// # Examples
/// ```
/// use compass_core::OpeningHours;
///
/// let hours = OpeningHours::parse("09:00", "17:00")?;
/// assert_eq!(hours.open.to_string(), "09:00");
/// assert!(!hours.is_inverted());
/// # Ok::<(), compass_core::TimeOfDayError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpeningHours {
    /// Earliest arrival time.
    pub open: TimeOfDay,
    /// Time by which visitors must have left.
    pub close: TimeOfDay,
}

impl OpeningHours {
    /// A window spanning the whole day.
    pub const ALL_DAY: Self = Self {
        open: TimeOfDay::MIDNIGHT,
        close: TimeOfDay::END_OF_DAY,
    };

    /// Construct an opening window from parsed times.
    pub const fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    /// Parse an opening window from two `HH:MM` strings.
    pub fn parse(open: &str, close: &str) -> Result<Self, crate::TimeOfDayError> {
        Ok(Self::new(open.parse()?, close.parse()?))
    }

    /// Whether the window closes before it opens.
    pub fn is_inverted(&self) -> bool {
        self.close < self.open
    }
}

/// Crowd severity per day-part. Higher values mean busier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrowdLevels {
    /// Severity before noon.
    pub morning: u8,
    /// Severity between noon and 17:00.
    pub afternoon: u8,
    /// Severity from 17:00.
    pub evening: u8,
}

impl CrowdLevels {
    /// Construct crowd levels for the three day-parts.
    pub const fn new(morning: u8, afternoon: u8, evening: u8) -> Self {
        Self {
            morning,
            afternoon,
            evening,
        }
    }

    /// Crowd severity during `part`.
    ///
    /// # Examples
    /// ```
    /// use compass_core::{CrowdLevels, DayPart};
    ///
    /// let crowd = CrowdLevels::new(7, 9, 5);
    /// assert_eq!(crowd.at(DayPart::Afternoon), 9);
    /// ```
    pub const fn at(&self, part: DayPart) -> u8 {
        match part {
            DayPart::Morning => self.morning,
            DayPart::Afternoon => self.afternoon,
            DayPart::Evening => self.evening,
        }
    }
}

/// A place a visitor may include in a day plan.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// `opening_hours` is optional at the type level so that incomplete catalogue
/// entries can be reported instead of silently scheduled.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use compass_core::{OpeningHours, PointOfInterest};
///
/// # fn main() -> Result<(), compass_core::TimeOfDayError> {
/// let poi = PointOfInterest::new(1, "Hagia Sophia", Coord { x: 28.9802, y: 41.0086 })
///     .with_visit_minutes(120)
///     .with_opening_hours(OpeningHours::parse("09:00", "17:00")?)
///     .with_tags(["history", "architecture"]);
///
/// assert_eq!(poi.id, 1);
/// assert!(poi.tags.contains("history"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Broad category such as `historical` or `shopping`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Visitor rating, typically `0.0..=5.0`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rating: f32,
    /// Planned time on site in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visit_minutes: u32,
    /// Daily opening window.
    #[cfg_attr(feature = "serde", serde(default))]
    pub opening_hours: Option<OpeningHours>,
    /// Crowd severity by day-part.
    #[cfg_attr(feature = "serde", serde(default))]
    pub crowd: CrowdLevels,
    /// Rain sensitivity in `0..=10`.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "clamped_sensitivity")
    )]
    pub weather_sensitivity: u8,
    /// Descriptive tags matched against visitor interests.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Tags,
}

impl PointOfInterest {
    /// Construct a point of interest with no schedule data.
    ///
    /// Chain the `with_*` methods to fill in the remaining attributes.
    pub fn new(id: u64, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            category: String::new(),
            rating: 0.0,
            visit_minutes: 0,
            opening_hours: None,
            crowd: CrowdLevels::default(),
            weather_sensitivity: 0,
            tags: Tags::new(),
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Set the visit duration in minutes.
    #[must_use]
    pub const fn with_visit_minutes(mut self, minutes: u32) -> Self {
        self.visit_minutes = minutes;
        self
    }

    /// Set the opening window.
    #[must_use]
    pub const fn with_opening_hours(mut self, hours: OpeningHours) -> Self {
        self.opening_hours = Some(hours);
        self
    }

    /// Set the crowd levels.
    #[must_use]
    pub const fn with_crowd(mut self, crowd: CrowdLevels) -> Self {
        self.crowd = crowd;
        self
    }

    /// Set the weather sensitivity, clamped to `0..=10`.
    #[must_use]
    pub fn with_weather_sensitivity(mut self, sensitivity: u8) -> Self {
        self.weather_sensitivity = sensitivity.min(MAX_WEATHER_SENSITIVITY);
        self
    }

    /// Replace the tag set.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Count the tags shared with `interests`.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use geo::Coord;
    /// use compass_core::PointOfInterest;
    ///
    /// let poi = PointOfInterest::new(1, "Bazaar", Coord { x: 0.0, y: 0.0 })
    ///     .with_tags(["shopping", "food", "local"]);
    /// let interests = BTreeSet::from(["food".to_owned(), "art".to_owned()]);
    /// assert_eq!(poi.interest_matches(&interests), 1);
    /// ```
    pub fn interest_matches(&self, interests: &Tags) -> usize {
        self.tags.intersection(interests).count()
    }
}

#[cfg(feature = "serde")]
fn clamped_sensitivity<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <u8 as serde::Deserialize>::deserialize(deserializer)?;
    Ok(raw.min(MAX_WEATHER_SENSITIVITY))
}
