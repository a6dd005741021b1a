//! Visitor preferences steering a day plan.

use std::collections::BTreeSet;

use crate::{Tags, TimeOfDay, TimeOfDayError};

/// How densely a visitor wants to pack the day.
///
/// Reserved for future weighting; the sequencer does not read it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pace {
    /// Plenty of slack between stops.
    Relaxed,
    /// The default pace.
    #[default]
    Balanced,
    /// As many stops as fit.
    Efficient,
}

/// Preferences for a single-day itinerary.
///
/// # Examples
/// ```
/// use compass_core::Preferences;
///
/// let prefs = Preferences::try_new("09:00", "18:00")?
///     .with_interests(["history", "art"])
///     .with_must_visit([3]);
/// assert!(prefs.include_lunch);
/// assert!(prefs.is_must_visit(3));
/// # Ok::<(), compass_core::TimeOfDayError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Preferences {
    /// Time the day starts.
    pub start_time: TimeOfDay,
    /// Time after which no further stops are planned.
    pub end_time: TimeOfDay,
    /// Desired pace.
    pub pace: Pace,
    /// Favour outdoor attractions. Reserved; not yet used for ordering.
    pub prioritize_outdoor: bool,
    /// Insert a single lunch break around midday.
    pub include_lunch: bool,
    /// Insert a single coffee break mid-afternoon.
    pub include_coffee_break: bool,
    /// Prefer less crowded places.
    pub avoid_crowds: bool,
    /// Upper bound on walking in kilometres. Reserved; not yet enforced.
    pub max_walking_km: f64,
    /// Interest tags matched against POI tags.
    pub interests: Tags,
    /// Identifiers that must be visited before anything else.
    pub must_visit: BTreeSet<u64>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            start_time: TimeOfDay::from_hm(9, 0).unwrap_or(TimeOfDay::MIDNIGHT),
            end_time: TimeOfDay::from_hm(18, 0).unwrap_or(TimeOfDay::END_OF_DAY),
            pace: Pace::Balanced,
            prioritize_outdoor: true,
            include_lunch: true,
            include_coffee_break: true,
            avoid_crowds: true,
            max_walking_km: 5.0,
            interests: Tags::new(),
            must_visit: BTreeSet::new(),
        }
    }
}

impl Preferences {
    /// Default preferences for the given `HH:MM` day window.
    pub fn try_new(start: &str, end: &str) -> Result<Self, TimeOfDayError> {
        Ok(Self {
            start_time: start.parse()?,
            end_time: end.parse()?,
            ..Self::default()
        })
    }

    /// Replace the interest tags.
    #[must_use]
    pub fn with_interests<I, T>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the must-visit identifiers.
    #[must_use]
    pub fn with_must_visit<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.must_visit = ids.into_iter().collect();
        self
    }

    /// Toggle both break kinds at once.
    #[must_use]
    pub const fn with_breaks(mut self, lunch: bool, coffee: bool) -> Self {
        self.include_lunch = lunch;
        self.include_coffee_break = coffee;
        self
    }

    /// Toggle crowd avoidance.
    #[must_use]
    pub const fn with_avoid_crowds(mut self, avoid: bool) -> Self {
        self.avoid_crowds = avoid;
        self
    }

    /// Whether `id` was pinned as must-visit.
    pub fn is_must_visit(&self, id: u64) -> bool {
        self.must_visit.contains(&id)
    }
}
