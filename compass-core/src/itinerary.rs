//! Time-annotated day plans.
//!
//! An [`Itinerary`] is the ordered output of a sequencer: visits to points of
//! interest interleaved with at most one lunch and one coffee break.

use std::time::Duration;

use geo::Coord;

use crate::{PointOfInterest, TimeOfDay};

/// Kind of pause inserted between visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BreakKind {
    /// A meal around midday.
    Lunch,
    /// A short mid-afternoon coffee.
    Coffee,
}

impl BreakKind {
    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lunch => "Lunch break",
            Self::Coffee => "Coffee break",
        }
    }
}

/// What happens at a stop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum StopKind {
    /// Time spent at a point of interest.
    Visit {
        /// The visited place.
        poi: PointOfInterest,
    },
    /// A pause taken where the previous visit ended.
    Break {
        /// Lunch or coffee.
        kind: BreakKind,
        /// Coordinate shared with the preceding visit.
        location: Coord<f64>,
    },
}

/// One entry in an itinerary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryStop {
    /// Visit or break.
    pub kind: StopKind,
    /// Time the stop begins.
    pub arrival: TimeOfDay,
    /// Time the stop ends; never before `arrival`.
    pub departure: TimeOfDay,
    /// Optional free-text annotation.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub note: Option<String>,
}

impl ItineraryStop {
    /// A visit to `poi`.
    pub const fn visit(poi: PointOfInterest, arrival: TimeOfDay, departure: TimeOfDay) -> Self {
        Self {
            kind: StopKind::Visit { poi },
            arrival,
            departure,
            note: None,
        }
    }

    /// A break at `location`.
    pub const fn pause(
        kind: BreakKind,
        location: Coord<f64>,
        arrival: TimeOfDay,
        departure: TimeOfDay,
    ) -> Self {
        Self {
            kind: StopKind::Break { kind, location },
            arrival,
            departure,
            note: None,
        }
    }

    /// Attach a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The visited place, or `None` for breaks.
    pub const fn poi(&self) -> Option<&PointOfInterest> {
        match &self.kind {
            StopKind::Visit { poi } => Some(poi),
            StopKind::Break { .. } => None,
        }
    }

    /// The break kind, or `None` for visits.
    pub const fn break_kind(&self) -> Option<BreakKind> {
        match self.kind {
            StopKind::Break { kind, .. } => Some(kind),
            StopKind::Visit { .. } => None,
        }
    }

    /// Coordinate of the stop.
    pub const fn location(&self) -> Coord<f64> {
        match &self.kind {
            StopKind::Visit { poi } => poi.location,
            StopKind::Break { location, .. } => *location,
        }
    }

    /// Minutes spent at the stop.
    pub const fn dwell_minutes(&self) -> u16 {
        self.departure.minutes_since(self.arrival)
    }
}

/// An ordered, time-annotated plan for a single day.
///
/// # Examples
/// ```
/// use compass_core::Itinerary;
///
/// let itinerary = Itinerary::empty();
/// assert!(itinerary.stops.is_empty());
/// assert_eq!(itinerary.total_duration.as_secs(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Stops in chronological order.
    pub stops: Vec<ItineraryStop>,
    /// Walking distance in kilometres, rounded to one decimal place.
    pub total_distance_km: f64,
    /// Time from the first arrival to the last departure.
    pub total_duration: Duration,
    /// The plan accounts for non-sunny weather.
    pub weather_adapted: bool,
    /// The plan was ordered to avoid crowds.
    pub crowd_optimized: bool,
}

impl Itinerary {
    /// An itinerary with no stops.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Iterate over visited places in order, skipping breaks.
    pub fn visits(&self) -> impl Iterator<Item = &PointOfInterest> {
        self.stops.iter().filter_map(ItineraryStop::poi)
    }

    /// Number of breaks of `kind`.
    pub fn break_count(&self, kind: BreakKind) -> usize {
        self.stops
            .iter()
            .filter(|stop| stop.break_kind() == Some(kind))
            .count()
    }

    /// Elapsed time between the first arrival and the last departure.
    pub fn span(stops: &[ItineraryStop]) -> Duration {
        match (stops.first(), stops.last()) {
            (Some(first), Some(last)) => {
                Duration::from_secs(u64::from(last.departure.minutes_since(first.arrival)) * 60)
            }
            _ => Duration::ZERO,
        }
    }
}
