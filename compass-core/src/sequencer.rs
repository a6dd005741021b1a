//! The sequencing contract: request, errors and the [`Sequencer`] trait.

use thiserror::Error;

use crate::{Itinerary, PointOfInterest, Preferences, TimeOfDayError, WeatherState};

/// Inputs for a single sequencing call.
///
/// # Examples
/// ```rust
/// use compass_core::{Preferences, SequenceRequest, WeatherState};
///
/// let request = SequenceRequest {
///     candidates: Vec::new(),
///     preferences: Preferences::default(),
///     weather: WeatherState::default(),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceRequest {
    /// Places selected by the visitor, in selection order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub candidates: Vec<PointOfInterest>,
    /// Day window, breaks and ordering preferences.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: Preferences,
    /// Weather for the day.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weather: WeatherState,
}

/// What is wrong with a candidate's location data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationDataIssue {
    /// No opening window was supplied.
    MissingOpeningHours,
    /// A coordinate component is NaN or infinite.
    NonFiniteCoordinate,
}

impl std::fmt::Display for LocationDataIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::MissingOpeningHours => "missing opening hours",
            Self::NonFiniteCoordinate => "coordinate is not finite",
        })
    }
}

/// Errors returned by [`Sequencer::sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A time-of-day string could not be parsed.
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(#[from] TimeOfDayError),
    /// A candidate lacks data needed for scheduling.
    #[error("point of interest {poi_id} cannot be scheduled: {issue}")]
    IncompleteLocationData {
        /// Identifier of the offending candidate.
        poi_id: u64,
        /// The missing or malformed field.
        issue: LocationDataIssue,
    },
}

impl SequenceRequest {
    /// Check that every candidate carries usable scheduling data.
    ///
    /// Fails on the first offending candidate in input order.
    pub fn validate(&self) -> Result<(), SequenceError> {
        self.candidates.iter().try_for_each(validate_candidate)
    }
}

fn validate_candidate(poi: &PointOfInterest) -> Result<(), SequenceError> {
    let issue = if !(poi.location.x.is_finite() && poi.location.y.is_finite()) {
        Some(LocationDataIssue::NonFiniteCoordinate)
    } else if poi.opening_hours.is_none() {
        Some(LocationDataIssue::MissingOpeningHours)
    } else {
        None
    };
    issue.map_or(Ok(()), |found| {
        Err(SequenceError::IncompleteLocationData {
            poi_id: poi.id,
            issue: found,
        })
    })
}

/// Order candidate places into a timed day plan.
///
/// Implementations must be pure and deterministic: no I/O, no clock reads,
/// and identical requests yield identical itineraries. Empty candidate lists
/// produce an itinerary with no stops rather than an error.
pub trait Sequencer: Send + Sync {
    /// Sequence a request into an itinerary.
    fn sequence(&self, request: &SequenceRequest) -> Result<Itinerary, SequenceError>;
}
