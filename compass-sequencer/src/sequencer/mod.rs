//! `GreedySequencer` implementation.

use compass_core::{
    Itinerary, PlanarWalkingEstimator, SequenceError, SequenceRequest, Sequencer, TimeOfDay,
    TravelEstimator,
};

use crate::ordering::order_candidates;
use crate::timeline::Timeline;

/// When and for how long a break may be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakPolicy {
    /// Earliest clock time at which the break may start.
    pub window_start: TimeOfDay,
    /// Latest clock time at which the break may start.
    pub window_end: TimeOfDay,
    /// Length of the break in minutes.
    pub minutes: u32,
}

impl BreakPolicy {
    /// Whether a break may start at `clock`. Both ends are inclusive.
    pub fn admits(&self, clock: TimeOfDay) -> bool {
        (self.window_start..=self.window_end).contains(&clock)
    }

    fn at(start_hour: u16, end_hour: u16, minutes: u32) -> Self {
        let (window_start, window_end) = match (
            TimeOfDay::from_hm(start_hour, 0),
            TimeOfDay::from_hm(end_hour, 0),
        ) {
            (Ok(start), Ok(end)) => (start, end),
            _ => (TimeOfDay::MIDNIGHT, TimeOfDay::MIDNIGHT),
        };
        Self {
            window_start,
            window_end,
            minutes,
        }
    }
}

/// Configuration for [`GreedySequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerConfig {
    /// Lunch window and length.
    pub lunch: BreakPolicy,
    /// Coffee window and length.
    pub coffee: BreakPolicy,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            lunch: BreakPolicy::at(12, 14, 60),
            coffee: BreakPolicy::at(15, 17, 30),
        }
    }
}

/// Heuristic sequencer producing a single-day itinerary.
///
/// The sequencer is generic over the travel estimator so callers can swap
/// the flat-grid walking model for something closer to real streets.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use compass_core::{
///     OpeningHours, PointOfInterest, Preferences, SequenceRequest, Sequencer, WeatherState,
/// };
/// use compass_sequencer::GreedySequencer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let hours = OpeningHours::parse("09:00", "17:00")?;
/// let request = SequenceRequest {
///     candidates: vec![
///         PointOfInterest::new(1, "Hagia Sophia", Coord { x: 28.9802, y: 41.0086 })
///             .with_visit_minutes(120)
///             .with_opening_hours(hours),
///     ],
///     preferences: Preferences::try_new("09:00", "18:00")?,
///     weather: WeatherState::default(),
/// };
///
/// let itinerary = GreedySequencer::new().sequence(&request)?;
/// let first = &itinerary.stops[0];
/// assert_eq!(first.arrival.to_string(), "09:00");
/// assert_eq!(first.departure.to_string(), "11:00");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GreedySequencer<T = PlanarWalkingEstimator>
where
    T: TravelEstimator,
{
    estimator: T,
    config: SequencerConfig,
}

impl GreedySequencer {
    /// Construct a sequencer walking at the default pace.
    pub fn new() -> Self {
        Self::with_estimator(PlanarWalkingEstimator::default(), SequencerConfig::default())
    }
}

impl Default for GreedySequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GreedySequencer<T>
where
    T: TravelEstimator,
{
    /// Construct a sequencer with an explicit estimator and configuration.
    pub const fn with_estimator(estimator: T, config: SequencerConfig) -> Self {
        Self { estimator, config }
    }

    pub(crate) fn timeline<'a>(&'a self, request: &'a SequenceRequest) -> Timeline<'a, T> {
        Timeline::new(&self.estimator, &self.config, &request.preferences)
    }
}

impl<T> Sequencer for GreedySequencer<T>
where
    T: TravelEstimator,
{
    fn sequence(&self, request: &SequenceRequest) -> Result<Itinerary, SequenceError> {
        request.validate()?;
        if request.candidates.is_empty() {
            return Ok(Itinerary {
                weather_adapted: request.weather.is_adverse(),
                crowd_optimized: request.preferences.avoid_crowds,
                ..Itinerary::empty()
            });
        }

        let ordered = order_candidates(
            &request.candidates,
            &request.preferences,
            &request.weather,
        );
        let walk = self.timeline(request).walk(&ordered);
        log::debug!(
            "sequenced {} of {} candidates into {} stops",
            walk.visit_count(),
            request.candidates.len(),
            walk.stops.len()
        );

        Ok(walk.into_itinerary(
            request.weather.is_adverse(),
            request.preferences.avoid_crowds,
        ))
    }
}

#[cfg(test)]
mod tests;
