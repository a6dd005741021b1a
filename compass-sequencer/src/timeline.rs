//! Running-clock walk over an ordered candidate list.
//!
//! The walk assigns arrival and departure times, waits for opening, truncates
//! at closing, inserts breaks, and stops once the clock passes the end of the
//! visitor's day.

use compass_core::{
    BreakKind, Itinerary, ItineraryStop, Leg, PointOfInterest, Preferences, TimeOfDay,
    TravelEstimator,
};
use geo::Coord;

use crate::sequencer::{BreakPolicy, SequencerConfig};

/// Stops and raw distance produced by a walk.
#[derive(Debug, Default)]
pub(crate) struct Walk {
    pub(crate) stops: Vec<ItineraryStop>,
    pub(crate) distance_km: f64,
}

impl Walk {
    pub(crate) fn visit_count(&self) -> usize {
        self.stops.iter().filter(|stop| stop.poi().is_some()).count()
    }

    pub(crate) fn into_itinerary(self, weather_adapted: bool, crowd_optimized: bool) -> Itinerary {
        Itinerary {
            total_duration: Itinerary::span(&self.stops),
            total_distance_km: round_to_tenth(self.distance_km),
            stops: self.stops,
            weather_adapted,
            crowd_optimized,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "distance is reported to one decimal place"
)]
fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

/// Breaks still allowed in this walk. Scoped to one call.
#[derive(Debug, Clone, Copy)]
struct PendingBreaks {
    lunch: bool,
    coffee: bool,
}

impl PendingBreaks {
    /// Claim the break if still pending.
    fn take(&mut self, kind: BreakKind) -> bool {
        let slot = match kind {
            BreakKind::Lunch => &mut self.lunch,
            BreakKind::Coffee => &mut self.coffee,
        };
        std::mem::replace(slot, false)
    }
}

pub(crate) struct Timeline<'a, T: TravelEstimator> {
    estimator: &'a T,
    config: &'a SequencerConfig,
    preferences: &'a Preferences,
}

impl<'a, T: TravelEstimator> Timeline<'a, T> {
    pub(crate) const fn new(
        estimator: &'a T,
        config: &'a SequencerConfig,
        preferences: &'a Preferences,
    ) -> Self {
        Self {
            estimator,
            config,
            preferences,
        }
    }

    /// Schedule `ordered` in sequence from the start of the day.
    #[expect(
        clippy::float_arithmetic,
        reason = "leg distances accumulate in kilometres"
    )]
    pub(crate) fn walk(&self, ordered: &[&PointOfInterest]) -> Walk {
        let mut walk = Walk::default();
        let mut clock = self.preferences.start_time;
        let mut previous: Option<Coord<f64>> = None;
        let mut pending = PendingBreaks {
            lunch: self.preferences.include_lunch,
            coffee: self.preferences.include_coffee_break,
        };
        let last_index = ordered.len().saturating_sub(1);

        for (index, poi) in ordered.iter().enumerate() {
            let Some(hours) = poi.opening_hours else {
                log::warn!("POI {} has no opening hours; skipping", poi.id);
                continue;
            };
            if hours.is_inverted() {
                log::debug!(
                    "POI {} opens at {} and closes at {} the next day; skipping",
                    poi.id,
                    hours.open,
                    hours.close
                );
                continue;
            }
            let leg = previous.map_or(Leg::ZERO, |from| self.estimator.leg(from, poi.location));
            let arrival = clock.add_minutes(leg.minutes).max(hours.open);
            if arrival > hours.close {
                log::debug!(
                    "POI {} closes at {} before arrival at {arrival}; skipping",
                    poi.id,
                    hours.close
                );
                continue;
            }
            let departure = arrival.add_minutes(poi.visit_minutes).min(hours.close);

            let mut stop = ItineraryStop::visit((*poi).clone(), arrival, departure);
            if leg.minutes > 0 {
                stop = stop.with_note(format!("{} min walk from previous stop", leg.minutes));
            }
            walk.stops.push(stop);
            walk.distance_km += leg.distance_km;
            clock = departure;
            previous = Some(poi.location);
            if self.past_end_of_day(clock) {
                break;
            }

            if index < last_index
                && self.insert_breaks(&mut walk, &mut pending, &mut clock, poi.location)
            {
                break;
            }
        }
        walk
    }

    /// Insert any due breaks after a visit.
    ///
    /// Returns `true` when the day ended during a break.
    fn insert_breaks(
        &self,
        walk: &mut Walk,
        pending: &mut PendingBreaks,
        clock: &mut TimeOfDay,
        location: Coord<f64>,
    ) -> bool {
        for (kind, policy) in [
            (BreakKind::Lunch, &self.config.lunch),
            (BreakKind::Coffee, &self.config.coffee),
        ] {
            if !policy.admits(*clock) || !pending.take(kind) {
                continue;
            }
            *clock = push_break(walk, kind, policy, *clock, location);
            if self.past_end_of_day(*clock) {
                return true;
            }
        }
        false
    }

    fn past_end_of_day(&self, clock: TimeOfDay) -> bool {
        let ended = clock > self.preferences.end_time;
        if ended {
            log::debug!(
                "clock {clock} passed end of day {}; ending itinerary",
                self.preferences.end_time
            );
        }
        ended
    }
}

fn push_break(
    walk: &mut Walk,
    kind: BreakKind,
    policy: &BreakPolicy,
    clock: TimeOfDay,
    location: Coord<f64>,
) -> TimeOfDay {
    let departure = clock.add_minutes(policy.minutes);
    walk.stops
        .push(ItineraryStop::pause(kind, location, clock, departure).with_note(kind.label()));
    departure
}
