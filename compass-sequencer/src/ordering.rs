//! Candidate ordering heuristics.
//!
//! Must-visit places keep their supplied order and go first. Everything else
//! is stable-sorted by a chain of tie-breaks: weather sensitivity when it
//! rains, crowd level when avoiding crowds, interest overlap, then rating.

use std::cmp::Ordering;

use compass_core::{DayPart, PointOfInterest, Preferences, WeatherState};

/// Comparator state fixed for a whole sort.
///
/// The crowd day-part is taken from the start of the day once, before any
/// stop is scheduled, not from each candidate's eventual arrival time.
pub(crate) struct OrderingContext<'a> {
    preferences: &'a Preferences,
    rainy: bool,
    day_part: DayPart,
}

impl<'a> OrderingContext<'a> {
    pub(crate) fn new(preferences: &'a Preferences, weather: &WeatherState) -> Self {
        Self {
            preferences,
            rainy: weather.is_rainy(),
            day_part: preferences.start_time.day_part(),
        }
    }

    pub(crate) fn compare(&self, lhs: &PointOfInterest, rhs: &PointOfInterest) -> Ordering {
        let by_weather = if self.rainy {
            lhs.weather_sensitivity.cmp(&rhs.weather_sensitivity)
        } else {
            Ordering::Equal
        };
        let by_crowd = || {
            if self.preferences.avoid_crowds {
                lhs.crowd
                    .at(self.day_part)
                    .cmp(&rhs.crowd.at(self.day_part))
            } else {
                Ordering::Equal
            }
        };
        let interests = &self.preferences.interests;
        by_weather
            .then_with(by_crowd)
            .then_with(|| {
                rhs.interest_matches(interests)
                    .cmp(&lhs.interest_matches(interests))
            })
            .then_with(|| rhs.rating.total_cmp(&lhs.rating))
    }
}

/// Order candidates for the timeline walk.
pub(crate) fn order_candidates<'p>(
    candidates: &'p [PointOfInterest],
    preferences: &Preferences,
    weather: &WeatherState,
) -> Vec<&'p PointOfInterest> {
    let (mut ordered, mut others): (Vec<&PointOfInterest>, Vec<&PointOfInterest>) = candidates
        .iter()
        .partition(|poi| preferences.is_must_visit(poi.id));

    if !others.is_empty() {
        let context = OrderingContext::new(preferences, weather);
        others.sort_by(|lhs, rhs| context.compare(lhs, rhs));
    }

    ordered.append(&mut others);
    ordered
}

/// Reorder everything between the first and last visit by `key`, ascending.
///
/// Sorting is stable; slices shorter than three are returned unchanged.
pub(crate) fn reorder_interior<T, K, F>(items: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let len = items.len();
    if len < 3 {
        return;
    }
    if let Some(interior) = items.get_mut(1..len - 1) {
        interior.sort_by_key(&mut key);
    }
}
