//! Shared helpers for the sequencer's integration tests.

use std::collections::HashSet;

use compass_core::test_support::FixedLegEstimator;
use compass_core::{BreakKind, Itinerary, SequenceRequest};

use compass_sequencer::{GreedySequencer, SequencerConfig};

/// A sequencer charging `minutes` for every leg between distinct places.
#[must_use]
pub fn fixed_leg_sequencer(minutes: u32) -> GreedySequencer<FixedLegEstimator> {
    GreedySequencer::with_estimator(FixedLegEstimator { minutes }, SequencerConfig::default())
}

/// Check the structural guarantees every sequenced itinerary must hold.
///
/// Returns a description of the first violation so property tests can report
/// it through `prop_assert!` instead of panicking.
///
/// # Errors
///
/// Returns `Err` naming the broken guarantee.
pub fn check_invariants(request: &SequenceRequest, itinerary: &Itinerary) -> Result<(), String> {
    let preferences = &request.preferences;
    if let Some(first) = itinerary.stops.first()
        && first.arrival < preferences.start_time
    {
        return Err(format!(
            "first arrival {} precedes start {}",
            first.arrival, preferences.start_time
        ));
    }

    for pair in itinerary.stops.windows(2) {
        if let [earlier, later] = pair
            && later.arrival < earlier.departure
        {
            return Err(format!(
                "stop at {} overlaps previous departure {}",
                later.arrival, earlier.departure
            ));
        }
    }

    let mut seen = HashSet::new();
    let mut must_visit_phase = true;
    for stop in &itinerary.stops {
        if stop.departure < stop.arrival {
            return Err(format!(
                "departure {} precedes arrival {}",
                stop.departure, stop.arrival
            ));
        }
        let Some(poi) = stop.poi() else {
            continue;
        };
        if !seen.insert(poi.id) {
            return Err(format!("POI {} visited twice", poi.id));
        }
        if let Some(hours) = poi.opening_hours
            && (stop.arrival < hours.open || stop.departure > hours.close)
        {
            return Err(format!(
                "POI {} visited {}-{} outside {}-{}",
                poi.id, stop.arrival, stop.departure, hours.open, hours.close
            ));
        }
        let must = preferences.is_must_visit(poi.id);
        if must && !must_visit_phase {
            return Err(format!("must-visit POI {} follows an optional place", poi.id));
        }
        must_visit_phase &= must;
    }

    for (kind, enabled) in [
        (BreakKind::Lunch, preferences.include_lunch),
        (BreakKind::Coffee, preferences.include_coffee_break),
    ] {
        let count = itinerary.break_count(kind);
        let allowed = usize::from(enabled);
        if count > allowed {
            return Err(format!("{count} {} stops, at most {allowed} allowed", kind.label()));
        }
    }
    Ok(())
}
