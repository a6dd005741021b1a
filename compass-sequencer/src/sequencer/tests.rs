//! Tests for the `GreedySequencer`.

use super::*;
use compass_core::test_support::{FixedLegEstimator, open_all_day, poi, time};
use compass_core::{
    BreakKind, LocationDataIssue, OpeningHours, PointOfInterest, Preferences, WeatherCondition,
    WeatherState,
};
use geo::Coord;
use rstest::rstest;
use std::time::Duration;

fn request(candidates: Vec<PointOfInterest>, preferences: Preferences) -> SequenceRequest {
    SequenceRequest {
        candidates,
        preferences,
        weather: WeatherState::default(),
    }
}

fn day(start: &str, end: &str) -> Preferences {
    Preferences::try_new(start, end)
        .expect("valid day window")
        .with_breaks(false, false)
}

#[rstest]
fn two_nearby_places_are_timed_back_to_back() {
    let first = poi(1, 41.0, 28.0, ("09:00", "17:00"), 120).with_rating(4.8);
    let second = poi(2, 41.01, 28.0, ("08:30", "18:30"), 60).with_rating(4.5);
    let itinerary = GreedySequencer::new()
        .sequence(&request(vec![first, second], day("09:00", "18:00")))
        .expect("sequence should succeed");

    let times: Vec<(String, String)> = itinerary
        .stops
        .iter()
        .map(|stop| (stop.arrival.to_string(), stop.departure.to_string()))
        .collect();
    assert_eq!(
        times,
        vec![
            ("09:00".to_owned(), "11:00".to_owned()),
            ("11:17".to_owned(), "12:17".to_owned()),
        ]
    );
    assert!((itinerary.total_distance_km - 1.1).abs() < 1e-9);
    assert_eq!(itinerary.total_duration, Duration::from_secs(197 * 60));
    let note = itinerary.stops.get(1).and_then(|stop| stop.note.as_deref());
    assert_eq!(note, Some("17 min walk from previous stop"));
}

#[rstest]
fn arrival_is_clamped_to_opening_time() {
    let early = open_all_day(1, 41.0, 28.0, 30).with_rating(5.0);
    let late = poi(2, 41.01, 28.0, ("10:00", "17:00"), 30).with_rating(4.0);
    let sequencer =
        GreedySequencer::with_estimator(FixedLegEstimator { minutes: 10 }, SequencerConfig::default());
    let itinerary = sequencer
        .sequence(&request(vec![early, late], day("09:00", "18:00")))
        .expect("sequence should succeed");
    let second = itinerary.stops.get(1).expect("second stop");
    assert_eq!(second.arrival, time("10:00"));
    assert_eq!(second.departure, time("10:30"));
}

#[rstest]
fn lunch_follows_a_visit_ending_at_half_past_twelve() {
    let pois: Vec<_> = (1..=3)
        .map(|id| open_all_day(id, 41.0, 28.0, 90))
        .collect();
    let preferences = Preferences::try_new("11:00", "20:00")
        .expect("valid day window")
        .with_breaks(true, false);
    let itinerary = GreedySequencer::new()
        .sequence(&request(pois, preferences))
        .expect("sequence should succeed");

    let lunch = itinerary.stops.get(1).expect("second stop");
    assert_eq!(lunch.break_kind(), Some(BreakKind::Lunch));
    assert_eq!((lunch.arrival, lunch.departure), (time("12:30"), time("13:30")));
    assert_eq!(lunch.note.as_deref(), Some("Lunch break"));
    assert_eq!(itinerary.break_count(BreakKind::Lunch), 1);
}

#[rstest]
fn coffee_break_follows_lunch_on_a_long_day() {
    let pois: Vec<_> = (1..=4)
        .map(|id| open_all_day(id, 41.0, 28.0, 120))
        .collect();
    let preferences = Preferences::try_new("10:00", "21:00").expect("valid day window");
    let itinerary = GreedySequencer::new()
        .sequence(&request(pois, preferences))
        .expect("sequence should succeed");
    assert_eq!(itinerary.break_count(BreakKind::Lunch), 1);
    assert_eq!(itinerary.break_count(BreakKind::Coffee), 1);
    let kinds: Vec<_> = itinerary.stops.iter().map(|s| s.break_kind()).collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(BreakKind::Lunch),
            None,
            Some(BreakKind::Coffee),
            None,
            None,
        ]
    );
}

#[rstest]
fn empty_candidates_yield_empty_itinerary() {
    let itinerary = GreedySequencer::new()
        .sequence(&request(Vec::new(), day("09:00", "18:00")))
        .expect("empty input is valid");
    assert!(itinerary.stops.is_empty());
    assert!(itinerary.total_distance_km.abs() < f64::EPSILON);
    assert!(!itinerary.weather_adapted);
    assert_eq!(itinerary.total_duration, Duration::ZERO);
}

#[rstest]
fn empty_rainy_request_still_reports_its_flags() {
    let req = SequenceRequest {
        candidates: Vec::new(),
        preferences: day("09:00", "18:00").with_avoid_crowds(true),
        weather: WeatherState::new(WeatherCondition::Rainy, 12.0),
    };
    let itinerary = GreedySequencer::new().sequence(&req).expect("empty input is valid");
    assert!(itinerary.stops.is_empty());
    assert_eq!(itinerary.total_duration, Duration::ZERO);
    assert!(itinerary.weather_adapted);
    assert!(itinerary.crowd_optimized);
}

#[rstest]
fn must_visit_places_lead_the_day() {
    let pois = vec![
        open_all_day(1, 41.0, 28.0, 30).with_rating(5.0),
        open_all_day(2, 41.0, 28.0, 30).with_rating(1.0),
        open_all_day(3, 41.0, 28.0, 30).with_rating(3.0),
    ];
    let preferences = day("09:00", "18:00").with_must_visit([2]);
    let itinerary = GreedySequencer::new()
        .sequence(&request(pois, preferences))
        .expect("sequence should succeed");
    let ids: Vec<u64> = itinerary.visits().map(|poi| poi.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[rstest]
#[case(WeatherCondition::Sunny, false)]
#[case(WeatherCondition::Cloudy, true)]
#[case(WeatherCondition::Rainy, true)]
fn weather_flag_tracks_conditions(#[case] condition: WeatherCondition, #[case] adapted: bool) {
    let mut req = request(vec![open_all_day(1, 41.0, 28.0, 30)], day("09:00", "18:00"));
    req.weather = WeatherState::new(condition, 15.0);
    let itinerary = GreedySequencer::new().sequence(&req).expect("sequence");
    assert_eq!(itinerary.weather_adapted, adapted);
}

#[rstest]
fn crowd_flag_mirrors_preference() {
    let req = request(
        vec![open_all_day(1, 41.0, 28.0, 30)],
        day("09:00", "18:00").with_avoid_crowds(true),
    );
    let itinerary = GreedySequencer::new().sequence(&req).expect("sequence");
    assert!(itinerary.crowd_optimized);
}

#[rstest]
fn missing_opening_hours_are_rejected() {
    let bare = PointOfInterest::new(9, "Unknown", Coord { x: 28.0, y: 41.0 });
    let err = GreedySequencer::new()
        .sequence(&request(vec![open_all_day(1, 41.0, 28.0, 30), bare], day("09:00", "18:00")))
        .expect_err("incomplete data");
    assert_eq!(
        err,
        SequenceError::IncompleteLocationData {
            poi_id: 9,
            issue: LocationDataIssue::MissingOpeningHours,
        }
    );
}

#[rstest]
fn overnight_venue_is_dropped_not_rejected() {
    let club = poi(5, 41.01, 28.0, ("22:00", "02:00"), 120).with_rating(5.0);
    let museum = open_all_day(6, 41.0, 28.0, 60).with_rating(4.0);
    let itinerary = GreedySequencer::new()
        .sequence(&request(vec![club, museum], day("09:00", "18:00")))
        .expect("overnight hours are not an error");
    let ids: Vec<u64> = itinerary.visits().map(|poi| poi.id).collect();
    assert_eq!(ids, vec![6]);
}

#[rstest]
fn non_finite_coordinates_are_rejected() {
    let broken = open_all_day(4, f64::NAN, 28.0, 30);
    let err = GreedySequencer::new()
        .sequence(&request(vec![broken], day("09:00", "18:00")))
        .expect_err("non-finite coordinate");
    assert!(matches!(
        err,
        SequenceError::IncompleteLocationData {
            poi_id: 4,
            issue: LocationDataIssue::NonFiniteCoordinate,
        }
    ));
}

#[rstest]
fn identical_requests_give_identical_plans() {
    let req = request(
        compass_core::test_support::istanbul_sights(),
        Preferences::default(),
    );
    let sequencer = GreedySequencer::new();
    let first = sequencer.sequence(&req).expect("sequence");
    let second = sequencer.sequence(&req).expect("sequence");
    assert_eq!(first, second);
}

#[rstest]
fn custom_lunch_window_is_honoured() {
    let config = SequencerConfig {
        lunch: BreakPolicy {
            window_start: time("11:00"),
            window_end: time("11:30"),
            minutes: 45,
        },
        ..SequencerConfig::default()
    };
    let pois: Vec<_> = (1..=2)
        .map(|id| open_all_day(id, 41.0, 28.0, 60))
        .collect();
    let preferences = Preferences::try_new("10:00", "18:00")
        .expect("valid day window")
        .with_breaks(true, false);
    let sequencer = GreedySequencer::with_estimator(FixedLegEstimator::default(), config);
    let itinerary = sequencer
        .sequence(&request(pois, preferences))
        .expect("sequence");
    let lunch = itinerary.stops.get(1).expect("lunch stop");
    assert_eq!((lunch.arrival, lunch.departure), (time("11:00"), time("11:45")));
}

#[rstest]
fn break_window_is_inclusive() {
    let policy = SequencerConfig::default().lunch;
    assert!(policy.admits(time("12:00")));
    assert!(policy.admits(time("14:00")));
    assert!(!policy.admits(time("14:01")));
    assert_eq!(
        OpeningHours::new(policy.window_start, policy.window_end),
        OpeningHours::parse("12:00", "14:00").expect("valid")
    );
}

#[rstest]
fn default_breaks_cover_lunch_and_coffee_hours() {
    let config = SequencerConfig::default();
    assert_eq!(
        config.lunch,
        BreakPolicy {
            window_start: time("12:00"),
            window_end: time("14:00"),
            minutes: 60,
        }
    );
    assert_eq!(
        config.coffee,
        BreakPolicy {
            window_start: time("15:00"),
            window_end: time("17:00"),
            minutes: 30,
        }
    );
}
