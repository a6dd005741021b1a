//! Fixtures shared by unit, behaviour and property tests.

use geo::Coord;

use crate::{CrowdLevels, Leg, OpeningHours, PointOfInterest, TimeOfDay, TravelEstimator};

/// Parse an `HH:MM` literal.
///
/// # Panics
///
/// Panics when `input` is not a valid time; fixtures are hard-coded.
#[expect(clippy::expect_used, reason = "fixtures use literal times")]
pub fn time(input: &str) -> TimeOfDay {
    input.parse().expect("fixture time should parse")
}

/// A place at (`lat`, `lng`) with the given opening window and visit length.
pub fn poi(id: u64, lat: f64, lng: f64, hours: (&str, &str), visit_minutes: u32) -> PointOfInterest {
    PointOfInterest::new(id, format!("poi-{id}"), Coord { x: lng, y: lat })
        .with_opening_hours(OpeningHours::new(time(hours.0), time(hours.1)))
        .with_visit_minutes(visit_minutes)
}

/// A place open all day at (`lat`, `lng`).
pub fn open_all_day(id: u64, lat: f64, lng: f64, visit_minutes: u32) -> PointOfInterest {
    PointOfInterest::new(id, format!("poi-{id}"), Coord { x: lng, y: lat })
        .with_opening_hours(OpeningHours::ALL_DAY)
        .with_visit_minutes(visit_minutes)
}

/// Ten sights around Sultanahmet, Istanbul, used as a realistic catalogue.
pub fn istanbul_sights() -> Vec<PointOfInterest> {
    let sight = |id, name: &str, lat, lng, category: &str, rating| {
        PointOfInterest::new(id, name, Coord { x: lng, y: lat })
            .with_category(category)
            .with_rating(rating)
    };
    vec![
        sight(1, "Hagia Sophia", 41.0086, 28.9802, "historical", 4.8)
            .with_visit_minutes(120)
            .with_opening_hours(OpeningHours::new(time("09:00"), time("17:00")))
            .with_crowd(CrowdLevels::new(7, 9, 5))
            .with_weather_sensitivity(3)
            .with_tags(["history", "architecture", "religion"]),
        sight(2, "Blue Mosque", 41.0054, 28.9768, "historical", 4.7)
            .with_visit_minutes(60)
            .with_opening_hours(OpeningHours::new(time("08:30"), time("18:30")))
            .with_crowd(CrowdLevels::new(6, 8, 4))
            .with_weather_sensitivity(3)
            .with_tags(["history", "architecture", "religion"]),
        sight(3, "Topkapi Palace", 41.0115, 28.9833, "historical", 4.6)
            .with_visit_minutes(180)
            .with_opening_hours(OpeningHours::new(time("09:00"), time("16:45")))
            .with_crowd(CrowdLevels::new(5, 8, 3))
            .with_weather_sensitivity(4)
            .with_tags(["history", "architecture", "art"]),
        sight(4, "Grand Bazaar", 41.0108, 28.9682, "shopping", 4.4)
            .with_visit_minutes(120)
            .with_opening_hours(OpeningHours::new(time("08:30"), time("19:00")))
            .with_crowd(CrowdLevels::new(6, 9, 7))
            .with_weather_sensitivity(1)
            .with_tags(["shopping", "local", "food"]),
        sight(5, "Basilica Cistern", 41.0084, 28.9779, "historical", 4.5)
            .with_visit_minutes(60)
            .with_opening_hours(OpeningHours::new(time("09:00"), time("17:30")))
            .with_crowd(CrowdLevels::new(4, 7, 5))
            .with_weather_sensitivity(0)
            .with_tags(["history", "architecture"]),
        sight(6, "Galata Tower", 41.0256, 28.9741, "landmark", 4.5)
            .with_visit_minutes(60)
            .with_opening_hours(OpeningHours::new(time("09:00"), time("20:00")))
            .with_crowd(CrowdLevels::new(5, 8, 9))
            .with_weather_sensitivity(7)
            .with_tags(["architecture", "photography", "views"]),
        sight(7, "Spice Bazaar", 41.0165, 28.9704, "shopping", 4.6)
            .with_visit_minutes(60)
            .with_opening_hours(OpeningHours::new(time("08:00"), time("19:00")))
            .with_crowd(CrowdLevels::new(7, 9, 6))
            .with_weather_sensitivity(1)
            .with_tags(["food", "shopping", "local"]),
        sight(8, "Dolmabahce Palace", 41.0391, 29.0008, "historical", 4.7)
            .with_visit_minutes(150)
            .with_opening_hours(OpeningHours::new(time("09:00"), time("16:00")))
            .with_crowd(CrowdLevels::new(6, 7, 3))
            .with_weather_sensitivity(4)
            .with_tags(["history", "architecture", "art"]),
        sight(9, "Bosphorus Cruise", 41.0211, 29.0011, "activity", 4.8)
            .with_visit_minutes(120)
            .with_opening_hours(OpeningHours::new(time("10:00"), time("18:00")))
            .with_crowd(CrowdLevels::new(5, 7, 8))
            .with_weather_sensitivity(9)
            .with_tags(["nature", "photography", "views"]),
        sight(10, "Istanbul Archaeological Museums", 41.0116, 28.9811, "museum", 4.5)
            .with_visit_minutes(120)
            .with_opening_hours(OpeningHours::new(time("09:00"), time("17:00")))
            .with_crowd(CrowdLevels::new(4, 6, 3))
            .with_weather_sensitivity(1)
            .with_tags(["history", "art", "architecture"]),
    ]
}

/// Deterministic estimator charging a fixed number of minutes per leg.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedLegEstimator {
    /// Minutes charged for every non-zero leg.
    pub minutes: u32,
}

impl TravelEstimator for FixedLegEstimator {
    fn leg(&self, from: Coord<f64>, to: Coord<f64>) -> Leg {
        if from == to {
            return Leg::ZERO;
        }
        Leg {
            distance_km: 1.0,
            minutes: self.minutes,
        }
    }
}
