//! Core domain types for the Compass itinerary engine.
//!
//! The crate defines the vocabulary shared by sequencers and their callers:
//! times of day, points of interest, visitor preferences, weather, and the
//! resulting [`Itinerary`]. It also declares the seams an engine is built
//! from: [`Sequencer`], [`TravelEstimator`] and [`PoiCatalogue`].
//!
//! Everything here is pure and synchronous; no I/O is performed.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalogue;
pub mod itinerary;
pub mod poi;
pub mod preferences;
pub mod sequencer;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod time;
pub mod travel;
pub mod weather;

pub use catalogue::{MemoryCatalogue, PoiCatalogue};
pub use itinerary::{BreakKind, Itinerary, ItineraryStop, StopKind};
pub use poi::{CrowdLevels, MAX_WEATHER_SENSITIVITY, OpeningHours, PointOfInterest, Tags};
pub use preferences::{Pace, Preferences};
pub use sequencer::{LocationDataIssue, SequenceError, SequenceRequest, Sequencer};
pub use time::{DayPart, TimeOfDay, TimeOfDayError};
pub use travel::{Leg, PlanarWalkingEstimator, TravelEstimator};
pub use weather::{WeatherCondition, WeatherState};
