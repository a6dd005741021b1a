//! Facade crate for the Compass itinerary engine.
//!
//! This crate re-exports the core domain types and, behind the `sequencer`
//! feature, the greedy day-plan sequencer.

#![forbid(unsafe_code)]

pub use compass_core::{
    BreakKind, CrowdLevels, DayPart, Itinerary, ItineraryStop, Leg, LocationDataIssue,
    MemoryCatalogue, OpeningHours, Pace, PlanarWalkingEstimator, PoiCatalogue, PointOfInterest,
    Preferences, SequenceError, SequenceRequest, Sequencer, StopKind, TimeOfDay, TimeOfDayError,
    TravelEstimator, WeatherCondition, WeatherState,
};

#[cfg(feature = "sequencer")]
pub use compass_sequencer::{
    Alternative, AlternativeFocus, BreakPolicy, GreedySequencer, PlanSet, SequencerConfig,
};
