//! Estimate walking legs between stops.
//!
//! The [`TravelEstimator`] trait abstracts the distance and time needed to get
//! from one coordinate to another. [`PlanarWalkingEstimator`] is the default,
//! treating degrees as a flat grid and walking at a fixed pace.

mod estimator;
mod planar;

pub use estimator::{Leg, TravelEstimator};
pub use planar::PlanarWalkingEstimator;
