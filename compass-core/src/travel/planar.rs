//! Flat-grid walking estimate.

use geo::Coord;

use super::estimator::{Leg, TravelEstimator};

/// Walks in a straight line over a flat grid of degrees.
///
/// Distance is the Euclidean length of the coordinate difference scaled by
/// `km_per_degree`; time is `minutes_per_km` per kilometre, rounded.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use compass_core::{PlanarWalkingEstimator, TravelEstimator};
///
/// let leg = PlanarWalkingEstimator::default().leg(
///     Coord { x: 28.9802, y: 41.0086 },
///     Coord { x: 28.9802, y: 41.0186 },
/// );
/// assert_eq!(leg.minutes, 17);
/// assert!((leg.distance_km - 1.11).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarWalkingEstimator {
    /// Kilometres per degree of latitude or longitude.
    pub km_per_degree: f64,
    /// Walking pace in minutes per kilometre.
    pub minutes_per_km: f64,
}

impl PlanarWalkingEstimator {
    /// Rough length of one degree at the equator.
    pub const KM_PER_DEGREE: f64 = 111.0;
    /// Leisurely sightseeing pace.
    pub const MINUTES_PER_KM: f64 = 15.0;

    /// Construct an estimator with an explicit pace.
    pub const fn with_pace(minutes_per_km: f64) -> Self {
        Self {
            km_per_degree: Self::KM_PER_DEGREE,
            minutes_per_km,
        }
    }
}

impl Default for PlanarWalkingEstimator {
    fn default() -> Self {
        Self::with_pace(Self::MINUTES_PER_KM)
    }
}

impl TravelEstimator for PlanarWalkingEstimator {
    #[expect(
        clippy::float_arithmetic,
        reason = "planar distance is floating-point geometry"
    )]
    fn leg(&self, from: Coord<f64>, to: Coord<f64>) -> Leg {
        let delta = to - from;
        let distance_km = delta.x.hypot(delta.y) * self.km_per_degree;
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Leg::ZERO;
        }
        Leg {
            distance_km,
            minutes: whole_minutes(distance_km * self.minutes_per_km),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped into the u32 range first"
)]
fn whole_minutes(raw: f64) -> u32 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(u32::MAX)) as u32
}
