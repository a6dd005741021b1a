//! Travel estimator trait and the leg it produces.

use geo::Coord;

/// Distance and walking time between two stops.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Leg {
    /// Unrounded distance in kilometres.
    pub distance_km: f64,
    /// Travel time rounded to the nearest minute.
    pub minutes: u32,
}

impl Leg {
    /// A leg of zero length.
    pub const ZERO: Self = Self {
        distance_km: 0.0,
        minutes: 0,
    };
}

/// Estimate the leg between two coordinates.
///
/// Implementations must be deterministic and infallible: identical inputs
/// yield identical legs, and coincident points yield [`Leg::ZERO`].
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use compass_core::{Leg, TravelEstimator};
///
/// struct Teleport;
///
/// impl TravelEstimator for Teleport {
///     fn leg(&self, _from: Coord<f64>, _to: Coord<f64>) -> Leg {
///         Leg::ZERO
///     }
/// }
///
/// let leg = Teleport.leg(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
/// assert_eq!(leg.minutes, 0);
/// ```
pub trait TravelEstimator: Send + Sync {
    /// Return the leg from `from` to `to`.
    fn leg(&self, from: Coord<f64>, to: Coord<f64>) -> Leg;
}
