//! Reordered variants of a sequenced itinerary.
//!
//! A variant keeps the first and last visit of a base plan, reorders the
//! visits in between by one heuristic, and re-times the result through the
//! same timeline walk used for the base plan.

use compass_core::{
    Itinerary, PointOfInterest, SequenceError, SequenceRequest, Sequencer, TimeOfDay,
    TravelEstimator,
};

use crate::GreedySequencer;
use crate::ordering::reorder_interior;

/// Visits a base plan must hold before variants are worth producing.
const MIN_VISITS_FOR_VARIANTS: usize = 4;

/// The heuristic a variant was reordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlternativeFocus {
    /// Sheltered places first; produced only when it rains.
    Weather,
    /// Quietest place for its own arrival time first.
    Crowd,
}

/// A reordered variant of a base itinerary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    /// Heuristic used for the interior visits.
    pub focus: AlternativeFocus,
    /// The re-timed plan.
    pub itinerary: Itinerary,
}

/// A primary plan together with its variants.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanSet {
    /// The sequenced itinerary.
    pub primary: Itinerary,
    /// Zero, one or two reordered variants.
    pub alternatives: Vec<Alternative>,
}

impl<T> GreedySequencer<T>
where
    T: TravelEstimator,
{
    /// Sequence `request` and derive its alternatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use compass_core::SequenceRequest;
    /// use compass_sequencer::GreedySequencer;
    ///
    /// let plans = GreedySequencer::new().plan(&SequenceRequest::default())?;
    /// assert!(plans.primary.stops.is_empty());
    /// assert!(plans.alternatives.is_empty());
    /// # Ok::<(), compass_core::SequenceError>(())
    /// ```
    pub fn plan(&self, request: &SequenceRequest) -> Result<PlanSet, SequenceError> {
        let primary = self.sequence(request)?;
        let alternatives = self.alternatives(request, &primary)?;
        Ok(PlanSet {
            primary,
            alternatives,
        })
    }

    /// Derive reordered variants of `base`, which must have been sequenced
    /// from `request`.
    ///
    /// A weather variant is produced only when it rains; a crowd variant is
    /// always produced. Plans with fewer than four visits have no variants.
    pub fn alternatives(
        &self,
        request: &SequenceRequest,
        base: &Itinerary,
    ) -> Result<Vec<Alternative>, SequenceError> {
        request.validate()?;
        let visits: Vec<(&PointOfInterest, TimeOfDay)> = base
            .stops
            .iter()
            .filter_map(|stop| stop.poi().map(|poi| (poi, stop.arrival)))
            .collect();
        if visits.len() < MIN_VISITS_FOR_VARIANTS {
            return Ok(Vec::new());
        }

        let mut variants = Vec::with_capacity(2);
        if request.weather.is_rainy() {
            let mut ordered = visits.clone();
            reorder_interior(&mut ordered, |(poi, _)| poi.weather_sensitivity);
            let mut itinerary = self.retime(request, &ordered);
            itinerary.weather_adapted = true;
            itinerary.crowd_optimized = base.crowd_optimized;
            variants.push(Alternative {
                focus: AlternativeFocus::Weather,
                itinerary,
            });
        }

        let mut ordered = visits;
        reorder_interior(&mut ordered, |(poi, arrival)| {
            poi.crowd.at(arrival.day_part())
        });
        let mut itinerary = self.retime(request, &ordered);
        itinerary.weather_adapted = base.weather_adapted;
        itinerary.crowd_optimized = true;
        variants.push(Alternative {
            focus: AlternativeFocus::Crowd,
            itinerary,
        });

        Ok(variants)
    }

    fn retime(
        &self,
        request: &SequenceRequest,
        ordered: &[(&PointOfInterest, TimeOfDay)],
    ) -> Itinerary {
        let pois: Vec<&PointOfInterest> = ordered.iter().map(|(poi, _)| *poi).collect();
        self.timeline(request).walk(&pois).into_itinerary(
            request.weather.is_adverse(),
            request.preferences.avoid_crowds,
        )
    }
}
