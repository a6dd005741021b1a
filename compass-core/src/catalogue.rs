//! Read-only sources of points of interest.
//!
//! A [`PoiCatalogue`] resolves the identifiers a visitor selected into full
//! [`PointOfInterest`] records ready for sequencing.

use std::collections::HashMap;

use crate::PointOfInterest;

/// Read-only lookup of points of interest by identifier.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use compass_core::{MemoryCatalogue, PoiCatalogue, PointOfInterest};
///
/// let catalogue = MemoryCatalogue::with_pois([
///     PointOfInterest::new(1, "Hagia Sophia", Coord { x: 28.9802, y: 41.0086 }),
///     PointOfInterest::new(2, "Blue Mosque", Coord { x: 28.9768, y: 41.0054 }),
/// ]);
///
/// let found: Vec<_> = catalogue.pois_by_id(&[2, 99, 1]).into_iter().map(|p| p.id).collect();
/// assert_eq!(found, vec![2, 1]);
/// ```
pub trait PoiCatalogue: Send + Sync {
    /// Return the POIs matching `ids`, in the order requested.
    ///
    /// Unknown identifiers are skipped.
    fn pois_by_id(&self, ids: &[u64]) -> Vec<PointOfInterest>;
}

/// In-memory catalogue keyed by identifier.
///
/// When the same identifier is supplied twice the later record wins.
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalogue {
    pois: HashMap<u64, PointOfInterest>,
}

impl MemoryCatalogue {
    /// Build a catalogue from a collection of points of interest.
    pub fn with_pois<I>(pois: I) -> Self
    where
        I: IntoIterator<Item = PointOfInterest>,
    {
        let mut by_id = HashMap::new();
        for poi in pois {
            if let Some(previous) = by_id.insert(poi.id, poi) {
                log::warn!(
                    "duplicate catalogue entry for POI {}; keeping the later record",
                    previous.id
                );
            }
        }
        Self { pois: by_id }
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Whether the catalogue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}

impl PoiCatalogue for MemoryCatalogue {
    fn pois_by_id(&self, ids: &[u64]) -> Vec<PointOfInterest> {
        ids.iter()
            .filter_map(|id| {
                let found = self.pois.get(id).cloned();
                if found.is_none() {
                    log::debug!("POI {id} not present in catalogue");
                }
                found
            })
            .collect()
    }
}
