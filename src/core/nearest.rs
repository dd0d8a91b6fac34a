use crate::core::distance::distance;
use crate::domain::model::{Coordinate, RankedStore, StoreRecord, Units};

/// Single pass over the store table, keeping the running minimum distance.
///
/// The comparator is strictly-less: a candidate only replaces the current
/// best when it is closer, so the first store encountered at the minimum
/// distance wins ties. An empty table yields `None`.
pub fn nearest(
    origin: Coordinate,
    units: Units,
    stores: impl IntoIterator<Item = StoreRecord>,
) -> Option<RankedStore> {
    let mut best: Option<RankedStore> = None;

    for store in stores {
        let d = distance(origin, store.coordinate(), units);
        let closer = match &best {
            Some(current) => d < current.distance,
            None => true,
        };
        if closer {
            best = Some(RankedStore {
                store,
                distance: d,
                units,
            });
        }
    }

    best
}
