pub mod distance;
pub mod engine;
pub mod format;
pub mod nearest;

pub use crate::domain::model::{Coordinate, OutputMode, RankedStore, StoreRecord, Units};
pub use crate::domain::ports::{Geocoder, StoreRepository};
pub use crate::utils::error::Result;
