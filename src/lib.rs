pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CsvStoreTable, GoogleGeocoder};
pub use config::CliConfig;
pub use core::engine::LocatorEngine;
pub use domain::model::{Coordinate, OutputMode, RankedStore, StoreRecord, Units};
pub use utils::error::{LocatorError, Result};
