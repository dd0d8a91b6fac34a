// Adapters layer: concrete implementations for the external collaborators
// (geocoding API, store table).

pub mod csv_table;
pub mod google;

pub use csv_table::CsvStoreTable;
pub use google::GoogleGeocoder;
