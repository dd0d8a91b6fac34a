use std::path::PathBuf;

use csv::StringRecord;

use crate::domain::model::StoreRecord;
use crate::domain::ports::StoreRepository;
use crate::utils::error::{LocatorError, Result};

const COLUMNS: usize = 9;

/// Store table backed by a local CSV file: one header row, then exactly
/// 9 columns per row (name, location, address, city, state, zip, latitude,
/// longitude, county). Columns are positional; the header labels are
/// skipped, not matched. The file is read fresh on every call.
pub struct CsvStoreTable {
    path: PathBuf,
}

impl CsvStoreTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StoreRepository for CsvStoreTable {
    fn all_stores(&self) -> Result<Vec<StoreRecord>> {
        // flexible: ragged rows are reported as MalformedStoreRow with a
        // line number instead of a bare csv error.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut stores = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            let line = row
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(index + 2);
            stores.push(parse_row(&row, line)?);
        }

        tracing::debug!("Loaded {} stores from {}", stores.len(), self.path.display());
        Ok(stores)
    }
}

fn parse_row(row: &StringRecord, line: usize) -> Result<StoreRecord> {
    if row.len() != COLUMNS {
        return Err(LocatorError::MalformedStoreRow {
            line,
            reason: format!("expected {COLUMNS} columns, found {}", row.len()),
        });
    }

    let text = |index: usize| row.get(index).unwrap_or_default().to_string();
    let number = |index: usize, name: &str| -> Result<f64> {
        let raw = row.get(index).unwrap_or_default();
        raw.trim()
            .parse()
            .map_err(|_| LocatorError::MalformedStoreRow {
                line,
                reason: format!("{name} is not a number: {raw:?}"),
            })
    };

    Ok(StoreRecord {
        name: text(0),
        location: text(1),
        address: text(2),
        city: text(3),
        state: text(4),
        zip: text(5),
        latitude: number(6, "latitude")?,
        longitude: number(7, "longitude")?,
        county: text(8),
    })
}
