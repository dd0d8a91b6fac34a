use crate::domain::model::{OutputMode, RankedStore};
use crate::utils::error::Result;

/// Renders the winning store for the user.
///
/// Text mode rounds the distance to one decimal digit; JSON mode emits the
/// flat object with every store field plus distance and units.
pub fn render(ranked: &RankedStore, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Text => Ok(format!(
            "Your nearest store is {:.1} {} away in {}. Please visit us at {}, {}, {} {}.",
            ranked.distance,
            ranked.units,
            ranked.store.name,
            ranked.store.address,
            ranked.store.city,
            ranked.store.state,
            ranked.store.zip,
        )),
        OutputMode::Json => Ok(serde_json::to_string(ranked)?),
    }
}
