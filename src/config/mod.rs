use clap::{ArgGroup, Parser};

use crate::domain::model::{OutputMode, Units};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};

pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Clone, Parser)]
#[command(name = "store-locator")]
#[command(about = "Returns the nearest store to a user-given address or zip code")]
#[command(group(ArgGroup::new("origin").required(true)))]
pub struct CliConfig {
    /// Address of your starting point, e.g. "1770 Union St, San Francisco, CA 94123"
    #[arg(long, group = "origin")]
    pub address: Option<String>,

    /// Zip code of your starting point
    #[arg(long, group = "origin")]
    pub zip: Option<String>,

    /// Distance units for the result
    #[arg(long, value_enum, default_value_t = Units::Mi)]
    pub units: Units,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Path to the store table
    #[arg(long, default_value = "store-locations.csv")]
    pub stores: String,

    /// Geocoding API endpoint
    #[arg(long, default_value = DEFAULT_GEOCODE_ENDPOINT)]
    pub geocode_endpoint: String,

    /// Geocoding API key
    #[arg(long, env = "GEOCODER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    /// The starting point to geocode. clap guarantees exactly one of
    /// --address / --zip is present.
    pub fn origin(&self) -> &str {
        self.address
            .as_deref()
            .or(self.zip.as_deref())
            .unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("geocode_endpoint", &self.geocode_endpoint)?;
        validate_path("stores", &self.stores)?;
        validate_non_empty_string("api_key", &self.api_key)?;
        if let Some(address) = &self.address {
            validate_non_empty_string("address", address)?;
        }
        if let Some(zip) = &self.zip {
            validate_non_empty_string("zip", zip)?;
        }
        Ok(())
    }
}
