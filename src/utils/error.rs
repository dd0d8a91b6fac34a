use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Geocoding request failed: {0}")]
    GeocodeTransport(#[from] reqwest::Error),

    #[error("Geocoder rejected the address (status {status})")]
    InvalidAddress { status: String },

    #[error("Store table error: {0}")]
    StoreTable(#[from] csv::Error),

    #[error("Malformed store row at line {line}: {reason}")]
    MalformedStoreRow { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("The store table is empty")]
    EmptyStoreTable,
}

pub type Result<T> = std::result::Result<T, LocatorError>;

impl LocatorError {
    /// Short message suitable for printing to the user, without the
    /// underlying cause chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::GeocodeTransport(_) => {
                "Something is wrong with the geocoding service. Please try again.".to_string()
            }
            Self::InvalidAddress { .. } => "Invalid address. Please try again.".to_string(),
            Self::StoreTable(_) | Self::Io(_) | Self::MalformedStoreRow { .. } => {
                "The store table could not be read.".to_string()
            }
            Self::EmptyStoreTable => "The store table has no stores to search.".to_string(),
            Self::Serialization(_) => "The result could not be serialized.".to_string(),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid configuration for {field}: {reason}")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::GeocodeTransport(_) => "Check your network connection and API key.",
            Self::InvalidAddress { .. } => {
                "Use a full address like \"1770 Union St, San Francisco, CA 94123\" or a zip code."
            }
            Self::StoreTable(_) | Self::Io(_) => {
                "Check the --stores path and that the file is readable."
            }
            Self::MalformedStoreRow { .. } => {
                "Each row needs 9 columns with numeric latitude and longitude."
            }
            Self::EmptyStoreTable => "Point --stores at a table with at least one row.",
            Self::Serialization(_) => "Retry with --output text.",
            Self::InvalidConfigValue { .. } => "Run with --help to see the expected values.",
        }
    }

    /// Configuration problems exit with the same code clap uses for bad
    /// arguments; everything else is a plain runtime failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfigValue { .. } => 2,
            _ => 1,
        }
    }
}
