use clap::Parser;
use store_locator::utils::{logger, validation::Validate};
use store_locator::{CliConfig, CsvStoreTable, GoogleGeocoder, LocatorEngine};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting store-locator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let geocoder = GoogleGeocoder::new(config.geocode_endpoint.clone(), config.api_key.clone());
    let repository = CsvStoreTable::new(config.stores.clone());
    let engine = LocatorEngine::new(geocoder, repository);

    match engine.run(config.origin(), config.units, config.output) {
        Ok(message) => println!("{}", message),
        Err(e) => {
            tracing::error!("Lookup failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
