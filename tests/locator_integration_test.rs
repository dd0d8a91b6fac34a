use httpmock::prelude::*;
use std::fs;
use store_locator::{
    CsvStoreTable, GoogleGeocoder, LocatorEngine, LocatorError, OutputMode, Units,
};
use tempfile::TempDir;

const STORE_TABLE: &str = "\
Store Name,Store Location,Address,City,State,Zip Code,Latitude,Longitude,County
Crystal,SWC Broadway & Bass Lake Rd,5537 W Broadway Ave,Crystal,MN,55428-3507,45.0521539,-93.364854,Hennepin County
Orem State Street,SWC Center St & Orem Blvd,175 W Center St,Orem,UT,84057-4607,40.2952422,-111.6990958,Utah County
San Francisco Central,Geary & Masonic,2675 Geary Blvd,San Francisco,CA,94118-3400,37.7817352,-122.4455532,San Francisco County
";

fn write_table(contents: &str) -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store-locations.csv");
    fs::write(&path, contents).unwrap();
    let path = path.to_str().unwrap().to_string();
    (temp_dir, path)
}

fn mock_geocode_server(lat: f64, lng: f64) -> MockServer {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/geocode/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "status": "OK",
                "results": [{"geometry": {"location": {"lat": lat, "lng": lng}}}]
            }));
    });
    server
}

#[test]
fn end_to_end_text_output() {
    let (_temp_dir, table_path) = write_table(STORE_TABLE);
    // 1770 Union St, San Francisco, CA 94123
    let server = mock_geocode_server(37.7981539, -122.4284318);

    let engine = LocatorEngine::new(
        GoogleGeocoder::new(server.url("/geocode/json"), "test-key"),
        CsvStoreTable::new(&table_path),
    );

    let message = engine
        .run(
            "1770 Union St, San Francisco, CA 94123",
            Units::Mi,
            OutputMode::Text,
        )
        .unwrap();

    assert!(
        message.starts_with("Your nearest store is "),
        "{message}"
    );
    assert!(
        message.ends_with(
            "away in San Francisco Central. \
             Please visit us at 2675 Geary Blvd, San Francisco, CA 94118-3400."
        ),
        "{message}"
    );
    assert!(message.contains(" mi "), "{message}");
}

#[test]
fn end_to_end_json_output() {
    let (_temp_dir, table_path) = write_table(STORE_TABLE);
    let server = mock_geocode_server(40.3, -111.7);

    let engine = LocatorEngine::new(
        GoogleGeocoder::new(server.url("/geocode/json"), "test-key"),
        CsvStoreTable::new(&table_path),
    );

    let message = engine.run("84057", Units::Km, OutputMode::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&message).unwrap();

    assert_eq!(value["name"], "Orem State Street");
    assert_eq!(value["location"], "SWC Center St & Orem Blvd");
    assert_eq!(value["city"], "Orem");
    assert_eq!(value["county"], "Utah County");
    assert_eq!(value["latitude"], 40.2952422);
    assert_eq!(value["longitude"], -111.6990958);
    assert_eq!(value["units"], "km");
    assert!(value["distance"].as_f64().unwrap() > 0.0);
}

#[test]
fn invalid_address_reaches_the_caller_as_a_tagged_error() {
    let (_temp_dir, table_path) = write_table(STORE_TABLE);

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/geocode/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "INVALID_REQUEST", "results": []}));
    });

    let engine = LocatorEngine::new(
        GoogleGeocoder::new(server.url("/geocode/json"), "test-key"),
        CsvStoreTable::new(&table_path),
    );

    let err = engine
        .run("not an address", Units::Mi, OutputMode::Text)
        .unwrap_err();

    api_mock.assert();
    assert!(matches!(err, LocatorError::InvalidAddress { .. }), "{err:?}");
    assert_eq!(
        err.user_friendly_message(),
        "Invalid address. Please try again."
    );
}

#[test]
fn empty_store_table_is_a_defined_failure() {
    let (_temp_dir, table_path) = write_table(
        "Store Name,Store Location,Address,City,State,Zip Code,Latitude,Longitude,County\n",
    );
    let server = mock_geocode_server(37.8, -122.4);

    let engine = LocatorEngine::new(
        GoogleGeocoder::new(server.url("/geocode/json"), "test-key"),
        CsvStoreTable::new(&table_path),
    );

    let err = engine
        .run("1770 Union St", Units::Mi, OutputMode::Text)
        .unwrap_err();
    assert!(matches!(err, LocatorError::EmptyStoreTable), "{err:?}");
}

#[test]
fn geocoder_outage_does_not_reach_the_scan() {
    let (_temp_dir, table_path) = write_table(STORE_TABLE);

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/geocode/json");
        then.status(503);
    });

    let engine = LocatorEngine::new(
        GoogleGeocoder::new(server.url("/geocode/json"), "test-key"),
        CsvStoreTable::new(&table_path),
    );

    let err = engine
        .run("1770 Union St", Units::Mi, OutputMode::Text)
        .unwrap_err();
    assert!(matches!(err, LocatorError::GeocodeTransport(_)), "{err:?}");
    assert_eq!(
        err.user_friendly_message(),
        "Something is wrong with the geocoding service. Please try again."
    );
}
