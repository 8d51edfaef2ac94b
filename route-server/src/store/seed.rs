//! Seed-file loading.
//!
//! The server can populate an empty network at startup from a JSON file
//! naming locations and the transports between them; transports refer to
//! their endpoints by location code.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{DaySet, LocationCode, TransportMode};

use super::{Network, NewLocation, NewTransport, StoreError};

/// Errors from loading a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Reading the file failed
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid seed JSON
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Applying an entry to the network failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Top-level shape of a seed file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedFile {
    #[serde(default)]
    pub locations: Vec<SeedLocation>,
    #[serde(default)]
    pub transportations: Vec<SeedTransport>,
}

/// A location entry in a seed file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedLocation {
    pub name: String,
    pub country: String,
    pub city: String,
    pub code: LocationCode,
}

/// A transport entry in a seed file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTransport {
    pub origin_code: LocationCode,
    pub destination_code: LocationCode,
    #[serde(rename = "type")]
    pub mode: TransportMode,
    pub operating_days: DaySet,
}

/// Read a seed file from disk and apply it to `network`.
///
/// Returns the number of locations and transports created.
///
/// # Errors
///
/// Fails on unreadable or unparseable files, and on entries the store
/// rejects (duplicate codes, transports naming unknown codes).
pub async fn load_seed_file(network: &Network, path: &Path) -> Result<(usize, usize), SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let seed: SeedFile = serde_json::from_str(&raw)?;
    apply_seed(network, seed).await
}

/// Apply parsed seed data to `network`. Locations are created first so
/// transports can resolve their endpoint codes.
pub async fn apply_seed(network: &Network, seed: SeedFile) -> Result<(usize, usize), SeedError> {
    let mut locations = 0;
    for entry in seed.locations {
        network
            .create_location(NewLocation {
                name: entry.name,
                country: entry.country,
                city: entry.city,
                code: entry.code,
            })
            .await?;
        locations += 1;
    }

    let mut transports = 0;
    for entry in seed.transportations {
        let origin = network.location_by_code(&entry.origin_code).await?;
        let destination = network.location_by_code(&entry.destination_code).await?;
        network
            .create_transport(NewTransport {
                origin: origin.id,
                destination: destination.id,
                mode: entry.mode,
                operating_days: entry.operating_days,
            })
            .await?;
        transports += 1;
    }

    Ok((locations, transports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "locations": [
            {"name": "Istanbul Airport", "country": "Turkey", "city": "Istanbul", "code": "IST"},
            {"name": "Heathrow Airport", "country": "UK", "city": "London", "code": "LHR"},
            {"name": "Taksim Square", "country": "Turkey", "city": "Istanbul", "code": "CCIST"}
        ],
        "transportations": [
            {"originCode": "CCIST", "destinationCode": "IST", "type": "BUS", "operatingDays": [1, 2, 3, 4, 5, 6, 7]},
            {"originCode": "IST", "destinationCode": "LHR", "type": "FLIGHT", "operatingDays": [1, 3, 5]}
        ]
    }"#;

    #[tokio::test]
    async fn apply_sample_seed() {
        let network = Network::new();
        let seed: SeedFile = serde_json::from_str(SAMPLE).unwrap();

        let (locations, transports) = apply_seed(&network, seed).await.unwrap();
        assert_eq!(locations, 3);
        assert_eq!(transports, 2);

        let snapshot = network.transports().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1].mode, TransportMode::Flight);
        assert!(snapshot[1].operates_on(3));
        assert!(!snapshot[1].operates_on(2));
    }

    #[tokio::test]
    async fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let network = Network::new();
        let (locations, transports) = load_seed_file(&network, file.path()).await.unwrap();
        assert_eq!((locations, transports), (3, 2));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let network = Network::new();
        let err = load_seed_file(&network, Path::new("/nonexistent/seed.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let network = Network::new();
        let err = load_seed_file(&network, file.path()).await.unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[tokio::test]
    async fn transport_with_unknown_code_rejected() {
        let raw = r#"{
            "locations": [],
            "transportations": [
                {"originCode": "IST", "destinationCode": "LHR", "type": "FLIGHT", "operatingDays": [1]}
            ]
        }"#;

        let network = Network::new();
        let seed: SeedFile = serde_json::from_str(raw).unwrap();
        let err = apply_seed(&network, seed).await.unwrap_err();
        assert!(matches!(err, SeedError::Store(StoreError::UnknownCode(_))));
    }

    #[tokio::test]
    async fn empty_object_is_a_valid_seed() {
        let network = Network::new();
        let seed: SeedFile = serde_json::from_str("{}").unwrap();
        let (locations, transports) = apply_seed(&network, seed).await.unwrap();
        assert_eq!((locations, transports), (0, 0));
    }
}
