//! Airport Index
//!
//! Immutable keyed collection of airport records, loaded once at startup and
//! shared read-only with the search engine and the selection workflow.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::data::AIRPORTS;
use crate::Result;
use crate::error::FlightRiskError;
use crate::models::{AirportRecord, Region};

/// Static lookup table of airport records in a stable enumeration order
#[derive(Debug, Clone)]
pub struct AirportIndex {
    records: Vec<AirportRecord>,
    by_iata: HashMap<String, usize>,
}

/// One entry of an airport table file
#[derive(Debug, Deserialize)]
struct AirportEntry {
    iata: String,
    name: String,
    city: String,
    state: String,
    region: String,
    latitude: f64,
    longitude: f64,
}

impl AirportEntry {
    fn into_record(self) -> Result<AirportRecord> {
        let region: Region = self.region.parse()?;
        Ok(AirportRecord::new(
            &self.iata,
            &self.name,
            &self.city,
            &self.state,
            region,
            self.latitude,
            self.longitude,
        ))
    }
}

impl AirportIndex {
    /// The curated built-in table
    #[must_use]
    pub fn builtin() -> Self {
        let records: Vec<AirportRecord> = AIRPORTS
            .iter()
            .map(|&(iata, name, city, state, region, lat, lng)| {
                AirportRecord::new(iata, name, city, state, region, lat, lng)
            })
            .collect();
        let by_iata = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.iata.clone(), i))
            .collect();
        Self { records, by_iata }
    }

    /// Build an index from arbitrary records, keeping their order.
    ///
    /// Fails on an invalid record or a repeated IATA code.
    pub fn from_records(records: Vec<AirportRecord>) -> Result<Self> {
        let mut by_iata = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            record.validate()?;
            if by_iata.insert(record.iata.clone(), i).is_some() {
                return Err(FlightRiskError::validation(format!(
                    "Duplicate IATA code '{}' in airport table",
                    record.iata
                )));
            }
        }
        Ok(Self { records, by_iata })
    }

    /// Load an airport table from a JSON array file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading airport table from: {:?}", path);

        let content = fs::read_to_string(path)?;
        let entries: Vec<AirportEntry> = serde_json::from_str(&content)?;
        let records = entries
            .into_iter()
            .map(AirportEntry::into_record)
            .collect::<Result<Vec<_>>>()?;

        let index = Self::from_records(records)?;
        info!("Loaded {} airports", index.len());
        Ok(index)
    }

    /// Find a record by IATA code, ignoring case
    #[must_use]
    pub fn lookup(&self, iata: &str) -> Option<&AirportRecord> {
        let key = iata.trim().to_ascii_uppercase();
        let found = self.by_iata.get(&key).map(|&i| &self.records[i]);
        if found.is_none() {
            debug!("No airport with IATA code '{}'", key);
        }
        found
    }

    /// All records in enumeration order
    #[must_use]
    pub fn all(&self) -> &[AirportRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
