//! Airport model: static records, regions and coordinates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlightRiskError;

/// Prefix used to synthesize an ICAO code from an IATA code
const ICAO_PREFIX: char = 'K';

/// Derive the 4-letter ICAO code for an airport from its IATA code.
///
/// Every airport in the index is in the contiguous US, so the code is the
/// IATA code with a `K` prefix. This is not an authoritative ICAO lookup.
#[must_use]
pub fn derive_icao(iata: &str) -> String {
    let mut icao = String::with_capacity(4);
    icao.push(ICAO_PREFIX);
    icao.push_str(&iata.to_ascii_uppercase());
    icao
}

/// A geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Named geographic zone an airport belongs to.
///
/// The risk service trains one model per region, so the label doubles as the
/// zone name it reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Northeast,
    PacificCoast,
    RockyMountains,
    CentralPlains,
    Southeast,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Northeast,
        Region::PacificCoast,
        Region::RockyMountains,
        Region::CentralPlains,
        Region::Southeast,
    ];

    /// Label used for display and for search matching
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Region::Northeast => "Northeast",
            Region::PacificCoast => "PacificCoast",
            Region::RockyMountains => "RockyMountains",
            Region::CentralPlains => "CentralPlains",
            Region::Southeast => "Southeast",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = FlightRiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FlightRiskError::validation(format!("Unknown region '{s}'")))
    }
}

/// Immutable airport record owned by the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    /// 3-letter IATA code, unique key within the index
    pub iata: String,
    /// Synthesized 4-letter ICAO code
    pub icao: String,
    pub name: String,
    pub city: String,
    /// Two-letter US state or district code
    pub state: String,
    pub region: Region,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl AirportRecord {
    /// Create a record, normalising the IATA code and deriving the ICAO code
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        iata: &str,
        name: &str,
        city: &str,
        state: &str,
        region: Region,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        let iata = iata.trim().to_ascii_uppercase();
        Self {
            icao: derive_icao(&iata),
            iata,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            region,
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// `"{city}, {state}"`
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Check that the record is usable as an index entry
    pub fn validate(&self) -> Result<(), FlightRiskError> {
        if self.iata.len() != 3 || !self.iata.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FlightRiskError::validation(format!(
                "IATA code must be 3 letters, got '{}'",
                self.iata
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(FlightRiskError::validation(format!(
                "Latitude must be between -90 and 90, got: {} ({})",
                self.latitude, self.iata
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(FlightRiskError::validation(format!(
                "Longitude must be between -180 and 180, got: {} ({})",
                self.longitude, self.iata
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_icao() {
        assert_eq!(derive_icao("BOS"), "KBOS");
        assert_eq!(derive_icao("jfk"), "KJFK");
    }

    #[test]
    fn test_record_new_normalises_codes() {
        let record = AirportRecord::new(
            "lax",
            "Los Angeles International Airport",
            "Los Angeles",
            "CA",
            Region::PacificCoast,
            33.9416,
            -118.4085,
        );
        assert_eq!(record.iata, "LAX");
        assert_eq!(record.icao, "KLAX");
        assert_eq!(record.address(), "Los Angeles, CA");
        assert_eq!(record.position(), LatLng::new(33.9416, -118.4085));
    }

    #[test]
    fn test_region_parse() {
        assert_eq!("pacificcoast".parse::<Region>().unwrap(), Region::PacificCoast);
        assert_eq!(" Southeast ".parse::<Region>().unwrap(), Region::Southeast);
        assert!("Midwest".parse::<Region>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_records() {
        let bad_code = AirportRecord::new("JF", "x", "y", "NY", Region::Northeast, 40.0, -73.0);
        assert!(bad_code.validate().is_err());

        let bad_lat = AirportRecord::new("JFK", "x", "y", "NY", Region::Northeast, 91.0, -73.0);
        assert!(bad_lat.validate().is_err());

        let ok = AirportRecord::new("JFK", "x", "y", "NY", Region::Northeast, 40.6, -73.7);
        assert!(ok.validate().is_ok());
    }
}
