//! Search Engine
//!
//! Case-insensitive substring search over the airport index. Pure and
//! synchronous: the same index and query always give the same results.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::index::AirportIndex;
use crate::models::AirportRecord;

/// Country reported for every airport in the index
pub const COUNTRY: &str = "USA";

/// One matching airport, with display fields synthesized from the record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub record: AirportRecord,
    /// `"{city}, {state}"`
    pub address: String,
    pub country: &'static str,
}

impl SearchResult {
    fn from_record(record: &AirportRecord) -> Self {
        Self {
            address: record.address(),
            country: COUNTRY,
            record: record.clone(),
        }
    }

    /// Key shared with the marker created for this result
    #[must_use]
    pub fn id(&self) -> &str {
        &self.record.iata
    }
}

/// Returns true when any searchable field contains `needle`.
///
/// `needle` must already be lowercase. The ICAO code is deliberately not a
/// searchable field.
fn matches(record: &AirportRecord, needle: &str) -> bool {
    [
        record.iata.as_str(),
        record.name.as_str(),
        record.city.as_str(),
        record.state.as_str(),
        record.region.label(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Search engine over a shared, read-only index
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: Arc<AirportIndex>,
}

impl SearchEngine {
    #[must_use]
    pub fn new(index: Arc<AirportIndex>) -> Self {
        Self { index }
    }

    #[must_use]
    pub fn index(&self) -> &AirportIndex {
        &self.index
    }

    /// Matching airports in index order.
    ///
    /// An empty query yields no results rather than the whole index.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let results: Vec<SearchResult> = self
            .index
            .all()
            .iter()
            .filter(|record| matches(record, &needle))
            .map(SearchResult::from_record)
            .collect();

        debug!("Query '{}' matched {} airports", query, results.len());
        results
    }
}
