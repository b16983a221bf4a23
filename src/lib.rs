//! `FlightRisk` - Airport search and flight-delay-risk assessment
//!
//! This library provides the airport index and search, map marker
//! synchronization, and the selection workflow that fetches weather and
//! risk for an airport and formats them for display.

pub mod airports;
pub mod app;
pub mod config;
pub mod error;
pub mod map;
pub mod models;
pub mod presenter;
pub mod providers;
pub mod selection;
pub mod telemetry;

// Re-export core types for public API
pub use airports::{AirportIndex, SearchEngine, SearchResult};
pub use app::{App, AppEvent, Update};
pub use config::FlightRiskConfig;
pub use error::{ErrorCode, FlightRiskError, ProviderFailure};
pub use map::{HeadlessMapProvider, MapHandle, MapProvider, MarkerSynchronizer};
pub use models::{AirportRecord, LatLng, Region, RiskAssessment, RiskCategory, WeatherSnapshot};
pub use presenter::categorize;
pub use providers::{HttpAssessmentClient, RiskProvider, WeatherProvider};
pub use selection::{Selection, SelectionController, SelectionId, Slot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, FlightRiskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
