//! Data models for the FlightRisk application
//!
//! This module contains the core domain models organized by concern:
//! - Airport: static airport records and their geographic regions
//! - Weather: point-in-time weather observations
//! - Risk: flight-delay-risk assessments and their category buckets

pub mod airport;
pub mod risk;
pub mod weather;

// Re-export all public types for convenient access
pub use airport::{AirportRecord, LatLng, Region, derive_icao};
pub use risk::{RiskAssessment, RiskCategory, RiskInterpretation};
pub use weather::WeatherSnapshot;
