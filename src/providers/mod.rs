//! Weather and risk provider contracts
//!
//! Both providers are asynchronous and may fail independently. Failures are
//! returned as [`ProviderFailure`] values that the selection controller
//! stores in place of the missing result.

use async_trait::async_trait;

use crate::error::ProviderFailure;
use crate::models::{LatLng, RiskAssessment, WeatherSnapshot};

pub mod http;

pub use http::HttpAssessmentClient;

pub type ProviderResult<T> = std::result::Result<T, ProviderFailure>;

/// Current weather at a coordinate
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn airport_weather(&self, position: LatLng) -> ProviderResult<WeatherSnapshot>;
}

/// Flight-delay-risk assessment for an airport
#[async_trait]
pub trait RiskProvider: Send + Sync {
    async fn flight_risk(&self, iata: &str) -> ProviderResult<RiskAssessment>;
}
