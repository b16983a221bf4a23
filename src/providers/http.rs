//! HTTP client for the weather and flight-risk service

use std::time::Duration;

use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryError, RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::{ProviderResult, RiskProvider, WeatherProvider};
use crate::config::ProvidersConfig;
use crate::error::{ErrorCode, FlightRiskError, ProviderFailure};
use crate::models::{LatLng, RiskAssessment, WeatherSnapshot};
use crate::models::risk::RiskPayload;

/// Error object the service sends instead of a result
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    fn into_failure(self, code: ErrorCode, fallback: String) -> ProviderFailure {
        let failure = ProviderFailure::new(code, self.message.unwrap_or(fallback));
        match self.error {
            Some(label) => failure.with_upstream(label),
            None => failure,
        }
    }
}

/// Message used when an error body carries no `message`
const UNAVAILABLE: &str = "Flight risk prediction unavailable";

/// Whether a send failure was a timeout. The retry middleware wraps the
/// client error in `Error::Middleware`, so look through the cause chain.
fn is_timeout(err: &reqwest_middleware::Error) -> bool {
    match err {
        reqwest_middleware::Error::Reqwest(e) => e.is_timeout(),
        reqwest_middleware::Error::Middleware(e) => e.chain().any(|cause| {
            if let Some(e) = cause.downcast_ref::<reqwest::Error>() {
                e.is_timeout()
            } else if let Some(e) = cause.downcast_ref::<reqwest_middleware::Error>() {
                is_timeout(e)
            } else if let Some(RetryError::Error(e) | RetryError::WithRetries { err: e, .. }) =
                cause.downcast_ref::<RetryError>()
            {
                is_timeout(e)
            } else {
                false
            }
        }),
    }
}

/// Client for `/api/weather/airport` and `/api/flight-risk`
#[derive(Clone)]
pub struct HttpAssessmentClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl HttpAssessmentClient {
    /// Create a client with timeout and retry policy from `config`
    pub fn new(config: &ProvidersConfig) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(format!("FlightRisk/{}", crate::VERSION))
            .build()
            .map_err(|e| FlightRiskError::config(format!("Failed to create HTTP client: {e}")))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn weather_url(&self, position: LatLng) -> String {
        format!(
            "{}/api/weather/airport?lat={}&lng={}",
            self.base_url, position.lat, position.lng
        )
    }

    fn risk_url(&self, iata: &str) -> String {
        format!(
            "{}/api/flight-risk?iata={}",
            self.base_url,
            urlencoding::encode(iata)
        )
    }

    /// GET `url` and return its JSON body, mapping every failure mode to a
    /// [`ProviderFailure`].
    async fn get_json(&self, url: &str) -> ProviderResult<Value> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            let code = if is_timeout(&e) {
                ErrorCode::Timeout
            } else {
                ErrorCode::NetworkError
            };
            ProviderFailure::new(code, format!("Request failed: {e}"))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ProviderFailure::new(
                ErrorCode::NetworkError,
                format!("Failed to read response body: {e}"),
            )
        })?;

        if !status.is_success() {
            let fallback = format!("HTTP {status}");
            return Err(match serde_json::from_str::<ErrorBody>(&body) {
                Ok(error_body) => error_body.into_failure(ErrorCode::HttpStatus, fallback),
                Err(_) => ProviderFailure::new(ErrorCode::HttpStatus, fallback),
            });
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            ProviderFailure::new(
                ErrorCode::InvalidResponse,
                format!("Response is not valid JSON: {e}"),
            )
        })?;

        // The service also reports failures with a 200 and an `error` key
        if value.get("error").is_some_and(|e| !e.is_null()) {
            let error_body: ErrorBody = serde_json::from_value(value).unwrap_or(ErrorBody {
                error: None,
                message: None,
            });
            return Err(
                error_body.into_failure(ErrorCode::UpstreamError, UNAVAILABLE.to_string()),
            );
        }

        Ok(value)
    }
}

fn decode_weather(value: Value) -> ProviderResult<WeatherSnapshot> {
    if !value.is_object() {
        return Err(ProviderFailure::new(
            ErrorCode::InvalidResponse,
            "Weather response is not an object",
        ));
    }
    serde_json::from_value(value).map_err(|e| {
        ProviderFailure::new(
            ErrorCode::InvalidResponse,
            format!("Failed to parse weather response: {e}"),
        )
    })
}

fn decode_risk(value: Value) -> ProviderResult<RiskAssessment> {
    let payload: RiskPayload = serde_json::from_value(value).map_err(|e| {
        ProviderFailure::new(
            ErrorCode::InvalidResponse,
            format!("Failed to parse flight risk response: {e}"),
        )
    })?;
    if !payload.risk_score.is_finite() {
        return Err(ProviderFailure::new(
            ErrorCode::InvalidResponse,
            "Risk score is not a number",
        ));
    }
    Ok(payload.into())
}

#[async_trait]
impl WeatherProvider for HttpAssessmentClient {
    #[instrument(skip(self, position), fields(lat = position.lat, lng = position.lng))]
    async fn airport_weather(&self, position: LatLng) -> ProviderResult<WeatherSnapshot> {
        let url = self.weather_url(position);
        let snapshot = self.get_json(&url).await.and_then(decode_weather);
        match &snapshot {
            Ok(s) if s.is_empty() => warn!("Weather response carried no known fields"),
            Ok(_) => info!("Weather received"),
            Err(e) => warn!("Weather request failed: {}", e),
        }
        snapshot
    }
}

#[async_trait]
impl RiskProvider for HttpAssessmentClient {
    #[instrument(skip(self))]
    async fn flight_risk(&self, iata: &str) -> ProviderResult<RiskAssessment> {
        let url = self.risk_url(iata);
        let assessment = self.get_json(&url).await.and_then(decode_risk);
        match &assessment {
            Ok(a) => info!("Risk {:.1} ({}) from zone {}", a.risk_score, a.category, a.zone),
            Err(e) => warn!("Flight risk request failed: {}", e),
        }
        assessment
    }
}
