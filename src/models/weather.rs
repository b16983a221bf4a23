//! Weather snapshot model for current conditions at an airport

use serde::{Deserialize, Serialize};

/// Point-in-time weather at an airport.
///
/// Upstream reports are frequently partial, so every field is optional and
/// unknown fields in the payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius
    #[serde(default)]
    pub temperature_c: Option<f64>,
    /// Dew point in Celsius
    #[serde(default)]
    pub dewpoint_c: Option<f64>,
    /// Sustained wind speed in knots
    #[serde(default)]
    pub wind_speed_kts: Option<f64>,
    /// Wind direction in degrees (0-360, where 0/360 is North)
    #[serde(default)]
    pub wind_direction: Option<f64>,
    /// Visibility in kilometers
    #[serde(default)]
    pub visibility_km: Option<f64>,
    /// Cloud ceiling in feet
    #[serde(default)]
    pub ceiling_ft: Option<f64>,
    /// Relative humidity percentage
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Gust speed in knots
    #[serde(default)]
    pub gust: Option<f64>,
    /// Sea level pressure in millibars
    #[serde(default)]
    pub sea_level_pressure_mb: Option<f64>,
}

impl WeatherSnapshot {
    /// True when the payload carried none of the known fields, e.g. when the
    /// station had no current report
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
