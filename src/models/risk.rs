//! Flight-delay-risk assessment model

use std::fmt;

use serde::{Deserialize, Serialize};

use super::weather::WeatherSnapshot;

/// Discrete risk bucket derived from a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskCategory {
    /// Bucket a score. Each threshold belongs to the higher bucket.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 20.0 {
            RiskCategory::Low
        } else if score < 60.0 {
            RiskCategory::Moderate
        } else if score < 80.0 {
            RiskCategory::High
        } else {
            RiskCategory::VeryHigh
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Moderate => "moderate",
            RiskCategory::High => "high",
            RiskCategory::VeryHigh => "very high",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Human-oriented reading of the score, as reported by the risk service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskInterpretation {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Risk assessment for one airport, created fresh on each selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// IATA code the service answered for
    pub airport: Option<String>,
    /// Score clamped to 0-100
    pub risk_score: f64,
    /// Bucket derived locally from `risk_score`
    pub category: RiskCategory,
    /// Category label as the service phrased it
    pub reported_category: Option<String>,
    /// Region whose model produced the score
    pub zone: String,
    pub interpretation: RiskInterpretation,
    /// Weather the model was fed, embedded in the risk response
    pub weather: Option<WeatherSnapshot>,
    pub note: Option<String>,
}

impl RiskAssessment {
    /// Build an assessment from a raw score, clamping it into range
    #[must_use]
    pub fn from_score(zone: impl Into<String>, score: f64) -> Self {
        let risk_score = score.clamp(0.0, 100.0);
        Self {
            airport: None,
            risk_score,
            category: RiskCategory::from_score(risk_score),
            reported_category: None,
            zone: zone.into(),
            interpretation: RiskInterpretation::default(),
            weather: None,
            note: None,
        }
    }

    /// Description text to show, if any
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.interpretation.description.as_deref()
    }
}

/// Wire shape of a successful `/api/flight-risk` response
#[derive(Debug, Clone, Deserialize)]
pub struct RiskPayload {
    #[serde(default)]
    pub airport: Option<String>,
    pub risk_score: f64,
    #[serde(default)]
    pub risk_category: Option<String>,
    pub zone: String,
    #[serde(default)]
    pub interpretation: Option<RiskInterpretation>,
    #[serde(default)]
    pub weather_data: Option<WeatherSnapshot>,
    #[serde(default)]
    pub note: Option<String>,
}

impl From<RiskPayload> for RiskAssessment {
    fn from(payload: RiskPayload) -> Self {
        let mut assessment = RiskAssessment::from_score(payload.zone, payload.risk_score);
        assessment.airport = payload.airport;
        assessment.reported_category = payload.risk_category;
        assessment.interpretation = payload.interpretation.unwrap_or_default();
        assessment.weather = payload.weather_data;
        assessment.note = payload.note;
        assessment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, RiskCategory::Low)]
    #[case(19.9, RiskCategory::Low)]
    #[case(20.0, RiskCategory::Moderate)]
    #[case(59.9, RiskCategory::Moderate)]
    #[case(60.0, RiskCategory::High)]
    #[case(79.9, RiskCategory::High)]
    #[case(80.0, RiskCategory::VeryHigh)]
    #[case(100.0, RiskCategory::VeryHigh)]
    fn test_category_thresholds(#[case] score: f64, #[case] expected: RiskCategory) {
        assert_eq!(RiskCategory::from_score(score), expected);
    }

    #[test]
    fn test_from_score_clamps() {
        let over = RiskAssessment::from_score("Northeast", 130.0);
        assert_eq!(over.risk_score, 100.0);
        assert_eq!(over.category, RiskCategory::VeryHigh);

        let under = RiskAssessment::from_score("Northeast", -4.0);
        assert_eq!(under.risk_score, 0.0);
        assert_eq!(under.category, RiskCategory::Low);
    }

    #[test]
    fn test_payload_conversion() {
        let json = r#"{
            "success": true,
            "airport": "JFK",
            "zone": "Northeast",
            "risk_score": 64.25,
            "risk_category": "High Risk",
            "weather_data": {"temperature_c": 5.0, "ceiling_ft": 2500.0},
            "interpretation": {
                "score": 64.25,
                "category": "High Risk",
                "description": "Significant weather issues - Delays likely."
            }
        }"#;
        let payload: RiskPayload = serde_json::from_str(json).unwrap();
        let assessment = RiskAssessment::from(payload);

        assert_eq!(assessment.airport.as_deref(), Some("JFK"));
        assert_eq!(assessment.category, RiskCategory::High);
        assert_eq!(assessment.reported_category.as_deref(), Some("High Risk"));
        assert_eq!(
            assessment.description(),
            Some("Significant weather issues - Delays likely.")
        );
        let weather = assessment.weather.unwrap();
        assert_eq!(weather.ceiling_ft, Some(2500.0));
        assert_eq!(weather.humidity, None);
    }
}
