//! Assessment Presenter
//!
//! Turns airports, search results and selection state into display-ready
//! views. Nothing here performs I/O; the terminal driver prints the views
//! through their `Display` impls.

use std::fmt;

use serde::Serialize;

use crate::airports::SearchResult;
use crate::error::ProviderFailure;
use crate::models::{AirportRecord, RiskAssessment, RiskCategory, WeatherSnapshot};
use crate::selection::{Selection, Slot};

pub const WEATHER_UNAVAILABLE: &str = "Weather data unavailable";
pub const RISK_UNAVAILABLE: &str = "Flight risk prediction unavailable";
pub const NO_RESULTS: &str =
    "No airports found. Try searching for airport names, cities, or IATA codes.";
pub const MAP_NOT_CONFIGURED: &str =
    "Map not configured. You can still search and select airports using the list.";
pub const PENDING: &str = "Loading...";

const PLACEHOLDER: [&str; 4] = [
    "Search for an Airport",
    "Search by IATA code, name, city, state, or region.",
    "Select any airport marker or result to view detailed information and weather data.",
    "Try: \"JFK\" or \"LAX\", \"Los Angeles\" or \"Chicago\", \"Northeast\" or \"PacificCoast\"",
];

/// Risk category label for a score
#[must_use]
pub fn categorize(score: f64) -> &'static str {
    RiskCategory::from_score(score).label()
}

/// One labelled weather reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRow {
    pub label: &'static str,
    pub value: String,
}

impl WeatherRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Format the fields present in `snapshot`, skipping absent ones
#[must_use]
pub fn weather_rows(snapshot: &WeatherSnapshot) -> Vec<WeatherRow> {
    let mut rows = Vec::new();

    if let Some(temperature) = snapshot.temperature_c {
        rows.push(WeatherRow::new("Temperature", format!("{temperature:.1}°C")));
    }
    if let Some(dewpoint) = snapshot.dewpoint_c {
        rows.push(WeatherRow::new("Dew point", format!("{dewpoint:.1}°C")));
    }
    match (snapshot.wind_speed_kts, snapshot.wind_direction) {
        (Some(speed), Some(direction)) => {
            rows.push(WeatherRow::new("Wind", format!("{speed:.1} kts @ {direction:.0}°")));
        }
        (Some(speed), None) => rows.push(WeatherRow::new("Wind", format!("{speed:.1} kts"))),
        (None, Some(direction)) => rows.push(WeatherRow::new("Wind", format!("{direction:.0}°"))),
        (None, None) => {}
    }
    if let Some(visibility) = snapshot.visibility_km {
        rows.push(WeatherRow::new("Visibility", format!("{visibility:.1} km")));
    }
    if let Some(ceiling) = snapshot.ceiling_ft {
        rows.push(WeatherRow::new("Ceiling", format!("{ceiling:.0} ft")));
    }
    if let Some(humidity) = snapshot.humidity {
        rows.push(WeatherRow::new("Humidity", format!("{humidity:.1}%")));
    }
    if let Some(gust) = snapshot.gust {
        rows.push(WeatherRow::new("Gusts", format!("{gust:.1} kts")));
    }
    if let Some(pressure) = snapshot.sea_level_pressure_mb {
        rows.push(WeatherRow::new("Pressure", format!("{pressure:.1} mb")));
    }

    rows
}

/// `"<error>: <message>"` for a failed risk fetch
#[must_use]
pub fn risk_error_text(failure: &ProviderFailure) -> String {
    let label = failure.upstream.as_deref().unwrap_or(RISK_UNAVAILABLE);
    format!("{}: {}", label, failure.message)
}

/// A search result as shown in the list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub id: String,
    pub title: String,
    /// `"{iata} - {city}, {state}"`
    pub subtitle: String,
    pub region: &'static str,
    pub address: String,
    pub selected: bool,
}

/// Cards for `results`, flagging the one matching `selected`
#[must_use]
pub fn result_cards(results: &[SearchResult], selected: Option<&str>) -> Vec<ResultCard> {
    results
        .iter()
        .map(|result| {
            let record = &result.record;
            ResultCard {
                id: result.id().to_string(),
                title: record.name.clone(),
                subtitle: format!("{} - {}, {}", record.iata, record.city, record.state),
                region: record.region.label(),
                address: result.address.clone(),
                selected: selected == Some(result.id()),
            }
        })
        .collect()
}

impl fmt::Display for ResultCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.selected { '*' } else { ' ' };
        write!(
            f,
            "{} {:<48} {} [{}]",
            marker, self.title, self.subtitle, self.region
        )
    }
}

/// Static facts about the selected airport
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportDetails {
    pub name: String,
    pub iata: String,
    pub icao: String,
    pub location: String,
    pub coordinates: String,
}

impl From<&AirportRecord> for AirportDetails {
    fn from(record: &AirportRecord) -> Self {
        Self {
            name: record.name.clone(),
            iata: record.iata.clone(),
            icao: record.icao.clone(),
            location: record.address(),
            coordinates: format!("{}, {}", record.latitude, record.longitude),
        }
    }
}

/// Weather half of the assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "rows", rename_all = "snake_case")]
pub enum WeatherPanel {
    Pending,
    Unavailable,
    Conditions(Vec<WeatherRow>),
}

impl From<&Slot<WeatherSnapshot>> for WeatherPanel {
    fn from(slot: &Slot<WeatherSnapshot>) -> Self {
        match slot {
            Slot::Pending => WeatherPanel::Pending,
            Slot::Failed(_) => WeatherPanel::Unavailable,
            Slot::Ready(snapshot) => WeatherPanel::Conditions(weather_rows(snapshot)),
        }
    }
}

/// Successful risk assessment, formatted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskView {
    /// `"{score:.1}/100"`
    pub score: String,
    pub category: RiskCategory,
    /// Bucket label derived from the score
    pub bucket: &'static str,
    /// Category text the service reported, when it sent one
    pub reported_category: Option<String>,
    pub description: Option<String>,
    pub model_lines: Vec<String>,
    /// Weather the risk model was fed
    pub conditions: Vec<WeatherRow>,
    pub note: Option<String>,
}

impl From<&RiskAssessment> for RiskView {
    fn from(assessment: &RiskAssessment) -> Self {
        Self {
            score: format!("{:.1}/100", assessment.risk_score),
            category: assessment.category,
            bucket: categorize(assessment.risk_score),
            reported_category: assessment.reported_category.clone(),
            description: assessment.description().map(str::to_string),
            model_lines: vec![
                format!("Model: {} Regional Model", assessment.zone),
                format!("Training data: Flight delay patterns from {}", assessment.zone),
            ],
            conditions: assessment
                .weather
                .as_ref()
                .map(weather_rows)
                .unwrap_or_default(),
            note: assessment.note.clone(),
        }
    }
}

/// Risk half of the assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "view", rename_all = "snake_case")]
pub enum RiskPanel {
    Pending,
    Unavailable(String),
    Assessment(RiskView),
}

impl From<&Slot<RiskAssessment>> for RiskPanel {
    fn from(slot: &Slot<RiskAssessment>) -> Self {
        match slot {
            Slot::Pending => RiskPanel::Pending,
            Slot::Failed(failure) => RiskPanel::Unavailable(risk_error_text(failure)),
            Slot::Ready(assessment) => RiskPanel::Assessment(assessment.into()),
        }
    }
}

/// Everything shown for the current selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentView {
    pub details: AirportDetails,
    pub weather: WeatherPanel,
    pub risk: RiskPanel,
}

impl From<&Selection> for AssessmentView {
    fn from(selection: &Selection) -> Self {
        Self {
            details: (&selection.airport).into(),
            weather: (&selection.weather).into(),
            risk: (&selection.risk).into(),
        }
    }
}

/// Lines shown when nothing is selected
#[must_use]
pub fn placeholder() -> &'static [&'static str] {
    &PLACEHOLDER
}

fn write_rows(f: &mut fmt::Formatter<'_>, rows: &[WeatherRow]) -> fmt::Result {
    for row in rows {
        writeln!(f, "    {:<12} {}", format!("{}:", row.label), row.value)?;
    }
    Ok(())
}

impl fmt::Display for AssessmentView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = &self.details;
        writeln!(f, "{}", details.name)?;
        writeln!(f, "  IATA Code:   {}", details.iata)?;
        writeln!(f, "  ICAO Code:   {}", details.icao)?;
        writeln!(f, "  Location:    {}", details.location)?;
        writeln!(f, "  Coordinates: {}", details.coordinates)?;

        writeln!(f, "  Weather")?;
        match &self.weather {
            WeatherPanel::Pending => writeln!(f, "    {PENDING}")?,
            WeatherPanel::Unavailable => writeln!(f, "    {WEATHER_UNAVAILABLE}")?,
            WeatherPanel::Conditions(rows) if rows.is_empty() => {
                writeln!(f, "    No conditions reported")?;
            }
            WeatherPanel::Conditions(rows) => write_rows(f, rows)?,
        }

        writeln!(f, "  Flight Risk Assessment")?;
        match &self.risk {
            RiskPanel::Pending => writeln!(f, "    {PENDING}")?,
            RiskPanel::Unavailable(text) => writeln!(f, "    {text}")?,
            RiskPanel::Assessment(view) => {
                let category = view.reported_category.as_deref().unwrap_or(view.bucket);
                writeln!(f, "    Score: {} ({}, {})", view.score, category, view.bucket)?;
                if let Some(description) = &view.description {
                    writeln!(f, "    {description}")?;
                }
                for line in &view.model_lines {
                    writeln!(f, "    {line}")?;
                }
                if !view.conditions.is_empty() {
                    writeln!(f, "    Current METAR weather")?;
                    write_rows(f, &view.conditions)?;
                }
                if let Some(note) = &view.note {
                    writeln!(f, "    Note: {note}")?;
                }
            }
        }
        Ok(())
    }
}
