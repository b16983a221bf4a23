//! Selection Controller
//!
//! Selecting an airport recenters the map and starts two independent
//! fetches, one for weather and one for flight risk. Each fetch runs as its
//! own task and reports back through the app's event channel tagged with the
//! [`SelectionId`] that started it. Only outcomes carrying the current id are
//! applied, so a slow answer for an earlier airport can never overwrite the
//! assessment of a later one.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::app::AppEvent;
use crate::error::ProviderFailure;
use crate::map::{MapHandle, SELECTION_ZOOM};
use crate::models::{AirportRecord, RiskAssessment, WeatherSnapshot};
use crate::providers::{ProviderResult, RiskProvider, WeatherProvider};

/// Monotonic tag identifying one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionId(u64);

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State of one half of an assessment
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Pending,
    Ready(T),
    Failed(ProviderFailure),
}

impl<T> Slot<T> {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Slot::Pending)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&ProviderFailure> {
        match self {
            Slot::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

impl<T> From<ProviderResult<T>> for Slot<T> {
    fn from(result: ProviderResult<T>) -> Self {
        match result {
            Ok(value) => Slot::Ready(value),
            Err(failure) => Slot::Failed(failure),
        }
    }
}

/// The selected airport and its assessment
#[derive(Debug, Clone)]
pub struct Selection {
    pub id: SelectionId,
    pub airport: AirportRecord,
    pub weather: Slot<WeatherSnapshot>,
    pub risk: Slot<RiskAssessment>,
}

impl Selection {
    fn pending(id: SelectionId, airport: AirportRecord) -> Self {
        Self {
            id,
            airport,
            weather: Slot::Pending,
            risk: Slot::Pending,
        }
    }

    /// True once both fetches have reported
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.weather.is_pending() && !self.risk.is_pending()
    }
}

/// Result of one fetch task
#[derive(Debug)]
pub enum FetchResult {
    Weather(ProviderResult<WeatherSnapshot>),
    Risk(ProviderResult<RiskAssessment>),
}

/// A fetch result tagged with the selection that requested it
#[derive(Debug)]
pub struct FetchOutcome {
    pub selection: SelectionId,
    pub result: FetchResult,
}

/// What [`SelectionController::apply`] did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    Stale,
}

/// Owns the current selection and the fetch tasks serving it
pub struct SelectionController {
    weather: Arc<dyn WeatherProvider>,
    risk: Arc<dyn RiskProvider>,
    events: UnboundedSender<AppEvent>,
    last_id: u64,
    current: Option<Selection>,
    in_flight: Vec<JoinHandle<()>>,
}

impl SelectionController {
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        risk: Arc<dyn RiskProvider>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            weather,
            risk,
            events,
            last_id: 0,
            current: None,
            in_flight: Vec::new(),
        }
    }

    /// Make `airport` the current selection and start both fetches.
    ///
    /// Must be called from within a Tokio runtime. Any assessment shown for
    /// the previous selection is replaced by pending slots immediately.
    pub fn select(
        &mut self,
        airport: AirportRecord,
        map: Option<&mut dyn MapHandle>,
    ) -> SelectionId {
        // Superseded fetches would be dropped as stale anyway
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }

        self.last_id += 1;
        let id = SelectionId(self.last_id);
        info!("Selected {} ({}) {}", airport.iata, airport.name, id);

        if let Some(map) = map {
            map.set_center(airport.position());
            map.set_zoom(SELECTION_ZOOM);
        }

        let weather = Arc::clone(&self.weather);
        let events = self.events.clone();
        let position = airport.position();
        let weather_task = tokio::spawn(async move {
            let result = weather.airport_weather(position).await;
            send_outcome(&events, id, FetchResult::Weather(result));
        });

        let risk = Arc::clone(&self.risk);
        let events = self.events.clone();
        let iata = airport.iata.clone();
        let risk_task = tokio::spawn(async move {
            let result = risk.flight_risk(&iata).await;
            send_outcome(&events, id, FetchResult::Risk(result));
        });

        self.in_flight = vec![weather_task, risk_task];
        self.current = Some(Selection::pending(id, airport));
        id
    }

    /// Store a fetch outcome if it belongs to the current selection
    pub fn apply(&mut self, outcome: FetchOutcome) -> Applied {
        let Some(current) = self
            .current
            .as_mut()
            .filter(|selection| selection.id == outcome.selection)
        else {
            debug!("Dropping stale fetch result for selection {}", outcome.selection);
            return Applied::Stale;
        };

        match outcome.result {
            FetchResult::Weather(result) => {
                if let Err(failure) = &result {
                    warn!("Weather unavailable for {}: {}", current.airport.iata, failure);
                }
                current.weather = result.into();
            }
            FetchResult::Risk(result) => {
                if let Err(failure) = &result {
                    warn!("Flight risk unavailable for {}: {}", current.airport.iata, failure);
                }
                current.risk = result.into();
            }
        }

        if current.is_settled() {
            self.in_flight.clear();
        }
        Applied::Current
    }

    #[must_use]
    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }
}

impl Drop for SelectionController {
    fn drop(&mut self) {
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
    }
}

fn send_outcome(events: &UnboundedSender<AppEvent>, selection: SelectionId, result: FetchResult) {
    let outcome = FetchOutcome { selection, result };
    if events.send(AppEvent::Fetched(outcome)).is_err() {
        debug!("Fetch for selection {} finished after shutdown", selection);
    }
}
