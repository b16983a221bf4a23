//! Application state and event handling
//!
//! [`App`] owns every piece of UI state as a named slot: the query, the
//! result set, the marker handles and the selection. All changes go through
//! [`App::handle`], which processes one [`AppEvent`] at a time. Marker clicks
//! and finished fetches arrive as events on the same channel as user input,
//! so there is exactly one writer.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::airports::{AirportIndex, SearchEngine, SearchResult};
use crate::map::{MapHandle, MarkerSynchronizer};
use crate::models::AirportRecord;
use crate::presenter::{self, AssessmentView, ResultCard};
use crate::providers::{RiskProvider, WeatherProvider};
use crate::selection::{Applied, FetchOutcome, Selection, SelectionController, SelectionId};

/// Messages driving the application
#[derive(Debug)]
pub enum AppEvent {
    /// The search text changed
    QueryChanged(String),
    /// A result card or map marker was clicked
    Select(AirportRecord),
    /// A weather or risk fetch finished
    Fetched(FetchOutcome),
}

/// What an event changed, for deciding what to redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Results(usize),
    Selected(SelectionId),
    Assessment(SelectionId),
    /// A fetch for a superseded selection arrived and was dropped
    Ignored,
}

fn map_handle(map: &mut Option<Box<dyn MapHandle>>) -> Option<&mut dyn MapHandle> {
    map.as_deref_mut().map(|map| map as &mut dyn MapHandle)
}

pub struct App {
    engine: SearchEngine,
    map: Option<Box<dyn MapHandle>>,
    markers: MarkerSynchronizer,
    selection: SelectionController,
    query: String,
    results: Vec<SearchResult>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    /// Build the app. `map` is `None` in list-only mode.
    #[must_use]
    pub fn new(
        index: Arc<AirportIndex>,
        map: Option<Box<dyn MapHandle>>,
        weather: Arc<dyn WeatherProvider>,
        risk: Arc<dyn RiskProvider>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            engine: SearchEngine::new(index),
            map,
            markers: MarkerSynchronizer::new(events_tx.clone()),
            selection: SelectionController::new(weather, risk, events_tx.clone()),
            query: String::new(),
            results: Vec::new(),
            events_tx,
            events_rx,
        }
    }

    /// Sender for feeding events from outside (input readers, map callbacks)
    #[must_use]
    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.events_tx.clone()
    }

    /// Apply one event to the state
    pub fn handle(&mut self, event: AppEvent) -> Update {
        match event {
            AppEvent::QueryChanged(query) => Update::Results(self.set_query(query)),
            AppEvent::Select(record) => Update::Selected(self.select(record)),
            AppEvent::Fetched(outcome) => {
                let selection = outcome.selection;
                match self.selection.apply(outcome) {
                    Applied::Current => Update::Assessment(selection),
                    Applied::Stale => Update::Ignored,
                }
            }
        }
    }

    /// Run the search and resynchronize the markers. Returns the result count.
    pub fn set_query(&mut self, query: impl Into<String>) -> usize {
        self.query = query.into();
        self.results = self.engine.search(&self.query);
        self.markers.sync(map_handle(&mut self.map), &self.results);
        debug!("Query '{}' -> {} results", self.query, self.results.len());
        self.results.len()
    }

    /// Select an airport as if its result card was clicked
    pub fn select(&mut self, record: AirportRecord) -> SelectionId {
        self.selection.select(record, map_handle(&mut self.map))
    }

    /// Select the airport with `iata` from the index
    pub fn select_code(&mut self, iata: &str) -> Option<SelectionId> {
        let record = self.engine.index().lookup(iata)?.clone();
        Some(self.select(record))
    }

    /// Select the `position`-th current result (zero-based)
    pub fn select_result(&mut self, position: usize) -> Option<SelectionId> {
        let record = self.results.get(position)?.record.clone();
        Some(self.select(record))
    }

    /// Wait for the next event without handling it
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// Wait for one event and handle it
    pub async fn step(&mut self) -> Option<Update> {
        let event = self.events_rx.recv().await?;
        Some(self.handle(event))
    }

    /// Handle events until the current selection has both results
    pub async fn settle(&mut self) {
        while self.selection.current().is_some_and(|s| !s.is_settled()) {
            if self.step().await.is_none() {
                break;
            }
        }
    }

    /// Drop the map, releasing every marker first
    pub fn teardown_map(&mut self) {
        self.markers.clear();
        if self.map.take().is_some() {
            info!("Map released, continuing in list-only mode");
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.current()
    }

    #[must_use]
    pub fn has_map(&self) -> bool {
        self.map.is_some()
    }

    /// Keys of the markers currently on the map
    #[must_use]
    pub fn marker_keys(&self) -> Vec<&str> {
        self.markers.keys().collect()
    }

    /// Result list with the selected card flagged
    #[must_use]
    pub fn result_cards(&self) -> Vec<ResultCard> {
        let selected = self.selection().map(|s| s.airport.iata.as_str());
        presenter::result_cards(&self.results, selected)
    }

    /// Assessment for the current selection
    #[must_use]
    pub fn assessment(&self) -> Option<AssessmentView> {
        self.selection().map(AssessmentView::from)
    }
}
