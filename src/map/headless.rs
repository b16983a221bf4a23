//! In-process map without any rendering.
//!
//! Keeps the map and marker state in memory and logs every change, so the
//! workflow can run in a terminal or under test. A [`HeadlessView`] gives
//! read access to that state and can simulate marker clicks.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::{ClickCallback, MapHandle, MapProvider, MarkerHandle, MarkerOptions};
use crate::Result;
use crate::error::FlightRiskError;
use crate::models::LatLng;

struct MarkerSlot {
    options: MarkerOptions,
    callback: Option<Arc<dyn Fn() + Send + Sync>>,
}

/// Map state. Markers are keyed by a creation id and dropped on removal.
#[derive(Default)]
struct HeadlessState {
    container: Option<String>,
    center: Option<LatLng>,
    zoom: Option<u8>,
    markers: BTreeMap<u64, MarkerSlot>,
    next_marker: u64,
}

type SharedState = Arc<Mutex<HeadlessState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, HeadlessState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Map provider backed by in-memory state
#[derive(Clone, Default)]
pub struct HeadlessMapProvider {
    state: SharedState,
    api_key: Option<String>,
    require_key: bool,
}

impl HeadlessMapProvider {
    /// Provider that always starts
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that refuses to start without a non-empty API key
    #[must_use]
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            api_key,
            require_key: true,
            ..Self::default()
        }
    }

    /// Read access to the state of maps created by this provider
    #[must_use]
    pub fn view(&self) -> HeadlessView {
        HeadlessView {
            state: Arc::clone(&self.state),
        }
    }
}

impl MapProvider for HeadlessMapProvider {
    fn create_map(&self, container: &str, center: LatLng, zoom: u8) -> Result<Box<dyn MapHandle>> {
        if self.require_key && self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err(FlightRiskError::map_unavailable(
                "Map API key not configured",
            ));
        }

        let mut state = lock(&self.state);
        state.container = Some(container.to_string());
        state.center = Some(center);
        state.zoom = Some(zoom);
        drop(state);

        debug!("Created headless map in '{}'", container);
        Ok(Box::new(HeadlessMap {
            state: Arc::clone(&self.state),
        }))
    }
}

struct HeadlessMap {
    state: SharedState,
}

impl MapHandle for HeadlessMap {
    fn set_center(&mut self, center: LatLng) {
        debug!("Map center -> ({:.4}, {:.4})", center.lat, center.lng);
        lock(&self.state).center = Some(center);
    }

    fn set_zoom(&mut self, zoom: u8) {
        debug!("Map zoom -> {}", zoom);
        lock(&self.state).zoom = Some(zoom);
    }

    fn create_marker(&mut self, options: MarkerOptions) -> Box<dyn MarkerHandle> {
        debug!("Marker + {} ({})", options.label, options.title);
        let mut state = lock(&self.state);
        let id = state.next_marker;
        state.next_marker += 1;
        state.markers.insert(
            id,
            MarkerSlot {
                options,
                callback: None,
            },
        );
        Box::new(HeadlessMarker {
            state: Arc::clone(&self.state),
            id,
        })
    }
}

struct HeadlessMarker {
    state: SharedState,
    id: u64,
}

impl MarkerHandle for HeadlessMarker {
    fn on_click(&mut self, callback: ClickCallback) {
        if let Some(marker) = lock(&self.state).markers.get_mut(&self.id) {
            marker.callback = Some(Arc::from(callback));
        }
    }

    fn remove(&mut self) {
        if let Some(marker) = lock(&self.state).markers.remove(&self.id) {
            debug!("Marker - {}", marker.options.label);
        }
    }
}

/// Observer for a headless map's state
#[derive(Clone)]
pub struct HeadlessView {
    state: SharedState,
}

impl HeadlessView {
    #[must_use]
    pub fn center(&self) -> Option<LatLng> {
        lock(&self.state).center
    }

    #[must_use]
    pub fn zoom(&self) -> Option<u8> {
        lock(&self.state).zoom
    }

    #[must_use]
    pub fn container(&self) -> Option<String> {
        lock(&self.state).container.clone()
    }

    /// Markers currently placed on the map, in creation order
    #[must_use]
    pub fn live_markers(&self) -> Vec<MarkerOptions> {
        lock(&self.state)
            .markers
            .values()
            .map(|m| m.options.clone())
            .collect()
    }

    /// Labels of the live markers, in creation order
    #[must_use]
    pub fn live_labels(&self) -> Vec<String> {
        self.live_markers().into_iter().map(|m| m.label).collect()
    }

    /// Markers the map is holding state for
    #[must_use]
    pub fn marker_count(&self) -> usize {
        lock(&self.state).markers.len()
    }

    /// Click the live marker labelled `label`. Returns false if there is none.
    pub fn click(&self, label: &str) -> bool {
        let callback = lock(&self.state)
            .markers
            .values()
            .find(|m| m.options.label == label)
            .and_then(|m| m.callback.clone());

        // Run outside the lock so the callback may touch the map
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}
