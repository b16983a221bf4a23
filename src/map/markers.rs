//! Marker Synchronizer
//!
//! Keeps the set of markers on the map equal to the current search results.
//! Every sync tears down all existing markers and recreates them, which is
//! fine for a result set bounded by the airport table.

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use super::{MapHandle, MarkerHandle, MarkerOptions};
use crate::airports::SearchResult;
use crate::app::AppEvent;

/// Owns every marker handle currently on the map
pub struct MarkerSynchronizer {
    markers: Vec<(String, Box<dyn MarkerHandle>)>,
    events: UnboundedSender<AppEvent>,
}

impl MarkerSynchronizer {
    /// Marker clicks are delivered to `events` as [`AppEvent::Select`]
    #[must_use]
    pub fn new(events: UnboundedSender<AppEvent>) -> Self {
        Self {
            markers: Vec::new(),
            events,
        }
    }

    /// Replace all markers with one per result.
    ///
    /// Without a map this does nothing, so list-only mode never holds
    /// marker handles.
    pub fn sync(&mut self, map: Option<&mut dyn MapHandle>, results: &[SearchResult]) {
        let Some(map) = map else {
            return;
        };

        self.clear();

        for result in results {
            let record = result.record.clone();
            let mut marker = map.create_marker(MarkerOptions {
                position: record.position(),
                label: record.iata.clone(),
                title: record.name.clone(),
            });

            let events = self.events.clone();
            marker.on_click(Box::new(move || {
                // A closed channel means the app is shutting down
                if events.send(AppEvent::Select(record.clone())).is_err() {
                    debug!("Marker click for {} after shutdown", record.iata);
                }
            }));

            self.markers.push((result.id().to_string(), marker));
        }

        debug!("Synchronized {} markers", self.markers.len());
    }

    /// Remove every marker this synchronizer placed
    pub fn clear(&mut self) {
        for (_, mut marker) in self.markers.drain(..) {
            marker.remove();
        }
    }

    /// Keys of the live markers, in result order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(|(key, _)| key.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Drop for MarkerSynchronizer {
    fn drop(&mut self) {
        self.clear();
    }
}
