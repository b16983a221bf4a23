//! Map Provider contract
//!
//! The core never renders tiles itself. It drives a map through these traits:
//! one map handle per session, plus marker handles owned exclusively by the
//! [`MarkerSynchronizer`].

use tracing::{info, warn};

use crate::Result;
use crate::config::MapConfig;
use crate::models::LatLng;

pub mod headless;
pub mod markers;

pub use headless::{HeadlessMapProvider, HeadlessView};
pub use markers::MarkerSynchronizer;

/// Zoom applied when an airport is selected
pub const SELECTION_ZOOM: u8 = 10;

/// Callback fired when a marker is clicked
pub type ClickCallback = Box<dyn Fn() + Send + Sync>;

/// Placement and captions for a new marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    pub position: LatLng,
    /// Short text drawn on the pin (the IATA code)
    pub label: String,
    /// Hover text (the airport's full name)
    pub title: String,
}

/// Factory for map instances
pub trait MapProvider {
    /// Create a map in `container`, or fail if the provider cannot start
    /// (for example a missing or rejected credential).
    fn create_map(&self, container: &str, center: LatLng, zoom: u8) -> Result<Box<dyn MapHandle>>;
}

/// A live map instance
pub trait MapHandle: Send {
    fn set_center(&mut self, center: LatLng);
    fn set_zoom(&mut self, zoom: u8);
    fn create_marker(&mut self, options: MarkerOptions) -> Box<dyn MarkerHandle>;
}

/// A marker placed on a map
pub trait MarkerHandle: Send {
    fn on_click(&mut self, callback: ClickCallback);
    /// Release the marker's map placement
    fn remove(&mut self);
}

/// Create the initial map, degrading to list-only mode on failure
pub fn init_map(provider: &dyn MapProvider, config: &MapConfig) -> Option<Box<dyn MapHandle>> {
    let center = LatLng::new(config.initial_latitude, config.initial_longitude);
    match provider.create_map(&config.container, center, config.initial_zoom) {
        Ok(map) => {
            info!(
                "Map ready at ({:.4}, {:.4}) zoom {}",
                center.lat, center.lng, config.initial_zoom
            );
            Some(map)
        }
        Err(e) => {
            warn!("Map unavailable, continuing in list-only mode: {}", e);
            None
        }
    }
}
