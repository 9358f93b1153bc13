use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::Args;
use crate::map::LngLat;

/// Default basemap style
pub const DEFAULT_STYLE: &str = "mapbox://styles/mapbox/streets-v11";

/// Medellín, where the monitoring network lives
pub const DEFAULT_CENTER: LngLat = LngLat {
    lng: -75.5609589,
    lat: 6.2597828,
};

pub const DEFAULT_ZOOM: f64 = 10.0;

/// Map widget configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Token for the basemap tile service
    pub access_token: String,
    /// Basemap style reference
    pub style: String,
    /// Initial viewport center
    pub center: LngLat,
    /// Initial zoom level
    pub zoom: f64,
    /// Element id hosting the map canvas
    pub container_id: String,
    /// Element id showing the generation timestamp
    pub banner_id: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            style: DEFAULT_STYLE.to_string(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            container_id: "map".to_string(),
            banner_id: "update".to_string(),
        }
    }
}

impl MapConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            access_token: args.access_token.clone().unwrap_or_default(),
            style: args.style.clone(),
            center: LngLat::new(args.center_lng, args.center_lat),
            zoom: args.zoom,
            ..Self::default()
        }
    }
}

/// Shared application state
pub struct AppState {
    /// Shutdown flag
    pub should_quit: Arc<AtomicBool>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            should_quit: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Signal shutdown
    pub fn quit(&self) {
        self.should_quit.store(true, Ordering::SeqCst);
    }

    /// Check if shutdown requested
    pub fn is_quitting(&self) -> bool {
        self.should_quit.load(Ordering::SeqCst)
    }
}
