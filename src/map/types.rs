use serde::Serialize;

use crate::severity::Color;

/// A position in map-widget order: longitude first
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        [p.lng, p.lat]
    }
}

/// Controls a host can attach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Pan and zoom buttons
    Navigation,
}

/// Detail callout owned by a marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    #[serde(skip)]
    pub title: String,
    #[serde(skip)]
    pub body: String,
    #[serde(skip)]
    pub updated_at: Option<String>,
    /// Markup shown by the web widget
    pub html: String,
    /// Distance from the anchor in pixels
    pub offset: u32,
}

/// On-map glyph for one station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LngLat,
    pub label: String,
    pub background: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    pub popup: Popup,
}
