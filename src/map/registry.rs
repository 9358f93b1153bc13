use std::sync::Arc;

use parking_lot::RwLock;

use super::types::{Control, Marker};

/// Everything a host has attached, in attach order
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    banner: Option<String>,
    controls: Vec<Control>,
    markers: Vec<Marker>,
}

/// Registry shared between a render task and a draw loop
pub type SharedRegistry = Arc<RwLock<MarkerRegistry>>;

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedRegistry {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn set_banner(&mut self, text: &str) {
        self.banner = Some(text.to_string());
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Remove all markers. Banner and controls stay.
    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }
}
