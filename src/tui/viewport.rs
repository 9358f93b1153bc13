//! Pan/zoom state for the terminal map.

use crate::map::LngLat;

pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 18.0;

/// Degrees of longitude shown at zoom 0 (a little more than the world, clamped)
const BASE_WIDTH: f64 = 360.0 * 4.0;

/// Fraction of the visible span moved per pan step
const PAN_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: LngLat,
    zoom: f64,
}

impl Viewport {
    pub fn new(center: LngLat, zoom: f64) -> Self {
        let mut viewport = Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        };
        viewport.recenter(center);
        viewport
    }

    pub fn center(&self) -> LngLat {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Visible (longitude, latitude) extent in degrees
    pub fn span(&self) -> (f64, f64) {
        let width = (BASE_WIDTH / 2f64.powf(self.zoom)).min(360.0);
        (width, (width / 2.0).min(180.0))
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        window(self.center.lng, self.span().0)
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        window(self.center.lat, self.span().1)
    }

    pub fn contains(&self, p: LngLat) -> bool {
        let [x0, x1] = self.x_bounds();
        let [y0, y1] = self.y_bounds();
        (x0..=x1).contains(&p.lng) && (y0..=y1).contains(&p.lat)
    }

    /// Move by whole pan steps; positive is east / north
    pub fn pan(&mut self, east: i32, north: i32) {
        let (width, height) = self.span();
        let target = LngLat::new(
            self.center.lng + width * PAN_STEP * east as f64,
            self.center.lat + height * PAN_STEP * north as f64,
        );
        self.recenter(target);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1.0).min(MAX_ZOOM);
        self.recenter(self.center);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - 1.0).max(MIN_ZOOM);
        self.recenter(self.center);
    }

    /// Keep the visible window inside the world
    fn recenter(&mut self, target: LngLat) {
        let (width, height) = self.span();
        self.center = LngLat::new(
            clamp_center(target.lng, width, 180.0),
            clamp_center(target.lat, height, 90.0),
        );
    }
}

fn clamp_center(value: f64, extent: f64, limit: f64) -> f64 {
    let half = extent / 2.0;
    value.clamp(-limit + half, limit - half)
}

fn window(center: f64, extent: f64) -> [f64; 2] {
    let half = extent / 2.0;
    [center - half, center + half]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DEFAULT_CENTER;

    #[test]
    fn test_city_zoom_span() {
        let viewport = Viewport::new(DEFAULT_CENTER, 10.0);
        let (width, height) = viewport.span();

        assert!((width - 1.40625).abs() < 1e-9);
        assert!((height - 0.703125).abs() < 1e-9);
        assert!(viewport.contains(LngLat::new(-75.56, 6.26)));
        assert!(!viewport.contains(LngLat::new(-74.08, 4.61)));
    }

    #[test]
    fn test_world_zoom_is_clamped() {
        let viewport = Viewport::new(DEFAULT_CENTER, 0.0);

        assert_eq!(viewport.x_bounds(), [-180.0, 180.0]);
        assert_eq!(viewport.y_bounds(), [-90.0, 90.0]);
    }

    #[test]
    fn test_pan_moves_center() {
        let mut viewport = Viewport::new(DEFAULT_CENTER, 10.0);
        let before = viewport.center();

        viewport.pan(1, 0);
        assert!(viewport.center().lng > before.lng);
        assert_eq!(viewport.center().lat, before.lat);

        viewport.pan(0, -2);
        assert!(viewport.center().lat < before.lat);
    }

    #[test]
    fn test_pan_stops_at_world_edge() {
        let mut viewport = Viewport::new(LngLat::new(179.9, 0.0), 10.0);
        viewport.pan(50, 0);

        assert!(viewport.x_bounds()[1] <= 180.0);
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = Viewport::new(DEFAULT_CENTER, 17.5);
        viewport.zoom_in();
        viewport.zoom_in();
        assert_eq!(viewport.zoom(), MAX_ZOOM);

        let mut viewport = Viewport::new(DEFAULT_CENTER, 0.5);
        viewport.zoom_out();
        assert_eq!(viewport.zoom(), MIN_ZOOM);
    }
}
