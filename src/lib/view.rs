use crate::*;

/// Initial map center over the Highlands.
pub const DEFAULT_CENTER: LonLat = LonLat::new(-4.291472, 56.986051);
/// Overview zoom. The view never zooms out further than this.
pub const DEFAULT_ZOOM: f64 = 7.3;
/// Zoom used when navigating to a single peak.
pub const DETAIL_ZOOM: f64 = 13.0;
pub const MAX_ZOOM: f64 = 19.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub center: LonLat,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    pub default_center: LonLat,
    pub default_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            min_zoom: DEFAULT_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

/// Owns the map center and zoom.
pub struct ViewController {
    state: ViewState,
    options: ViewOptions,
}

impl ViewController {
    pub fn new(options: ViewOptions) -> Self {
        let mut view = Self {
            state: ViewState {
                center: options.default_center,
                zoom: options.default_zoom,
            },
            options,
        };
        view.set_zoom(view.state.zoom);
        view
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn center(&self) -> LonLat {
        self.state.center
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    pub fn center_on(&mut self, location: &Location, zoom: f64) {
        self.state.center = location.lonlat();
        self.set_zoom(zoom);
        log::debug!(
            "Centered view on {} {} at zoom {:.2}.",
            location.name,
            self.state.center,
            self.state.zoom
        );
    }

    /// Restores the default center and zoom.
    pub fn reset(&mut self) {
        self.state = ViewState {
            center: self.options.default_center,
            zoom: self.options.default_zoom,
        };
        self.set_zoom(self.state.zoom);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.state.zoom = zoom.max(self.options.min_zoom).min(self.options.max_zoom);
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.set_zoom(self.state.zoom + delta);
    }

    /// Moves the map along with a pointer drag of `delta` pixels.
    pub fn pan_by_pixels(&mut self, delta: &glm::DVec2) {
        let resolution = resolution_for_zoom(self.state.zoom);
        let center = lonlat_to_world(self.state.center);
        let moved = center + glm::vec2(-delta.x * resolution, delta.y * resolution);
        self.state.center = world_to_lonlat(&moved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ben_lomond() -> Location {
        Location::new("Ben Lomond", 56.190160, -4.633013, 974.0)
    }

    #[test]
    fn starts_at_default() {
        let view = ViewController::new(ViewOptions::default());
        assert_eq!(view.center(), LonLat::new(-4.291472, 56.986051));
        assert_eq!(view.zoom(), 7.3);
    }

    #[test]
    fn center_on_then_reset_restores_default_exactly() {
        let mut view = ViewController::new(ViewOptions::default());
        view.center_on(&ben_lomond(), DETAIL_ZOOM);
        assert_eq!(view.center(), LonLat::new(-4.633013, 56.190160));
        assert_eq!(view.zoom(), 13.0);

        view.reset();
        assert_eq!(
            *view.state(),
            ViewState {
                center: LonLat::new(-4.291472, 56.986051),
                zoom: 7.3
            }
        );
    }

    #[test]
    fn zoom_never_goes_below_overview() {
        let mut view = ViewController::new(ViewOptions::default());
        view.zoom_by(-3.0);
        assert_eq!(view.zoom(), 7.3);
        view.set_zoom(2.0);
        assert_eq!(view.zoom(), 7.3);
        view.set_zoom(40.0);
        assert_eq!(view.zoom(), MAX_ZOOM);
    }

    #[test]
    fn dragging_right_moves_center_west() {
        let mut view = ViewController::new(ViewOptions::default());
        view.pan_by_pixels(&glm::vec2(100.0, 0.0));
        assert!(view.center().lon < DEFAULT_CENTER.lon);
        assert!((view.center().lat - DEFAULT_CENTER.lat).abs() < 1e-9);
    }

    #[test]
    fn dragging_down_moves_center_north() {
        let mut view = ViewController::new(ViewOptions::default());
        view.pan_by_pixels(&glm::vec2(0.0, 100.0));
        assert!(view.center().lat > DEFAULT_CENTER.lat);
    }
}
