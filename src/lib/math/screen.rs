use super::*;
use crate::ViewState;

/// The pixel area the map is drawn into. Origin is the top left corner, y grows downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

impl Screen {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Transform from world space (EPSG:3857 metres) to screen pixels for the given view.
    pub fn world_to_screen(&self, view: &ViewState) -> glm::TMat3<f64> {
        let resolution = resolution_for_zoom(view.zoom);
        let center = lonlat_to_world(view.center);
        let to_screen_center = glm::translation2d(&glm::vec2(self.width / 2.0, self.height / 2.0));
        let zoom = glm::scaling2d(&glm::vec2(1.0 / resolution, -1.0 / resolution));
        let position = glm::translation2d(&-center);
        to_screen_center * zoom * position
    }

    pub fn screen_to_world(&self, view: &ViewState) -> glm::TMat3<f64> {
        glm::inverse(&self.world_to_screen(view))
    }

    pub fn project(&self, view: &ViewState, world: &glm::DVec2) -> glm::DVec2 {
        let p = self.world_to_screen(view) * glm::vec3(world.x, world.y, 1.0);
        glm::vec2(p.x, p.y)
    }

    pub fn unproject(&self, view: &ViewState, point: &glm::DVec2) -> glm::DVec2 {
        let p = self.screen_to_world(view) * glm::vec3(point.x, point.y, 1.0);
        glm::vec2(p.x, p.y)
    }

    /// Whether a pixel lies on screen, allowing `margin` pixels of overhang.
    pub fn contains(&self, point: &glm::DVec2, margin: f64) -> bool {
        point.x >= -margin
            && point.x <= self.width + margin
            && point.y >= -margin
            && point.y <= self.height + margin
    }

    /// The south-west and north-east corners of the visible area.
    pub fn visible_bounds(&self, view: &ViewState) -> (LonLat, LonLat) {
        let bottom_left = self.unproject(view, &glm::vec2(0.0, self.height));
        let top_right = self.unproject(view, &glm::vec2(self.width, 0.0));
        (world_to_lonlat(&bottom_left), world_to_lonlat(&top_right))
    }
}
