use crate::*;

pub struct Collider {}

impl Collider {
    /// Returns the index of the topmost marker whose glyph contains `point`.
    ///
    /// Markers are drawn in list order, so later markers are on top and win.
    pub fn get_hovered_marker(
        markers: &[Marker],
        screen: &Screen,
        view: &ViewState,
        point: &glm::DVec2,
    ) -> Option<usize> {
        let to_screen = screen.world_to_screen(view);
        for marker in markers.iter().rev() {
            let center = to_screen * glm::vec3(marker.position.x, marker.position.y, 1.0);
            let center = glm::vec2(center.x, center.y);
            let style = marker.visual_state.style();
            if glm::distance(&center, point) > style.radius {
                continue;
            }
            if contains(&style.outline(&center), point) {
                return Some(marker.location_index);
            }
        }
        None
    }
}

/// Point in convex polygon test. The outline may wind either way.
fn contains(outline: &[glm::DVec2], point: &glm::DVec2) -> bool {
    let mut sign = 0.0f64;
    for (i, a) in outline.iter().enumerate() {
        let b = &outline[(i + 1) % outline.len()];
        let cross = (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    !outline.is_empty()
}
