use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke};
use munros::*;

const BACKGROUND: Color32 = Color32::from_rgb(226, 233, 218);
const GRATICULE: Color32 = Color32::from_rgb(196, 206, 190);
const LABEL: Color32 = Color32::from_rgb(40, 40, 40);

/// Zoom levels per point of scroll.
const ZOOM_PER_SCROLL: f64 = 0.005;
/// From this zoom on markers carry their name.
const LABEL_ZOOM: f64 = 10.0;

/// The map area as drawn in the last frame.
pub struct MapCanvas {
    pub rect: Rect,
    pub screen: Screen,
}

impl MapCanvas {
    /// Handles pointer input on the map and draws it.
    pub fn show(ui: &mut egui::Ui, map: &mut MapState) -> Self {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas = Self {
            rect: response.rect,
            screen: Screen::new(response.rect.width() as f64, response.rect.height() as f64),
        };

        if response.dragged() {
            let delta = response.drag_delta();
            map.on_drag(&glm::vec2(delta.x as f64, delta.y as f64));
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                map.on_zoom(scroll as f64 * ZOOM_PER_SCROLL);
            }
        }

        if response.clicked() {
            if let Some(position) = response.interact_pointer_pos() {
                let local = position - canvas.rect.min;
                map.on_map_click(&canvas.screen, &glm::vec2(local.x as f64, local.y as f64));
            }
        }

        let opacity = map.layer_opacity();
        painter.rect_filled(canvas.rect, 0.0, BACKGROUND.gamma_multiply(opacity));
        canvas.draw_graticule(&painter, map.view(), opacity);
        canvas.draw_markers(&painter, map, opacity);

        canvas
    }

    /// Converts a canvas relative pixel into a window position.
    pub fn to_pos(&self, point: &glm::DVec2) -> Pos2 {
        Pos2::new(
            self.rect.min.x + point.x as f32,
            self.rect.min.y + point.y as f32,
        )
    }

    /// One line per full degree of longitude and latitude.
    fn draw_graticule(&self, painter: &egui::Painter, view: &ViewState, opacity: f32) {
        let stroke = Stroke::new(1.0, GRATICULE.gamma_multiply(opacity));
        let (south_west, north_east) = self.screen.visible_bounds(view);

        let mut lon = south_west.lon.floor();
        while lon <= north_east.lon.ceil() {
            let a = self.project(view, LonLat::new(lon, south_west.lat));
            let b = self.project(view, LonLat::new(lon, north_east.lat));
            painter.line_segment([a, b], stroke);
            lon += 1.0;
        }

        let mut lat = south_west.lat.floor();
        while lat <= north_east.lat.ceil() {
            let a = self.project(view, LonLat::new(south_west.lon, lat));
            let b = self.project(view, LonLat::new(north_east.lon, lat));
            painter.line_segment([a, b], stroke);
            lat += 1.0;
        }
    }

    fn draw_markers(&self, painter: &egui::Painter, map: &MapState, opacity: f32) {
        let view = map.view();
        let to_screen = self.screen.world_to_screen(view);

        for marker in map.markers() {
            let center = to_screen * glm::vec3(marker.position.x, marker.position.y, 1.0);
            let center = glm::vec2(center.x, center.y);
            let style = marker.visual_state.style();
            if !self.screen.contains(&center, style.radius) {
                continue;
            }

            let outline = style
                .outline(&center)
                .iter()
                .map(|p| self.to_pos(p))
                .collect::<Vec<_>>();
            painter.add(Shape::convex_polygon(
                outline,
                color(style.fill, opacity),
                Stroke::new(style.stroke_width, color(style.stroke, opacity)),
            ));

            if view.zoom >= LABEL_ZOOM {
                if let Some(location) = map.store().get(marker.location_index) {
                    painter.text(
                        self.to_pos(&(center + glm::vec2(0.0, style.radius))),
                        Align2::CENTER_TOP,
                        &location.name,
                        FontId::proportional(13.0),
                        LABEL.gamma_multiply(opacity),
                    );
                }
            }
        }
    }

    fn project(&self, view: &ViewState, coordinate: LonLat) -> Pos2 {
        self.to_pos(&self.screen.project(view, &lonlat_to_world(coordinate)))
    }
}

fn color(color: Color, opacity: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a).gamma_multiply(opacity)
}
