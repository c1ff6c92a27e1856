use eframe::egui;
use munros::*;

use super::MapCanvas;

/// Search bar, view controls and the peak popup.
pub struct Hud {
    /// Text shown in the search input. Mirrors the query of the map's search.
    search_input: String,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            search_input: String::new(),
        }
    }

    pub fn search_bar(&mut self, ctx: &egui::Context, map: &mut MapState) {
        egui::TopBottomPanel::top("Search Bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.search_input)
                        .hint_text("Search here")
                        .desired_width(320.0),
                );
                if input.changed() {
                    map.on_query_change(self.search_input.clone());
                }

                if ui.button("Reset view").clicked() {
                    map.reset_view();
                }

                ui.label(format!(
                    "{} munros | zoom {:.1}",
                    map.store().len(),
                    map.view().zoom
                ));
            });

            let mut picked = None;
            for suggestion in map.search().suggestions() {
                if ui.selectable_label(false, &suggestion.name).clicked() {
                    picked = Some(suggestion.clone());
                }
            }
            if let Some(suggestion) = picked {
                map.on_suggestion_picked(&suggestion);
                self.search_input = map.search().query().to_string();
            }
        });
    }

    /// Shows the popup for the selected peak, anchored where the popup overlay says.
    pub fn popup(&mut self, ctx: &egui::Context, map: &mut MapState, canvas: &MapCanvas) {
        let (content, anchor) = match (map.popup().content(), map.popup().position()) {
            (Some(content), Some(anchor)) => (content.clone(), anchor),
            _ => return,
        };
        let anchor = canvas
            .screen
            .project(map.view(), &lonlat_to_world(anchor));

        let mut action = None;
        egui::Window::new("Peak")
            .id(egui::Id::new("peak popup"))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .pivot(egui::Align2::CENTER_BOTTOM)
            .fixed_pos(canvas.to_pos(&anchor))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(&content.text);
                    let closer = ui.small_button(DISMISS_LABEL);
                    if closer.clicked() {
                        closer.surrender_focus();
                        action = Some(PopupAction::Dismiss);
                    }
                });
                if ui.button(content.zoom_label).clicked() {
                    action = Some(PopupAction::ZoomToPeak);
                }
            });

        if let Some(action) = action {
            map.on_popup_action(action);
        }
    }
}
