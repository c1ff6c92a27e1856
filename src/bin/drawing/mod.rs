mod map;
pub mod ui;

use eframe::egui;

pub use map::*;

use crate::app_state::AppState;
use ui::Hud;

pub struct MunroApp {
    app_state: AppState,
    hud: Hud,
}

impl MunroApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let ctx = cc.egui_ctx.clone();
        Self {
            app_state: AppState::new(move || ctx.request_repaint()),
            hud: Hud::new(),
        }
    }
}

impl eframe::App for MunroApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app_state.load_locations();
        let map = &mut self.app_state.map;

        if map.selected().is_some() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            map.clear();
        }

        self.hud.search_bar(ctx, map);

        let canvas = egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| MapCanvas::show(ui, map))
            .inner;

        self.hud.popup(ctx, map, &canvas);
    }
}
