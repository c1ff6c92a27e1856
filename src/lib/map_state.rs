use crate::*;

/// Indices of the peaks already climbed.
pub const COMPLETED: [usize; 4] = [0, 23, 45, 107];

#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub view: ViewOptions,
    /// Interactions enabled while nothing is selected.
    pub interactions: Interactions,
    pub completed: CompletedSet,
    /// Zoom used by "Zoom to peak" and by search picks.
    pub detail_zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            view: ViewOptions::default(),
            interactions: Interactions::ALL,
            completed: CompletedSet::new(COMPLETED.iter().copied()),
            detail_zoom: DETAIL_ZOOM,
        }
    }
}

/// Owns all map state and exposes one handler per user event.
///
/// Every handler applies its complete transition before returning.
pub struct MapState {
    store: LocationStore,
    markers: MarkerSet,
    selection: SelectionController,
    popup: PopupOverlay,
    search: SearchController,
    view: ViewController,
    detail_zoom: f64,
}

impl MapState {
    pub fn new(store: LocationStore, options: MapOptions) -> Self {
        let mut markers = MarkerSet::new(options.completed);
        markers.sync(&store);
        let mut search = SearchController::new();
        search.sync(&store);

        Self {
            store,
            markers,
            selection: SelectionController::new(options.interactions),
            popup: PopupOverlay::new(),
            search,
            view: ViewController::new(options.view),
            detail_zoom: options.detail_zoom,
        }
    }

    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    pub fn markers(&self) -> &[Marker] {
        self.markers.markers()
    }

    pub fn popup(&self) -> &PopupOverlay {
        &self.popup
    }

    pub fn search(&self) -> &SearchController {
        &self.search
    }

    pub fn view(&self) -> &ViewState {
        self.view.state()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn layer_opacity(&self) -> f32 {
        self.selection.layer_opacity()
    }

    pub fn interactions(&self) -> Interactions {
        self.selection.interactions()
    }

    pub fn select_marker(&mut self, index: usize) -> Transition {
        let Self {
            store,
            markers,
            selection,
            popup,
            view,
            ..
        } = self;
        selection.select_marker(
            index,
            SelectionTargets {
                store,
                markers,
                popup,
                view,
            },
        )
    }

    pub fn clear(&mut self) -> Transition {
        let Self {
            store,
            markers,
            selection,
            popup,
            view,
            ..
        } = self;
        selection.clear(SelectionTargets {
            store,
            markers,
            popup,
            view,
        })
    }

    /// A click on the map canvas at `point` (pixels relative to the canvas).
    ///
    /// While a peak is selected every click dismisses it. Otherwise a click on a marker
    /// selects it.
    pub fn on_map_click(&mut self, screen: &Screen, point: &glm::DVec2) -> Transition {
        if self.selection.is_selected() {
            return self.clear();
        }
        match Collider::get_hovered_marker(self.markers.markers(), screen, self.view.state(), point) {
            Some(index) => self.select_marker(index),
            None => self.clear(),
        }
    }

    pub fn on_popup_action(&mut self, action: PopupAction) -> Transition {
        match action {
            PopupAction::Dismiss => self.clear(),
            PopupAction::ZoomToPeak => self.zoom_to_selected(),
        }
    }

    /// Navigates to the selected peak and dismisses the selection.
    pub fn zoom_to_selected(&mut self) -> Transition {
        if let Some(location) = self.selection.selected().and_then(|i| self.store.get(i)) {
            self.view.center_on(location, self.detail_zoom);
        }
        self.clear()
    }

    pub fn on_query_change(&mut self, text: impl Into<String>) {
        self.search.on_query_change(text, &self.store);
    }

    /// Navigates to the picked location and clears the search input.
    ///
    /// Returns the resolved location index.
    pub fn on_suggestion_picked(&mut self, suggestion: &Suggestion) -> Option<usize> {
        let index = self.search.on_suggestion_picked(suggestion, &self.store)?;
        if self.selection.is_selected() {
            self.clear();
        }
        let location = self.store.get(index)?;
        self.view.center_on(location, self.detail_zoom);
        Some(index)
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
        log::debug!("View reset.");
    }

    /// Pans by a pointer drag of `delta` pixels. Returns `false` if panning is disabled.
    pub fn on_drag(&mut self, delta: &glm::DVec2) -> bool {
        if !self.selection.interactions().pan {
            return false;
        }
        self.view.pan_by_pixels(delta);
        true
    }

    /// Changes the zoom by `delta` levels. Returns `false` if zooming is disabled.
    pub fn on_zoom(&mut self, delta: f64) -> bool {
        if !self.selection.interactions().zoom {
            return false;
        }
        self.view.zoom_by(delta);
        true
    }

    /// Swaps in a newly loaded location list.
    ///
    /// An empty list keeps the current locations. Otherwise the selection is dropped and
    /// markers and suggestions are derived from the new list.
    pub fn replace_locations(&mut self, locations: Vec<Location>) -> bool {
        if locations.is_empty() {
            log::info!(
                "No new locations, keeping the {} current ones.",
                self.store.len()
            );
            return false;
        }

        self.clear();
        self.store.replace(locations);
        self.markers.sync(&self.store);
        self.search.sync(&self.store);
        log::info!("Showing {} locations.", self.store.len());
        true
    }
}
