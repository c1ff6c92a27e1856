use crate::*;

/// Opacity of the map layers while a peak is selected.
pub const DIMMED_OPACITY: f32 = 0.5;

/// Map interactions besides clicking.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Interactions {
    pub pan: bool,
    pub zoom: bool,
}

impl Interactions {
    pub const ALL: Interactions = Interactions {
        pan: true,
        zoom: true,
    };
    pub const NONE: Interactions = Interactions {
        pan: false,
        zoom: false,
    };
}

impl Default for Interactions {
    fn default() -> Self {
        Self::ALL
    }
}

/// Outcome of a selection call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    Selected(usize),
    Cleared,
    Ignored,
}

/// Everything a selection change touches.
pub struct SelectionTargets<'a> {
    pub store: &'a LocationStore,
    pub markers: &'a mut MarkerSet,
    pub popup: &'a mut PopupOverlay,
    pub view: &'a ViewController,
}

/// Tracks the selected location.
///
/// Marker styling, popup visibility, layer opacity and which interactions are active all
/// follow from the single `selected` value. Each call applies every side effect before it
/// returns, so callers never observe a half applied transition.
#[derive(Debug)]
pub struct SelectionController {
    selected: Option<usize>,
    interactions: Interactions,
}

impl SelectionController {
    /// `interactions` are the ones enabled while nothing is selected.
    pub fn new(interactions: Interactions) -> Self {
        Self {
            selected: None,
            interactions,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    /// Selects the marker for `index`.
    ///
    /// While something is selected any call dismisses the selection instead, whichever
    /// marker was clicked. Indices outside the current snapshot are ignored.
    pub fn select_marker(&mut self, index: usize, targets: SelectionTargets) -> Transition {
        if self.selected.is_some() {
            return self.clear(targets);
        }

        let location = match targets.store.get(index) {
            Some(location) => location,
            None => {
                log::debug!(
                    "Ignoring selection of {}, only {} locations are loaded.",
                    index,
                    targets.store.len()
                );
                return Transition::Ignored;
            }
        };

        self.selected = Some(index);
        targets.markers.restyle(self.selected);
        targets.popup.show(index, location, targets.view.center());
        log::info!("Selected {} ({}).", location.name, index);

        Transition::Selected(index)
    }

    /// Returns to the idle state. Calling this while idle changes nothing.
    pub fn clear(&mut self, targets: SelectionTargets) -> Transition {
        if let Some(index) = self.selected.take() {
            log::info!("Cleared selection of {}.", index);
        }
        targets.markers.restyle(None);
        targets.popup.hide();
        Transition::Cleared
    }

    /// Opacity for the background and marker layers.
    pub fn layer_opacity(&self) -> f32 {
        if self.selected.is_some() {
            DIMMED_OPACITY
        } else {
            1.0
        }
    }

    /// Interactions that are currently active.
    pub fn interactions(&self) -> Interactions {
        if self.selected.is_some() {
            Interactions::NONE
        } else {
            self.interactions
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        store: LocationStore,
        markers: MarkerSet,
        popup: PopupOverlay,
        view: ViewController,
    }

    impl Fixture {
        fn new() -> Self {
            let store = LocationStore::new(vec![
                Location::new("Ben Nevis", 56.796891, -5.003675, 1345.0),
                Location::new("Ben Macdui", 57.070368, -3.669099, 1309.0),
                Location::new("Braeriach", 57.078051, -3.728539, 1296.0),
            ]);
            let mut markers = MarkerSet::new(CompletedSet::new(vec![0]));
            markers.sync(&store);
            Self {
                store,
                markers,
                popup: PopupOverlay::new(),
                view: ViewController::new(ViewOptions::default()),
            }
        }

        fn targets(&mut self) -> SelectionTargets {
            SelectionTargets {
                store: &self.store,
                markers: &mut self.markers,
                popup: &mut self.popup,
                view: &self.view,
            }
        }

        fn selected_markers(&self) -> Vec<usize> {
            self.markers
                .markers()
                .iter()
                .filter(|m| m.visual_state == VisualState::Selected)
                .map(|m| m.location_index)
                .collect()
        }
    }

    #[test]
    fn select_from_idle() {
        let mut f = Fixture::new();
        let mut selection = SelectionController::new(Interactions::ALL);

        assert_eq!(selection.select_marker(2, f.targets()), Transition::Selected(2));
        assert_eq!(selection.selected(), Some(2));
        assert_eq!(selection.layer_opacity(), 0.5);
        assert_eq!(selection.interactions(), Interactions::NONE);
        assert_eq!(f.selected_markers(), vec![2]);
        assert_eq!(f.popup.content().unwrap().text, "Braeriach : 1296");
        assert_eq!(f.popup.position(), Some(f.view.center()));
    }

    #[test]
    fn any_select_while_selected_clears() {
        for second in [0, 1, 2, 99] {
            let mut f = Fixture::new();
            let mut selection = SelectionController::new(Interactions::ALL);
            selection.select_marker(1, f.targets());

            assert_eq!(selection.select_marker(second, f.targets()), Transition::Cleared);
            assert_eq!(selection.selected(), None);
            assert!(f.selected_markers().is_empty());
            assert!(!f.popup.is_visible());
        }
    }

    #[test]
    fn clear_restores_everything_and_is_idempotent() {
        let mut f = Fixture::new();
        let mut selection = SelectionController::new(Interactions::ALL);
        selection.select_marker(0, f.targets());

        selection.clear(f.targets());
        let once: Vec<_> = f.markers.markers().to_vec();
        assert_eq!(selection.layer_opacity(), 1.0);
        assert_eq!(selection.interactions(), Interactions::ALL);
        assert!(!f.popup.is_visible());

        selection.clear(f.targets());
        assert_eq!(f.markers.markers(), &once[..]);
        assert_eq!(selection.selected(), None);
        assert_eq!(f.markers.get(0).unwrap().visual_state, VisualState::Completed);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut f = Fixture::new();
        let mut selection = SelectionController::new(Interactions::ALL);
        assert_eq!(selection.select_marker(3, f.targets()), Transition::Ignored);
        assert_eq!(selection.selected(), None);
        assert!(!f.popup.is_visible());
    }

    #[test]
    fn configured_interactions_apply_when_idle() {
        let only_zoom = Interactions {
            pan: false,
            zoom: true,
        };
        let mut f = Fixture::new();
        let mut selection = SelectionController::new(only_zoom);
        assert_eq!(selection.interactions(), only_zoom);
        selection.select_marker(1, f.targets());
        assert_eq!(selection.interactions(), Interactions::NONE);
    }

    #[test]
    fn at_most_one_selected_across_sequences() {
        let mut f = Fixture::new();
        let mut selection = SelectionController::new(Interactions::ALL);
        let script = [0usize, 1, 2, 2, 1, 0, 5, 1];
        for (step, index) in script.iter().enumerate() {
            if step % 3 == 2 {
                selection.clear(f.targets());
            } else {
                selection.select_marker(*index, f.targets());
            }
            assert!(f.selected_markers().len() <= 1);
            assert_eq!(f.selected_markers().first().copied(), selection.selected());
            assert_eq!(f.popup.is_visible(), selection.is_selected());
        }
    }
}
