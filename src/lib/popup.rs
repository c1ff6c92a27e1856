use crate::*;

pub const ZOOM_LABEL: &str = "Zoom to peak";
pub const DISMISS_LABEL: &str = "✖";

/// What the popup shows for the selected location.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub location_index: usize,
    /// `"{name} : {elevation}"`.
    pub text: String,
    pub zoom_label: &'static str,
}

/// User actions offered by the popup.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PopupAction {
    Dismiss,
    ZoomToPeak,
}

/// The detail popup. It is visible exactly when it has a position.
#[derive(Debug, Default)]
pub struct PopupOverlay {
    content: Option<PopupContent>,
    position: Option<LonLat>,
}

impl PopupOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, location_index: usize, location: &Location, position: LonLat) {
        self.content = Some(PopupContent {
            location_index,
            text: format!("{} : {}", location.name, location.elevation_metres),
            zoom_label: ZOOM_LABEL,
        });
        self.position = Some(position);
    }

    pub fn hide(&mut self) {
        self.content = None;
        self.position = None;
    }

    pub fn is_visible(&self) -> bool {
        self.position.is_some()
    }

    pub fn content(&self) -> Option<&PopupContent> {
        self.position.and(self.content.as_ref())
    }

    pub fn position(&self) -> Option<LonLat> {
        self.position
    }
}
