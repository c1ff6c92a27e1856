use std::collections::BTreeSet;
use std::f64::consts::PI;

use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VisualState {
    Default,
    Completed,
    Selected,
}

/// RGBA color with straight alpha.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A regular polygon glyph drawn at the marker position.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
    pub points: usize,
    /// Distance from the center to each vertex in pixels.
    pub radius: f64,
}

impl MarkerStyle {
    const fn triangle(fill: Color) -> Self {
        Self {
            fill,
            stroke: Color::WHITE,
            stroke_width: 1.0,
            points: 3,
            radius: 12.0,
        }
    }

    /// Vertices of the glyph around `center` in screen space, the first one pointing up.
    pub fn outline(&self, center: &glm::DVec2) -> Vec<glm::DVec2> {
        (0..self.points)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / self.points as f64;
                glm::vec2(
                    center.x + self.radius * angle.sin(),
                    center.y - self.radius * angle.cos(),
                )
            })
            .collect()
    }
}

pub static DEFAULT_STYLE: MarkerStyle = MarkerStyle::triangle(Color::RED);
pub static SELECTED_STYLE: MarkerStyle = MarkerStyle::triangle(Color::BLUE);
pub static COMPLETED_STYLE: MarkerStyle = MarkerStyle::triangle(Color::GREEN);

impl VisualState {
    pub fn style(&self) -> &'static MarkerStyle {
        match self {
            VisualState::Default => &DEFAULT_STYLE,
            VisualState::Completed => &COMPLETED_STYLE,
            VisualState::Selected => &SELECTED_STYLE,
        }
    }
}

/// Location indices that count as already climbed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletedSet(BTreeSet<usize>);

impl CompletedSet {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// The map representation of one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub location_index: usize,
    /// Position in world space (EPSG:3857 metres).
    pub position: glm::DVec2,
    pub visual_state: VisualState,
}

/// The resting state of a marker when it is not selected.
fn base_state(completed: &CompletedSet, index: usize) -> VisualState {
    if completed.contains(index) {
        VisualState::Completed
    } else {
        VisualState::Default
    }
}

/// Resolves the visual state of the marker for `index`. Selection wins over completion.
pub fn style_for(completed: &CompletedSet, index: usize, selected: Option<usize>) -> VisualState {
    if selected == Some(index) {
        VisualState::Selected
    } else {
        base_state(completed, index)
    }
}

/// Creates one unselected marker per location, in list order.
pub fn rebuild(locations: &[Location], completed: &CompletedSet) -> Vec<Marker> {
    locations
        .iter()
        .enumerate()
        .map(|(index, location)| Marker {
            location_index: index,
            position: lonlat_to_world(location.lonlat()),
            visual_state: base_state(completed, index),
        })
        .collect()
}

/// All markers of the current location snapshot.
pub struct MarkerSet {
    markers: Vec<Marker>,
    completed: CompletedSet,
    /// Generation of the snapshot the markers were built from.
    generation: Option<u64>,
}

impl MarkerSet {
    pub fn new(completed: CompletedSet) -> Self {
        Self {
            markers: vec![],
            completed,
            generation: None,
        }
    }

    /// Rebuilds the markers if the store holds a different snapshot than last time.
    ///
    /// Returns `true` if a rebuild happened.
    pub fn sync(&mut self, store: &LocationStore) -> bool {
        if self.generation == Some(store.generation()) {
            return false;
        }
        self.markers = rebuild(store.locations(), &self.completed);
        self.generation = Some(store.generation());
        log::debug!(
            "Rebuilt {} markers for snapshot {}.",
            self.markers.len(),
            store.generation()
        );
        true
    }

    /// Applies a selection to all markers at once.
    pub fn restyle(&mut self, selected: Option<usize>) {
        let completed = &self.completed;
        for marker in self.markers.iter_mut() {
            marker.visual_state = style_for(completed, marker.location_index, selected);
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn get(&self, index: usize) -> Option<&Marker> {
        self.markers.get(index)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn completed(&self) -> &CompletedSet {
        &self.completed
    }
}
