use serde_derive::{Deserialize, Serialize};
use std::sync::Arc;

use crate::LonLat;

static BUNDLED_MUNROS: &str = include_str!("../../data/munros.json");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("the bundled dataset is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A named hill with its position and height.
///
/// Serializes to the same shape the `/api/munros` endpoint delivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "hillname")]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "metres")]
    pub elevation_metres: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, elevation_metres: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            elevation_metres,
        }
    }

    pub fn lonlat(&self) -> LonLat {
        LonLat::new(self.longitude, self.latitude)
    }
}

/// Parses the dataset compiled into the binary.
pub fn bundled_locations() -> Result<Vec<Location>, DatasetError> {
    Ok(serde_json::from_str(BUNDLED_MUNROS)?)
}

/// Holds the current list of locations.
///
/// The list is never edited in place. Loading a new list replaces the snapshot and bumps
/// the generation, which is what consumers compare to decide whether to rebuild.
#[derive(Debug, Clone)]
pub struct LocationStore {
    snapshot: Arc<[Location]>,
    generation: u64,
}

impl LocationStore {
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            snapshot: locations.into(),
            generation: 0,
        }
    }

    /// A store seeded with the bundled dataset, or an empty one if it cannot be read.
    pub fn bundled() -> Self {
        match bundled_locations() {
            Ok(locations) => {
                log::info!("Loaded {} bundled locations.", locations.len());
                Self::new(locations)
            }
            Err(e) => {
                log::error!("Unable to load bundled locations. Reason:\r\n{}", e);
                Self::new(vec![])
            }
        }
    }

    pub fn replace(&mut self, locations: Vec<Location>) {
        self.snapshot = locations.into();
        self.generation += 1;
        log::debug!(
            "Location snapshot {} holds {} locations.",
            self.generation,
            self.snapshot.len()
        );
    }

    pub fn locations(&self) -> &[Location] {
        &self.snapshot
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<[Location]> {
        self.snapshot.clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, index: usize) -> Option<&Location> {
        self.snapshot.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Index of the first location carrying `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.snapshot.iter().position(|l| l.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses() {
        let locations = bundled_locations().unwrap();
        assert!(!locations.is_empty());
        assert_eq!(locations[0].name, "Ben Nevis");
        assert_eq!(locations[0].elevation_metres, 1345.0);
    }

    #[test]
    fn wire_names_are_used() {
        let json = r#"[{"hillname":"Ben Lomond","latitude":56.19,"longitude":-4.63,"metres":974}]"#;
        let locations: Vec<Location> = serde_json::from_str(json).unwrap();
        assert_eq!(locations, vec![Location::new("Ben Lomond", 56.19, -4.63, 974.0)]);
    }

    #[test]
    fn replace_bumps_generation() {
        let mut store = LocationStore::new(vec![Location::new("A", 56.0, -4.0, 1000.0)]);
        let before = store.snapshot();
        store.replace(vec![]);
        assert_eq!(store.generation(), 1);
        assert!(store.is_empty());
        // Old holders keep their snapshot.
        assert_eq!(before.len(), 1);
    }

    #[test]
    fn position_of_returns_first_match() {
        let store = LocationStore::new(vec![
            Location::new("Geal-charn", 56.83, -4.51, 1132.0),
            Location::new("Geal-charn", 56.89, -4.45, 1049.0),
        ]);
        assert_eq!(store.position_of("Geal-charn"), Some(0));
        assert_eq!(store.position_of("Ben Hope"), None);
    }
}
