use munros::{CompletedSet, FeedConfig, Interactions, LonLat, MapOptions, ViewOptions};
use once_cell::sync::Lazy;
use serde_derive::Deserialize;
use std::time::Duration;

pub static CONFIG: Lazy<Config> = Lazy::new(|| Config::new().expect("Config could not be loaded."));

#[derive(Debug, Deserialize)]
pub struct General {
    pub log_level: log::Level,
}

#[derive(Debug, Deserialize)]
pub struct Feed {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl Feed {
    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            host: self.host.clone(),
            port: self.port,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MapInteractions {
    pub pan: bool,
    pub zoom: bool,
}

#[derive(Debug, Deserialize)]
pub struct Map {
    /// `[lon, lat]` in degrees.
    pub center: [f64; 2],
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub detail_zoom: f64,
    pub completed: Vec<usize>,
    pub interactions: MapInteractions,
}

impl Map {
    pub fn options(&self) -> MapOptions {
        MapOptions {
            view: ViewOptions {
                default_center: LonLat::new(self.center[0], self.center[1]),
                default_zoom: self.zoom,
                min_zoom: self.min_zoom,
                max_zoom: self.max_zoom,
            },
            interactions: Interactions {
                pan: self.interactions.pan,
                zoom: self.interactions.zoom,
            },
            completed: CompletedSet::new(self.completed.iter().copied()),
            detail_zoom: self.detail_zoom,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub general: General,
    pub feed: Feed,
    pub map: Map,
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            .build()?
            .try_deserialize()
    }
}
