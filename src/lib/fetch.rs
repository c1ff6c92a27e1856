use crossbeam_channel::{bounded, Receiver, TryRecvError};
use std::thread::{spawn, JoinHandle};
use std::time::Duration;

use super::*;

pub const MUNROS_PATH: &str = "/api/munros";

/// Where the remote location list lives.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl FeedConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, MUNROS_PATH)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8000,
            timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("response from {url} is not a location list: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Fetches the location list from the feed.
pub fn fetch_locations(config: &FeedConfig) -> Result<Vec<Location>, FeedError> {
    let url = config.url();
    let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
    let response = agent
        .get(&url)
        .set("Accept", "application/json")
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(status, _) => FeedError::Status {
                url: url.clone(),
                status,
            },
            other => FeedError::Transport {
                url: url.clone(),
                reason: other.to_string(),
            },
        })?;

    response
        .into_json::<Vec<Location>>()
        .map_err(|source| FeedError::Decode { url, source })
}

/// Like [`fetch_locations`] but any failure yields an empty list.
pub fn fetch_locations_or_empty(config: &FeedConfig) -> Vec<Location> {
    match fetch_locations(config) {
        Ok(locations) => {
            log::info!("Fetched {} locations from {}.", locations.len(), config.url());
            locations
        }
        Err(e) => {
            log::warn!("Could not fetch locations. Reason:\r\n{}", e);
            vec![]
        }
    }
}

/// Runs the one feed request in the background.
pub struct LocationLoader {
    loader: Option<JoinHandle<()>>,
    channel: Receiver<Vec<Location>>,
}

impl LocationLoader {
    /// Starts the request. `notify` runs on the worker once the result is ready.
    pub fn spawn(config: FeedConfig, notify: impl FnOnce() + Send + 'static) -> Self {
        let (tx, rx) = bounded(1);
        let loader = spawn(move || {
            let locations = fetch_locations_or_empty(&config);
            if tx.send(locations).is_err() {
                log::debug!("Could not hand over the fetched locations. The app was most likely terminated.");
            }
            notify();
        });

        Self {
            loader: Some(loader),
            channel: rx,
        }
    }

    /// Returns the result once the request has finished. Yields `Some` at most once.
    pub fn try_finish(&mut self) -> Option<Vec<Location>> {
        let locations = match self.channel.try_recv() {
            Ok(locations) => locations,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                if self.loader.is_none() {
                    return None;
                }
                vec![]
            }
        };

        if let Some(loader) = self.loader.take() {
            if let Err(e) = loader.join() {
                log::error!("Failed to join the location loader thread. Reason:\r\n{:?}", e);
            }
        }
        Some(locations)
    }

    pub fn is_finished(&self) -> bool {
        self.loader.is_none()
    }
}

#[test]
fn test_feed_url() {
    let config = FeedConfig {
        host: "munros.example".to_string(),
        port: 8080,
        ..Default::default()
    };
    assert_eq!(config.url(), "http://munros.example:8080/api/munros");
    assert_eq!(FeedConfig::default().url(), "http://localhost:8000/api/munros");
}
