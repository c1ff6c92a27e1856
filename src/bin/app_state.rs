use crate::config::CONFIG;
use munros::*;

pub struct AppState {
    pub map: MapState,
    loader: Option<LocationLoader>,
}

impl AppState {
    /// Starts with the bundled munros and, if enabled, requests the remote list.
    ///
    /// `notify` is called from the loader thread once the remote list arrived.
    pub fn new(notify: impl FnOnce() + Send + 'static) -> Self {
        let map = MapState::new(LocationStore::bundled(), CONFIG.map.options());

        let loader = if CONFIG.feed.enabled {
            let feed = CONFIG.feed.feed_config();
            log::info!("Requesting locations from {}.", feed.url());
            Some(LocationLoader::spawn(feed, notify))
        } else {
            None
        };

        Self { map, loader }
    }

    /// Swaps in the remote locations once the loader is done.
    pub fn load_locations(&mut self) {
        if let Some(locations) = self.loader.as_mut().and_then(|l| l.try_finish()) {
            self.map.replace_locations(locations);
            self.loader = None;
        }
    }
}
