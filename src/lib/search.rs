use crate::*;

pub const MAX_SUGGESTIONS: usize = 5;
/// Queries up to this many characters produce no suggestions.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub index: usize,
    pub name: String,
}

/// Case insensitive check whether `query` is a prefix of `name`.
pub fn is_prefix_match(query: &str, name: &str) -> bool {
    let prefix: String = name.chars().take(query.chars().count()).collect();
    prefix.to_lowercase() == query.to_lowercase()
}

/// The first [`MAX_SUGGESTIONS`] locations whose name starts with `query`, in list order.
pub fn suggest(query: &str, locations: &[Location]) -> Vec<Suggestion> {
    if query.chars().count() <= MIN_QUERY_CHARS {
        return vec![];
    }
    locations
        .iter()
        .enumerate()
        .filter(|(_, location)| is_prefix_match(query, &location.name))
        .take(MAX_SUGGESTIONS)
        .map(|(index, location)| Suggestion {
            index,
            name: location.name.clone(),
        })
        .collect()
}

/// Search input state and the suggestions derived from it.
#[derive(Debug, Default)]
pub struct SearchController {
    query: String,
    suggestions: Vec<Suggestion>,
    generation: Option<u64>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn on_query_change(&mut self, text: impl Into<String>, store: &LocationStore) {
        self.query = text.into();
        self.recompute(store);
    }

    /// Recomputes the suggestions if the store holds a new snapshot.
    pub fn sync(&mut self, store: &LocationStore) {
        if self.generation != Some(store.generation()) {
            self.recompute(store);
        }
    }

    /// Resolves the picked suggestion against the current snapshot and clears the query.
    ///
    /// Returns `None` if the location is no longer present.
    pub fn on_suggestion_picked(
        &mut self,
        suggestion: &Suggestion,
        store: &LocationStore,
    ) -> Option<usize> {
        let index = match store.get(suggestion.index) {
            Some(location) if location.name == suggestion.name => Some(suggestion.index),
            _ => store.position_of(&suggestion.name),
        };
        self.on_query_change(String::new(), store);
        if index.is_none() {
            log::debug!("Picked suggestion {} is gone.", suggestion.name);
        }
        index
    }

    fn recompute(&mut self, store: &LocationStore) {
        self.suggestions = suggest(&self.query, store.locations());
        self.generation = Some(store.generation());
    }
}
