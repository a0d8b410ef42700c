// ABOUTME: Session-scoped persistence of column ratio vectors.
// ABOUTME: Keyed by widget instance, lives only as long as the session.

use std::collections::HashMap;

/// Store of the last known ratio vector per widget instance.
///
/// Implementations are session scoped: created when a session starts, read
/// and written by the reconciler, dropped when the session ends. Instance keys
/// must be unique within a session.
pub trait WidthStore {
    fn get(&self, key: &str) -> Option<&[f64]>;

    fn set(&mut self, key: &str, ratios: Vec<f64>);

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory store backing one interactive session
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    widths: HashMap<String, Vec<f64>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// All instance keys currently holding state
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.widths.keys().map(String::as_str)
    }

    /// Drop every instance's state, as at session end
    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} persisted width vectors", self.widths.len());
        self.widths.clear();
    }
}

impl WidthStore for SessionStore {
    fn get(&self, key: &str) -> Option<&[f64]> {
        self.widths.get(key).map(Vec::as_slice)
    }

    fn set(&mut self, key: &str, ratios: Vec<f64>) {
        self.widths.insert(key.to_string(), ratios);
    }
}
