//! Key/value store the host uses to carry state across a restart of the
//! screen. Not durable storage.

use std::collections::BTreeMap;

/// Read side, used on restore.
pub trait SavedState {
    fn get_string(&self, key: &str) -> Option<String>;
}

/// Write side, used on save.
pub trait SavedStateMut {
    fn set_string(&mut self, key: &str, value: String);
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    inner: BTreeMap<String, String>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl SavedState for Bundle {
    fn get_string(&self, key: &str) -> Option<String> {
        self.inner.get(key).cloned()
    }
}

impl SavedStateMut for Bundle {
    fn set_string(&mut self, key: &str, value: String) {
        self.inner.insert(key.to_owned(), value);
    }
}
