//! Adapters from eframe's persistence to the controller's saved-state traits.

use qrgen_business::{SavedState, SavedStateMut};

pub struct EframeStorage<'a>(pub &'a dyn eframe::Storage);

impl SavedState for EframeStorage<'_> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }
}

pub struct EframeStorageMut<'a>(pub &'a mut dyn eframe::Storage);

impl SavedStateMut for EframeStorageMut<'_> {
    fn set_string(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_values_written_through_adapter_are_readable() {
        let mut storage = MemoryStorage::default();
        EframeStorageMut(&mut storage).set_string("qr_input_text", "hello".to_owned());
        assert_eq!(
            EframeStorage(&storage).get_string("qr_input_text"),
            Some("hello".to_owned())
        );
        assert_eq!(EframeStorage(&storage).get_string("missing"), None);
    }
}
