use std::collections::HashMap;

use log::debug;

/// Expanded/collapsed flags for the show-more panels of one page.
///
/// Keys are free-form. A key that was never toggled reads as collapsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisclosureStore {
    expanded: HashMap<String, bool>,
}

impl DisclosureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    /// Flips `key` and returns its new state.
    pub fn toggle(&mut self, key: &str) -> bool {
        let flag = self.expanded.entry(key.to_string()).or_insert(false);
        *flag = !*flag;
        debug!("Disclosure '{}' expanded: {}", key, *flag);
        *flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_collapsed() {
        let store = DisclosureStore::new();
        assert!(!store.is_expanded("overview"));
    }

    #[test]
    fn first_toggle_expands() {
        let mut store = DisclosureStore::new();
        assert!(store.toggle("overview"));
        assert!(store.is_expanded("overview"));
    }

    #[test]
    fn double_toggle_restores() {
        let mut store = DisclosureStore::new();
        store.toggle("legal-process");
        store.toggle("legal-process");
        assert!(!store.is_expanded("legal-process"));

        store.toggle("overview");
        let before = store.is_expanded("overview");
        store.toggle("overview");
        store.toggle("overview");
        assert_eq!(store.is_expanded("overview"), before);
    }

    #[test]
    fn keys_do_not_interfere() {
        let mut store = DisclosureStore::new();
        store.toggle("sensorineural");
        store.toggle("mixed");
        store.toggle("mixed");

        assert!(store.is_expanded("sensorineural"));
        assert!(!store.is_expanded("mixed"));
        assert!(!store.is_expanded("conductive"));
    }
}
