//! The selection list component
//!
//! Owns the current `SelectionState` and the store. Every operation runs the
//! reducer, commits the new state, then writes the selected ids back.

use crate::config::WidgetConfig;
use crate::options::{DefaultSelectionSource, OptionSource, StaticDefaults, StaticOptions};
use crate::persistence::{self, SelectionStore};
use crate::selection::{self, Action, Origin, Selection, SelectionState, reduce};

/// Lifecycle of a component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, nothing loaded yet
    Uninitialized,
    /// State built and persisted at least once
    Ready,
}

/// Checkbox list whose chosen subset survives reloads
pub struct SelectionList<S: SelectionStore> {
    options: Box<dyn OptionSource>,
    defaults: Box<dyn DefaultSelectionSource>,
    store: S,
    config: WidgetConfig,
    state: SelectionState,
    phase: Phase,
}

impl<S: SelectionStore> SelectionList<S> {
    /// Component over the built-in sources
    pub fn new(store: S, config: WidgetConfig) -> Self {
        Self::with_sources(store, config, StaticOptions, StaticDefaults)
    }

    pub fn with_sources(
        store: S,
        config: WidgetConfig,
        options: impl OptionSource + 'static,
        defaults: impl DefaultSelectionSource + 'static,
    ) -> Self {
        Self {
            options: Box::new(options),
            defaults: Box::new(defaults),
            store,
            config,
            state: SelectionState::new(),
            phase: Phase::Uninitialized,
        }
    }

    /// Build the initial selection from storage, falling back to defaults.
    ///
    /// Calling it again reloads from storage.
    pub fn mount(&mut self) {
        let persisted = persistence::load_ids(&self.store, &self.config.storage_key);
        let (next, origin) = selection::load(
            persisted.as_deref(),
            self.options.as_ref(),
            self.defaults.as_ref(),
        );
        match origin {
            Origin::Persisted => log::info!("Restoring saved selection"),
            Origin::Defaults => log::info!("No saved selection, using defaults"),
        }

        self.state = next;
        self.phase = Phase::Ready;
        if self.config.echo_on_mount {
            self.persist();
        }
    }

    /// Flip the option with `id`. Unknown ids change nothing.
    pub fn toggle(&mut self, id: &str) {
        if !self.state.contains(id) {
            log::debug!("Toggle ignored, no option '{}'", id);
            return;
        }
        let next = self.next(&Action::Toggle(id.to_string()));
        log::debug!("Toggled '{}' -> {}", id, next.is_selected(id));
        self.commit(next);
    }

    /// Clear storage and go back to the default selection.
    ///
    /// Storage ends up holding the default ids, not empty.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.clear() {
            log::warn!("Could not clear storage: {}", e);
        }
        let next = self.next(&Action::Reset);
        self.phase = Phase::Ready;
        self.commit(next);
        log::info!("Selection reset to defaults");
    }

    fn next(&self, action: &Action) -> SelectionState {
        reduce(&self.state, action, self.options.as_ref(), self.defaults.as_ref())
    }

    fn commit(&mut self, next: SelectionState) {
        self.state = next;
        self.persist();
    }

    fn persist(&mut self) {
        let ids = self.state.selected_ids();
        if let Err(e) = persistence::save_ids(&mut self.store, &self.config.storage_key, &ids) {
            log::warn!("Could not save selection: {}", e);
        }
    }

    pub fn selections(&self) -> &[Selection] {
        &self.state.selections
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.state.selected_ids()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ListDefaults, ListOptions, SelectOption};
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    const KEY: &str = "selectedOptions";

    fn stored(list: &SelectionList<MemoryStore>) -> Option<String> {
        list.store().get(KEY).unwrap()
    }

    /// Stored value decoded back into ids
    fn stored_ids(list: &SelectionList<MemoryStore>) -> Vec<String> {
        let raw = stored(list).expect("selection should be stored");
        persistence::decode_ids(&raw).unwrap()
    }

    fn flags(list: &SelectionList<MemoryStore>) -> Vec<(String, bool)> {
        list.selections()
            .iter()
            .map(|s| (s.name.clone(), s.selected))
            .collect()
    }

    fn f(v: &[(&str, bool)]) -> Vec<(String, bool)> {
        v.iter().map(|(n, b)| (n.to_string(), *b)).collect()
    }

    fn mounted(store: MemoryStore) -> SelectionList<MemoryStore> {
        let mut list = SelectionList::new(store, WidgetConfig::default());
        list.mount();
        list
    }

    #[test]
    fn test_mount_empty_store_selects_defaults() {
        let list = mounted(MemoryStore::new());
        assert_eq!(list.phase(), Phase::Ready);
        assert_eq!(list.selected_ids(), ["2"]);
        // Echo write
        assert_eq!(stored(&list).as_deref(), Some(r#"["2"]"#));
    }

    #[test]
    fn test_mount_restores_persisted() {
        let list = mounted(MemoryStore::new().with_entry(KEY, r#"["1","3"]"#));
        assert_eq!(list.selected_ids(), ["1", "3"]);
        assert_eq!(stored(&list).as_deref(), Some(r#"["1","3"]"#));
    }

    #[test]
    fn test_mount_empty_array_falls_back() {
        let list = mounted(MemoryStore::new().with_entry(KEY, "[]"));
        assert_eq!(list.selected_ids(), ["2"]);
    }

    #[test]
    fn test_mount_drops_unknown_persisted_ids() {
        let list = mounted(MemoryStore::new().with_entry(KEY, r#"["7","3"]"#));
        assert_eq!(list.selected_ids(), ["3"]);
        assert_eq!(stored(&list).as_deref(), Some(r#"["3"]"#));
    }

    #[test]
    fn test_mount_malformed_falls_back() {
        let list = mounted(MemoryStore::new().with_entry(KEY, "{oops"));
        assert_eq!(list.selected_ids(), ["2"]);
        assert_eq!(stored(&list).as_deref(), Some(r#"["2"]"#));
    }

    #[test]
    fn test_mount_without_echo_leaves_store() {
        let config = WidgetConfig {
            echo_on_mount: false,
            ..WidgetConfig::default()
        };
        let mut list = SelectionList::new(MemoryStore::new(), config);
        list.mount();
        assert_eq!(list.selected_ids(), ["2"]);
        assert_eq!(stored(&list), None);
    }

    #[test]
    fn test_toggle_persists_in_list_order() {
        let mut list = mounted(MemoryStore::new());
        list.toggle("3");
        list.toggle("1");
        assert_eq!(stored(&list).as_deref(), Some(r#"["1","2","3"]"#));
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut list = mounted(MemoryStore::new());
        let before = list.state().clone();
        list.toggle("nope");
        assert_eq!(list.state(), &before);
        assert_eq!(stored(&list).as_deref(), Some(r#"["2"]"#));
    }

    #[test]
    fn test_toggle_before_mount_is_noop() {
        let mut list = SelectionList::new(MemoryStore::new(), WidgetConfig::default());
        list.toggle("1");
        assert_eq!(list.phase(), Phase::Uninitialized);
        assert!(list.selections().is_empty());
        assert_eq!(stored(&list), None);
    }

    #[test]
    fn test_deselect_all_persists_empty_then_remount_uses_defaults() {
        let mut list = mounted(MemoryStore::new());
        list.toggle("2");
        assert_eq!(stored(&list).as_deref(), Some("[]"));

        let store = list.store().clone();
        let list = mounted(store);
        assert_eq!(list.selected_ids(), ["2"]);
    }

    #[test]
    fn test_reset_clears_unrelated_keys_and_writes_defaults() {
        let mut list = mounted(MemoryStore::new().with_entry("theme", "dark"));
        list.toggle("1");
        list.toggle("3");
        list.reset();
        assert_eq!(list.selected_ids(), ["2"]);
        assert_eq!(stored(&list).as_deref(), Some(r#"["2"]"#));
        assert_eq!(list.store().get("theme").unwrap(), None);
    }

    #[test]
    fn test_scenario() {
        let mut list = mounted(MemoryStore::new());
        assert_eq!(
            flags(&list),
            f(&[("dog", false), ("cat", true), ("turtle", false)])
        );

        list.toggle("1");
        assert_eq!(
            flags(&list),
            f(&[("dog", true), ("cat", true), ("turtle", false)])
        );
        assert_eq!(stored(&list).as_deref(), Some(r#"["1","2"]"#));

        list.toggle("2");
        assert_eq!(
            flags(&list),
            f(&[("dog", true), ("cat", false), ("turtle", false)])
        );
        assert_eq!(stored(&list).as_deref(), Some(r#"["1"]"#));

        list.reset();
        assert_eq!(
            flags(&list),
            f(&[("dog", false), ("cat", true), ("turtle", false)])
        );
        assert_eq!(stored(&list).as_deref(), Some(r#"["2"]"#));
    }

    #[test]
    fn test_custom_sources() {
        let options = ListOptions(vec![
            SelectOption::new("a", "apple"),
            SelectOption::new("b", "banana"),
        ]);
        let defaults = ListDefaults(vec!["b".to_string(), "zzz".to_string()]);
        let mut list =
            SelectionList::with_sources(MemoryStore::new(), WidgetConfig::default(), options, defaults);
        list.mount();
        assert_eq!(list.selected_ids(), ["b"]);
        list.toggle("a");
        list.reset();
        assert_eq!(list.selected_ids(), ["b"]);
    }

    #[test]
    fn test_custom_storage_key() {
        let config = WidgetConfig {
            storage_key: "picks".to_string(),
            ..WidgetConfig::default()
        };
        let mut list = SelectionList::new(MemoryStore::new(), config);
        list.mount();
        list.toggle("3");
        assert_eq!(list.store().get("picks").unwrap().as_deref(), Some(r#"["2","3"]"#));
        assert_eq!(stored(&list), None);
    }

    fn arb_saved() -> impl Strategy<Value = Vec<String>> {
        // Include an unknown id so mount has something to drop
        proptest::sample::subsequence(vec!["1", "2", "3", "9"], 0..=4)
            .prop_map(|v| v.into_iter().map(String::from).collect())
    }

    fn seeded(saved: &[String]) -> SelectionList<MemoryStore> {
        let raw = persistence::encode_ids(saved).unwrap();
        mounted(MemoryStore::new().with_entry(KEY, raw))
    }

    proptest! {
        #[test]
        fn prop_store_matches_selection_after_each_toggle(
            saved in arb_saved(),
            toggles in proptest::collection::vec("[0-4]", 0..12),
        ) {
            let mut list = seeded(&saved);
            prop_assert_eq!(stored_ids(&list), list.selected_ids());
            for id in &toggles {
                list.toggle(id);
                prop_assert_eq!(stored_ids(&list), list.selected_ids());
            }
        }

        #[test]
        fn prop_reset_stores_defaults_from_any_state(
            saved in arb_saved(),
            toggles in proptest::collection::vec("[0-4]", 0..12),
        ) {
            let mut list = seeded(&saved);
            for id in &toggles {
                list.toggle(id);
            }
            list.reset();
            prop_assert_eq!(list.selected_ids(), StaticDefaults.default_ids());
            prop_assert_eq!(stored_ids(&list), StaticDefaults.default_ids());
        }
    }
}
