//! Selection state and the pure derivations over it
//!
//! A `SelectionState` is never edited in place by the component: every change
//! produces a new value which is then committed and persisted.

use crate::options::SelectOption;

/// An option annotated with whether it is currently chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

impl Selection {
    pub fn from_option(option: SelectOption, selected: bool) -> Self {
        Self {
            id: option.id,
            name: option.name,
            selected,
        }
    }

    /// Copy of this selection with the flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            selected: !self.selected,
            ..self.clone()
        }
    }
}

/// Ordered selections, one per option in source order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selections: Vec<Selection>,
}

impl SelectionState {
    /// Empty state before the first load
    pub fn new() -> Self {
        Self {
            selections: Vec::new(),
        }
    }

    /// Annotate `options` so that exactly the ones whose id is in `ids` are selected.
    ///
    /// Ids with no matching option are ignored.
    pub fn annotate(options: Vec<SelectOption>, ids: &[String]) -> Self {
        let selections = options
            .into_iter()
            .map(|option| {
                let selected = ids.iter().any(|id| *id == option.id);
                Selection::from_option(option, selected)
            })
            .collect();
        Self { selections }
    }

    /// Ids of selected options, in list order
    pub fn selected_ids(&self) -> Vec<String> {
        self.selections
            .iter()
            .filter(|s| s.selected)
            .map(|s| s.id.clone())
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Selection> {
        self.selections.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.get(id).map(|s| s.selected).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// New state with exactly one option flipped; unchanged copy when `id` is unknown
    pub fn with_toggled(&self, id: &str) -> Self {
        let selections = self
            .selections
            .iter()
            .map(|s| if s.id == id { s.toggled() } else { s.clone() })
            .collect();
        Self { selections }
    }
}
