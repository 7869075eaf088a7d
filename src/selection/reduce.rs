//! State transitions
//!
//! `reduce` maps the current state and an action to the next state. It has no
//! side effects; persisting the result is the caller's job.

use super::state::SelectionState;
use crate::options::{DefaultSelectionSource, OptionSource};

/// Something that changes the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Build the initial state. `persisted` is the stored id list, if any.
    Load { persisted: Option<Vec<String>> },
    /// Flip one option
    Toggle(String),
    /// Rebuild from the default selection
    Reset,
}

/// Where the ids for a freshly built state came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Persisted,
    Defaults,
}

/// Pick the id list a load should use: persisted when present and non-empty, else defaults
pub fn initial_ids(
    persisted: Option<&[String]>,
    defaults: &dyn DefaultSelectionSource,
) -> (Vec<String>, Origin) {
    match persisted {
        Some(ids) if !ids.is_empty() => (ids.to_vec(), Origin::Persisted),
        _ => (defaults.default_ids(), Origin::Defaults),
    }
}

/// Build a fresh state from storage or defaults, reporting which was used
pub fn load(
    persisted: Option<&[String]>,
    options: &dyn OptionSource,
    defaults: &dyn DefaultSelectionSource,
) -> (SelectionState, Origin) {
    let (ids, origin) = initial_ids(persisted, defaults);
    (SelectionState::annotate(options.options(), &ids), origin)
}

/// Compute the next state
pub fn reduce(
    current: &SelectionState,
    action: &Action,
    options: &dyn OptionSource,
    defaults: &dyn DefaultSelectionSource,
) -> SelectionState {
    match action {
        Action::Load { persisted } => load(persisted.as_deref(), options, defaults).0,
        Action::Toggle(id) => current.with_toggled(id),
        Action::Reset => SelectionState::annotate(options.options(), &defaults.default_ids()),
    }
}
