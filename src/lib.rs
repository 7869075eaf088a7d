//! My Selections - a persisted checkbox list widget
//!
//! Core modules:
//! - `options`: Option list and default-selection sources
//! - `selection`: Selection state and pure state transitions
//! - `persistence`: Key-value store capability and the id codec
//! - `component`: The `SelectionList` tying state to storage
//! - `view`: Render model shared by the DOM and native output
//! - `platform`: Browser DOM glue
//! - `config`: Widget configuration

pub mod component;
pub mod config;
pub mod options;
pub mod persistence;
pub mod platform;
pub mod selection;
pub mod view;

pub use component::{Phase, SelectionList};
pub use config::WidgetConfig;
pub use options::{DefaultSelectionSource, OptionSource, SelectOption};
pub use persistence::{MemoryStore, SelectionStore, StoreError};
pub use selection::{Action, Selection, SelectionState, reduce};
pub use view::ViewModel;

/// Widget constants
pub mod consts {
    /// Storage key for the selected id list
    pub const STORAGE_KEY: &str = "selectedOptions";
    /// Heading above the list
    pub const HEADING: &str = "MY SELECTIONS";
    /// Reset button label
    pub const RESET_LABEL: &str = "Reset";
}
