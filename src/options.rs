//! Selectable options and where they come from
//!
//! Both sources are hard-coded today and stand in for a remote fetch.

/// One selectable item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Stable identifier, unique within a source
    pub id: String,
    /// Display label
    pub name: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Supplies the canonical, ordered option list
pub trait OptionSource {
    fn options(&self) -> Vec<SelectOption>;
}

/// Supplies the ids selected when nothing is persisted
pub trait DefaultSelectionSource {
    fn default_ids(&self) -> Vec<String>;
}

/// Built-in option list: dog, cat, turtle
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticOptions;

impl OptionSource for StaticOptions {
    fn options(&self) -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "dog"),
            SelectOption::new("2", "cat"),
            SelectOption::new("3", "turtle"),
        ]
    }
}

/// Built-in default selection: cat
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDefaults;

impl DefaultSelectionSource for StaticDefaults {
    fn default_ids(&self) -> Vec<String> {
        vec!["2".to_string()]
    }
}

/// Option list backed by a vector, for embedding a fetched or test list
#[derive(Debug, Clone, Default)]
pub struct ListOptions(pub Vec<SelectOption>);

impl OptionSource for ListOptions {
    fn options(&self) -> Vec<SelectOption> {
        self.0.clone()
    }
}

/// Default ids backed by a vector
#[derive(Debug, Clone, Default)]
pub struct ListDefaults(pub Vec<String>);

impl DefaultSelectionSource for ListDefaults {
    fn default_ids(&self) -> Vec<String> {
        self.0.clone()
    }
}
