//! What the widget shows, independent of the DOM
//!
//! The browser renderer in `platform::dom` and the native demo both draw from
//! a `ViewModel`.

use crate::component::SelectionList;
use crate::persistence::SelectionStore;

/// One checkbox row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub name: String,
    pub checked: bool,
}

/// Snapshot of everything rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub heading: String,
    pub reset_label: String,
    pub rows: Vec<Row>,
}

impl ViewModel {
    pub fn from_list<S: SelectionStore>(list: &SelectionList<S>) -> Self {
        let config = list.config();
        let rows = list
            .selections()
            .iter()
            .map(|s| Row {
                id: s.id.clone(),
                name: s.name.clone(),
                checked: s.selected,
            })
            .collect();
        Self {
            heading: config.heading.clone(),
            reset_label: config.reset_label.clone(),
            rows,
        }
    }

    /// Static markup for the current snapshot
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<div class=\"App\">");
        html.push_str(&escape(&self.heading));
        html.push_str("<button>");
        html.push_str(&escape(&self.reset_label));
        html.push_str("</button>");
        for row in &self.rows {
            html.push_str(&format!(
                "<label><p>{}</p><input type=\"checkbox\" class=\"uk-checkbox\" data-id=\"{}\"{}></label>",
                escape(&row.name),
                escape(&row.id),
                if row.checked { " checked" } else { "" }
            ));
        }
        html.push_str("</div>");
        html
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
