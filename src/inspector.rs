//! Field inspector panel state.
//!
//! Clicking a field row opens a side panel describing that field; closing
//! the panel clears the selection. At most one field is selected at a
//! time, and selecting another field replaces the current one.

/// Identifies a single field row: which table, which field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    pub table: String,
    pub field: String,
}

impl FieldRef {
    pub fn new(table: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            field: field.into(),
        }
    }
}

/// Single-selection state backing the inspector side panel.
#[derive(Debug, Default)]
pub struct FieldInspector {
    selected: Option<FieldRef>,
}

impl FieldInspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a field, replacing any current selection. Opens the panel.
    pub fn select(&mut self, table: impl Into<String>, field: impl Into<String>) {
        self.selected = Some(FieldRef::new(table, field));
    }

    /// Close the panel and clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The currently selected field, if the panel is open.
    pub fn selected(&self) -> Option<&FieldRef> {
        self.selected.as_ref()
    }

    /// Whether the panel is showing anything.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Whether a specific field row is the selected one.
    pub fn is_selected(&self, table: &str, field: &str) -> bool {
        self.selected
            .as_ref()
            .map(|s| s.table == table && s.field == field)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Selection Lifecycle
    // ========================================================================

    #[test]
    fn test_new_inspector_is_closed() {
        let inspector = FieldInspector::new();
        assert!(!inspector.is_open());
        assert!(inspector.selected().is_none());
    }

    #[test]
    fn test_select_opens_panel() {
        let mut inspector = FieldInspector::new();
        inspector.select("users", "email");

        assert!(inspector.is_open());
        assert_eq!(
            inspector.selected(),
            Some(&FieldRef::new("users", "email"))
        );
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut inspector = FieldInspector::new();
        inspector.select("users", "email");
        inspector.select("posts", "user_id");

        assert!(inspector.is_selected("posts", "user_id"));
        assert!(!inspector.is_selected("users", "email"));
    }

    #[test]
    fn test_reselecting_same_field_keeps_it_selected() {
        let mut inspector = FieldInspector::new();
        inspector.select("users", "id");
        inspector.select("users", "id");

        assert!(inspector.is_selected("users", "id"));
    }

    #[test]
    fn test_clear_closes_panel() {
        let mut inspector = FieldInspector::new();
        inspector.select("users", "email");
        inspector.clear();

        assert!(!inspector.is_open());
        assert!(inspector.selected().is_none());
    }

    #[test]
    fn test_clear_on_closed_panel_is_noop() {
        let mut inspector = FieldInspector::new();
        inspector.clear();
        assert!(!inspector.is_open());
    }

    // ========================================================================
    // is_selected() - Row Highlighting
    // ========================================================================

    #[test]
    fn test_is_selected_requires_both_table_and_field_match() {
        let mut inspector = FieldInspector::new();
        inspector.select("users", "id");

        assert!(inspector.is_selected("users", "id"));
        // Same field name on another table is a different row
        assert!(!inspector.is_selected("posts", "id"));
        assert!(!inspector.is_selected("users", "email"));
    }

    #[test]
    fn test_is_selected_when_closed() {
        let inspector = FieldInspector::new();
        assert!(!inspector.is_selected("users", "id"));
    }
}
