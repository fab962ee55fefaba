//! Item selection layered on top of a list pipeline
//!
//! Selection is tracked by item key (see [`ListPipeline::key_of`]), never by
//! position, so it survives search, filter and sort changes. Keys of items
//! that are currently hidden stay selected.

use serde::{Deserialize, Serialize};

use crate::pipeline::ListPipeline;

/// How many items can be selected at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multi,
}

/// Selected item keys, in the order they were selected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    mode: SelectionMode,
    keys: Vec<String>,
}

impl Selection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            keys: Vec::new(),
        }
    }

    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    pub fn multi() -> Self {
        Self::new(SelectionMode::Multi)
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Select `key`; in single mode this replaces the current selection
    pub fn select(&mut self, key: impl Into<String>) {
        let key = key.into();
        match self.mode {
            SelectionMode::Single => {
                self.keys.clear();
                self.keys.push(key);
            }
            SelectionMode::Multi => {
                if !self.keys.contains(&key) {
                    self.keys.push(key);
                }
            }
        }
    }

    /// Flip `key`; returns whether it is selected afterwards
    pub fn toggle(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.deselect(&key) {
            return false;
        }
        self.select(key);
        true
    }

    /// Returns true if `key` was selected
    pub fn deselect(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn count(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Most recently selected key
    pub fn current(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }

    /// "1 task selected" / "3 tasks selected", or `None` when nothing is
    pub fn label(&self, noun: &str) -> Option<String> {
        match self.count() {
            0 => None,
            1 => Some(format!("1 {} selected", noun)),
            n => Some(format!("{} {}s selected", n, noun)),
        }
    }

    /// Selected items from the raw collection, in selection order
    ///
    /// Keys with no matching item are skipped. A pipeline without a key
    /// extractor resolves nothing.
    pub fn resolve<'a, T>(&self, pipeline: &'a ListPipeline<T>) -> Vec<&'a T> {
        self.keys
            .iter()
            .filter_map(|key| pipeline.find_by_key(key))
            .collect()
    }

    /// Whether a displayed item is selected
    pub fn contains_item<T>(&self, pipeline: &ListPipeline<T>, item: &T) -> bool {
        pipeline
            .key_of(item)
            .map(|key| self.is_selected(&key))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{document_pipeline, documents, task_pipeline, tasks};

    #[test]
    fn test_single_select_replaces() {
        let mut selection = Selection::single();
        selection.select("1");
        selection.select("2");

        assert_eq!(selection.keys(), &["2".to_string()]);
        assert!(!selection.is_selected("1"));
        assert_eq!(selection.current(), Some("2"));
    }

    #[test]
    fn test_single_toggle_clears() {
        let mut selection = Selection::single();
        assert!(selection.toggle("3"));
        assert!(!selection.toggle("3"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_multi_toggle_accumulates() {
        let mut selection = Selection::multi();
        assert!(selection.toggle("1"));
        assert!(selection.toggle("4"));
        assert!(selection.toggle("2"));
        assert!(!selection.toggle("4"));

        assert_eq!(selection.keys(), &["1".to_string(), "2".to_string()]);
        assert_eq!(selection.count(), 2);

        selection.select("1");
        assert_eq!(selection.count(), 2);

        selection.clear();
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_label_pluralizes() {
        let mut selection = Selection::multi();
        assert_eq!(selection.label("task"), None);

        selection.select("1");
        assert_eq!(selection.label("task").as_deref(), Some("1 task selected"));

        selection.select("2");
        assert_eq!(selection.label("task").as_deref(), Some("2 tasks selected"));
    }

    #[test]
    fn test_resolve_by_key_survives_narrowing() {
        let mut pipeline = task_pipeline(tasks());
        let mut selection = Selection::multi();
        selection.select("3");
        selection.select("1");
        selection.select("missing");

        pipeline.set_active_filter("completed");
        let shown = pipeline.compute_display_list();
        assert!(shown.iter().all(|t| t.id != "1"));

        let picked: Vec<&str> = selection
            .resolve(&pipeline)
            .into_iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(picked, vec!["3", "1"]);
    }

    #[test]
    fn test_contains_item_uses_key() {
        let pipeline = document_pipeline(documents());
        let mut selection = Selection::single();
        selection.select("2");

        let marked: Vec<bool> = pipeline
            .compute_display_list()
            .iter()
            .map(|d| selection.contains_item(&pipeline, d))
            .collect();
        assert_eq!(marked.iter().filter(|m| **m).count(), 1);
    }

    #[test]
    fn test_resolve_without_key_extractor() {
        let pipeline = ListPipeline::builder(vec![1, 2, 3]).build();
        let mut selection = Selection::single();
        selection.select("1");
        assert!(selection.resolve(&pipeline).is_empty());
        assert!(!selection.contains_item(&pipeline, &1));
    }
}
