//! Empty-state selection for a list that has nothing to display

use serde::{Deserialize, Serialize};

/// Why the display list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyKind {
    /// The raw collection itself is empty
    NoData,
    /// Search or filter narrowed a non-empty collection to nothing
    NoResults,
}

/// Pick the empty-state variant, or `None` when something is displayed
pub fn select_empty_kind(raw_len: usize, displayed_len: usize) -> Option<EmptyKind> {
    match (raw_len, displayed_len) {
        (_, d) if d > 0 => None,
        (0, _) => Some(EmptyKind::NoData),
        _ => Some(EmptyKind::NoResults),
    }
}

/// Text and icon a consumer shows for an empty list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyStateConfig {
    pub icon: Option<String>,
    pub message: String,
    pub description: Option<String>,
    /// Overrides `message` when narrowing caused the empty list
    pub no_results_message: Option<String>,
    /// Overrides `description` when narrowing caused the empty list
    pub no_results_description: Option<String>,
}

impl Default for EmptyStateConfig {
    fn default() -> Self {
        Self {
            icon: None,
            message: "No items found".to_string(),
            description: None,
            no_results_message: None,
            no_results_description: None,
        }
    }
}

impl EmptyStateConfig {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn no_results_message(mut self, message: impl Into<String>) -> Self {
        self.no_results_message = Some(message.into());
        self
    }

    pub fn no_results_description(mut self, description: impl Into<String>) -> Self {
        self.no_results_description = Some(description.into());
        self
    }

    /// Resolve the text for a variant
    pub fn resolve(&self, kind: EmptyKind) -> EmptyState {
        let (message, description) = match kind {
            EmptyKind::NoData => (self.message.clone(), self.description.clone()),
            EmptyKind::NoResults => (
                self.no_results_message
                    .clone()
                    .unwrap_or_else(|| self.message.clone()),
                self.no_results_description
                    .clone()
                    .or_else(|| self.description.clone()),
            ),
        };

        EmptyState {
            kind,
            icon: self.icon.clone(),
            message,
            description,
        }
    }
}

/// A resolved empty state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub kind: EmptyKind,
    pub icon: Option<String>,
    pub message: String,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_empty_kind() {
        assert_eq!(select_empty_kind(0, 0), Some(EmptyKind::NoData));
        assert_eq!(select_empty_kind(5, 0), Some(EmptyKind::NoResults));
        assert_eq!(select_empty_kind(5, 2), None);
    }

    #[test]
    fn test_resolve_uses_no_results_override() {
        let config = EmptyStateConfig::new("No documents found")
            .description("No documents available")
            .no_results_description("Try adjusting your search terms");

        let no_data = config.resolve(EmptyKind::NoData);
        assert_eq!(no_data.description.as_deref(), Some("No documents available"));

        let no_results = config.resolve(EmptyKind::NoResults);
        assert_eq!(
            no_results.description.as_deref(),
            Some("Try adjusting your search terms")
        );
    }

    #[test]
    fn test_resolve_falls_back_to_base_text() {
        let config = EmptyStateConfig::new("No items yet").icon("star");
        let state = config.resolve(EmptyKind::NoResults);

        assert_eq!(state.message, "No items yet");
        assert_eq!(state.icon.as_deref(), Some("star"));
        assert_eq!(state.description, None);
    }
}
