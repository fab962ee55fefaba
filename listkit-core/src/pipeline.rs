//! List pipeline: filter, then search, then sort an in-memory collection
//!
//! The display list is a pure function of the raw items, the search term,
//! the active filter and the active sort key. Setters replace one input;
//! [`ListPipeline::compute_display_list`] recomputes from scratch every time.

use std::fmt;

use tracing::{debug, trace};

use crate::empty::{select_empty_kind, EmptyState, EmptyStateConfig};
use crate::options::{FilterFn, SelectOption, SortFn, ALL_FILTER};
use crate::search::matches_term;

/// One searchable facet of an item
///
/// Returns `None` when the facet cannot be produced; that facet then never
/// matches.
pub struct SearchField<T> {
    extract: Box<dyn Fn(&T) -> Option<String>>,
}

impl<T> SearchField<T> {
    /// A facet that always produces a string
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        Self {
            extract: Box::new(move |item| Some(f(item))),
        }
    }

    /// A facet that may fail to produce a string
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&T) -> Option<String> + 'static,
    {
        Self {
            extract: Box::new(f),
        }
    }

    pub fn extract(&self, item: &T) -> Option<String> {
        (self.extract)(item)
    }
}

impl<T> fmt::Debug for SearchField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SearchField(..)")
    }
}

struct SearchStage<T> {
    enabled: bool,
    placeholder: String,
    fields: Vec<SearchField<T>>,
}

struct FilterStage<T> {
    enabled: bool,
    options: Vec<SelectOption>,
    apply: FilterFn<T>,
}

struct SortStage<T> {
    options: Vec<SelectOption>,
    apply: SortFn<T>,
}

/// Search/filter/sort state over a collection of `T`
pub struct ListPipeline<T> {
    items: Vec<T>,
    search: Option<SearchStage<T>>,
    filter: Option<FilterStage<T>>,
    sort: Option<SortStage<T>>,
    key_extractor: Option<Box<dyn Fn(&T) -> String>>,
    empty: EmptyStateConfig,

    search_term: String,
    active_filter: String,
    active_sort: Option<String>,
}

impl<T> fmt::Debug for ListPipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListPipeline")
            .field("items", &self.items.len())
            .field("search_enabled", &self.search_enabled())
            .field("filter_enabled", &self.filter_enabled())
            .field("sort_options", &self.sort_options())
            .field("search_term", &self.search_term)
            .field("active_filter", &self.active_filter)
            .field("active_sort", &self.active_sort)
            .finish()
    }
}

impl<T> ListPipeline<T> {
    /// Start configuring a pipeline over `items`
    pub fn builder(items: Vec<T>) -> ListPipelineBuilder<T> {
        ListPipelineBuilder {
            items,
            search: None,
            filter: None,
            sort: None,
            key_extractor: None,
            empty: EmptyStateConfig::default(),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_active_filter(&mut self, value: impl Into<String>) {
        self.active_filter = value.into();
    }

    pub fn set_active_sort(&mut self, key: impl Into<String>) {
        self.active_sort = Some(key.into());
    }

    pub fn clear_sort(&mut self) {
        self.active_sort = None;
    }

    /// Replace the raw collection; selections are kept
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Toggle the search stage without dropping its fields
    pub fn set_search_enabled(&mut self, enabled: bool) {
        if let Some(search) = self.search.as_mut() {
            search.enabled = enabled;
        }
    }

    /// Toggle the filter stage without dropping its function
    pub fn set_filter_enabled(&mut self, enabled: bool) {
        if let Some(filter) = self.filter.as_mut() {
            filter.enabled = enabled;
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn active_sort(&self) -> Option<&str> {
        self.active_sort.as_deref()
    }

    pub fn search_enabled(&self) -> bool {
        self.search.as_ref().is_some_and(|s| s.enabled)
    }

    pub fn filter_enabled(&self) -> bool {
        self.filter.as_ref().is_some_and(|f| f.enabled)
    }

    pub fn search_placeholder(&self) -> Option<&str> {
        self.search.as_ref().map(|s| s.placeholder.as_str())
    }

    pub fn filter_options(&self) -> &[SelectOption] {
        self.filter
            .as_ref()
            .map(|f| f.options.as_slice())
            .unwrap_or_default()
    }

    pub fn sort_options(&self) -> &[SelectOption] {
        self.sort
            .as_ref()
            .map(|s| s.options.as_slice())
            .unwrap_or_default()
    }

    /// Rendering identity for an item, if a key extractor was configured
    pub fn key_of(&self, item: &T) -> Option<String> {
        self.key_extractor.as_ref().map(|key| key(item))
    }

    /// First raw item whose key is `key`, ignoring search, filter and sort
    pub fn find_by_key(&self, key: &str) -> Option<&T> {
        let extract = self.key_extractor.as_ref()?;
        self.items.iter().find(|item| extract(item) == key)
    }

    /// Derive the ordered subsequence to display
    pub fn compute_display_list(&self) -> Vec<&T> {
        let mut current: Vec<&T> = self.items.iter().collect();
        let raw = current.len();

        if let Some(filter) = self.filter.as_ref() {
            if filter.enabled && !filter.options.is_empty() {
                current = filter.apply.apply(current, &self.active_filter);
            }
        }
        let after_filter = current.len();

        if let Some(search) = self.search.as_ref() {
            if search.enabled && !self.search_term.is_empty() {
                current.retain(|item| self.matches_search(search, item));
            }
        }
        let after_search = current.len();

        if let (Some(sort), Some(key)) = (self.sort.as_ref(), self.active_sort.as_deref()) {
            current = sort.apply.apply(current, key);
        }

        debug!(
            raw,
            after_filter,
            after_search,
            displayed = current.len(),
            filter = %self.active_filter,
            sort = ?self.active_sort,
            "recomputed display list"
        );

        current
    }

    /// Empty state to show, or `None` when the display list has items
    pub fn empty_state(&self) -> Option<EmptyState> {
        let displayed = self.compute_display_list().len();
        select_empty_kind(self.items.len(), displayed).map(|kind| self.empty.resolve(kind))
    }

    fn matches_search(&self, search: &SearchStage<T>, item: &T) -> bool {
        search
            .fields
            .iter()
            .enumerate()
            .any(|(idx, field)| match field.extract(item) {
                Some(text) => matches_term(&text, &self.search_term),
                None => {
                    trace!(field = idx, "search field produced no value, treating as no match");
                    false
                }
            })
    }
}

/// Builder for [`ListPipeline`]
pub struct ListPipelineBuilder<T> {
    items: Vec<T>,
    search: Option<SearchStage<T>>,
    filter: Option<FilterStage<T>>,
    sort: Option<SortStage<T>>,
    key_extractor: Option<Box<dyn Fn(&T) -> String>>,
    empty: EmptyStateConfig,
}

impl<T> ListPipelineBuilder<T> {
    /// Enable search over the given fields (an item matches if any field does)
    pub fn search(mut self, placeholder: impl Into<String>, fields: Vec<SearchField<T>>) -> Self {
        self.search = Some(SearchStage {
            enabled: true,
            placeholder: placeholder.into(),
            fields,
        });
        self
    }

    /// Enable filtering with the given options and function
    pub fn filter(mut self, options: Vec<SelectOption>, apply: FilterFn<T>) -> Self {
        self.filter = Some(FilterStage {
            enabled: true,
            options,
            apply,
        });
        self
    }

    /// Enable sorting with the given options and function
    pub fn sort(mut self, options: Vec<SelectOption>, apply: SortFn<T>) -> Self {
        self.sort = Some(SortStage { options, apply });
        self
    }

    pub fn key<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.key_extractor = Some(Box::new(f));
        self
    }

    pub fn empty_state(mut self, empty: EmptyStateConfig) -> Self {
        self.empty = empty;
        self
    }

    pub fn build(self) -> ListPipeline<T> {
        ListPipeline {
            items: self.items,
            search: self.search,
            filter: self.filter,
            sort: self.sort,
            key_extractor: self.key_extractor,
            empty: self.empty,
            search_term: String::new(),
            active_filter: ALL_FILTER.to_string(),
            active_sort: None,
        }
    }
}
