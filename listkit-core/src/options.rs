//! Filter and sort options plus the caller-supplied functions behind them

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Filter value that disables filtering
pub const ALL_FILTER: &str = "all";

/// One selectable filter or sort option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Build a list of options from `(value, label)` pairs
pub fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

type ListFn<T> = Box<dyn for<'a> Fn(Vec<&'a T>, &str) -> Vec<&'a T>>;

/// Caller-supplied filter: receives the items and the active filter value
///
/// Unknown values reach the function verbatim; the function decides what
/// they mean.
pub struct FilterFn<T> {
    inner: ListFn<T>,
}

impl<T> FilterFn<T> {
    /// Wrap a raw filter function
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(Vec<&'a T>, &str) -> Vec<&'a T> + 'static,
    {
        Self { inner: Box::new(f) }
    }

    /// Keep items where `pred(item, value)` holds; `"all"` keeps everything
    pub fn by_predicate<P>(pred: P) -> Self
    where
        P: Fn(&T, &str) -> bool + 'static,
    {
        Self::new(move |items, value| {
            if value == ALL_FILTER {
                return items;
            }
            items.into_iter().filter(|item| pred(item, value)).collect()
        })
    }

    pub fn apply<'a>(&self, items: Vec<&'a T>, value: &str) -> Vec<&'a T> {
        (self.inner)(items, value)
    }
}

impl<T> fmt::Debug for FilterFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FilterFn(..)")
    }
}

/// Caller-supplied sort: receives the items and the active sort key and
/// returns a newly ordered sequence
pub struct SortFn<T> {
    inner: ListFn<T>,
}

impl<T> SortFn<T> {
    /// Wrap a raw sort function
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(Vec<&'a T>, &str) -> Vec<&'a T> + 'static,
    {
        Self { inner: Box::new(f) }
    }

    /// Start a sort that picks a comparator by key
    pub fn by_comparators() -> ComparatorSort<T> {
        ComparatorSort {
            comparators: Vec::new(),
        }
    }

    pub fn apply<'a>(&self, items: Vec<&'a T>, key: &str) -> Vec<&'a T> {
        (self.inner)(items, key)
    }
}

impl<T> fmt::Debug for SortFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SortFn(..)")
    }
}

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Builder for a [`SortFn`] keyed by sort option value
///
/// Sorting is stable, so ties keep their input order. Keys without a
/// comparator leave the order unchanged.
pub struct ComparatorSort<T> {
    comparators: Vec<(String, Comparator<T>)>,
}

impl<T: 'static> ComparatorSort<T> {
    pub fn key<C>(mut self, key: impl Into<String>, cmp: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        self.comparators.push((key.into(), Box::new(cmp)));
        self
    }

    pub fn build(self) -> SortFn<T> {
        let comparators = self.comparators;
        SortFn::new(move |mut items, key| {
            if let Some((_, cmp)) = comparators.iter().find(|(k, _)| k == key) {
                items.sort_by(|a, b| cmp(a, b));
            }
            items
        })
    }
}
