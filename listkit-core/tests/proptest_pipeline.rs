use listkit_core::options::options;
use listkit_core::search::matches_term;
use listkit_core::{FilterFn, ListPipeline, SearchField, SortFn};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Record {
    title: String,
    tags: Vec<String>,
    group: u8,
    rank: i32,
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        "[a-zA-Z ]{0,12}",
        prop::collection::vec("[a-z]{1,6}", 0..4),
        0u8..3,
        -20i32..20,
    )
        .prop_map(|(title, tags, group, rank)| Record {
            title,
            tags,
            group,
            rank,
        })
}

fn pipeline(items: Vec<Record>) -> ListPipeline<Record> {
    ListPipeline::builder(items)
        .search(
            "Search...",
            vec![
                SearchField::new(|r: &Record| r.title.clone()),
                SearchField::new(|r: &Record| r.tags.join(" ")),
            ],
        )
        .filter(
            options(&[("all", "All"), ("0", "Zero"), ("1", "One"), ("2", "Two")]),
            FilterFn::by_predicate(|r: &Record, value: &str| r.group.to_string() == value),
        )
        .sort(
            options(&[("rank", "Rank")]),
            SortFn::by_comparators()
                .key("rank", |a: &Record, b: &Record| a.rank.cmp(&b.rank))
                .build(),
        )
        .build()
}

fn any_field_matches(record: &Record, term: &str) -> bool {
    matches_term(&record.title, term) || matches_term(&record.tags.join(" "), term)
}

fn arb_filter() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("all".to_string()),
        Just("0".to_string()),
        Just("1".to_string()),
        Just("2".to_string()),
    ]
}

proptest! {
    /// Property: an empty search term leaves the filter output untouched
    #[test]
    fn prop_empty_term_is_identity(
        items in prop::collection::vec(arb_record(), 0..30),
        filter in arb_filter(),
    ) {
        let mut with_search = pipeline(items.clone());
        with_search.set_active_filter(filter.clone());
        with_search.set_search_term("");

        let mut without_search = pipeline(items);
        without_search.set_active_filter(filter);
        without_search.set_search_enabled(false);

        prop_assert_eq!(
            with_search.compute_display_list(),
            without_search.compute_display_list()
        );
    }

    /// Property: results match the term; filtered items left out do not
    #[test]
    fn prop_search_partitions_items(
        items in prop::collection::vec(arb_record(), 0..30),
        term in "[a-zA-Z]{1,3}",
    ) {
        let mut p = pipeline(items.clone());
        p.set_search_term(term.clone());
        let shown = p.compute_display_list();

        for record in &shown {
            prop_assert!(any_field_matches(record, &term));
        }

        let excluded = items.iter().filter(|r| !shown.contains(r)).count();
        let non_matching = items.iter().filter(|r| !any_field_matches(r, &term)).count();
        prop_assert_eq!(excluded, non_matching);
    }

    /// Property: recomputation with unchanged inputs is idempotent
    #[test]
    fn prop_recompute_is_idempotent(
        items in prop::collection::vec(arb_record(), 0..30),
        term in "[a-z]{0,2}",
        filter in arb_filter(),
        sorted in any::<bool>(),
    ) {
        let mut p = pipeline(items);
        p.set_search_term(term);
        p.set_active_filter(filter);
        if sorted {
            p.set_active_sort("rank");
        }

        let first: Vec<Record> = p.compute_display_list().into_iter().cloned().collect();
        let second: Vec<Record> = p.compute_display_list().into_iter().cloned().collect();
        prop_assert_eq!(first, second);
    }

    /// Property: sorting is stable and leaves the raw items untouched
    #[test]
    fn prop_sort_is_stable_and_pure(items in prop::collection::vec(arb_record(), 0..30)) {
        let mut p = pipeline(items.clone());
        p.set_active_sort("rank");

        let shown = p.compute_display_list();
        let mut expected: Vec<&Record> = items.iter().collect();
        expected.sort_by_key(|r| r.rank);

        prop_assert_eq!(shown, expected);
        prop_assert_eq!(p.items(), items.as_slice());
    }

    /// Property: an empty collection always yields an empty list
    #[test]
    fn prop_empty_collection_stays_empty(
        term in "[a-z]{0,3}",
        filter in arb_filter(),
        sorted in any::<bool>(),
    ) {
        let mut p = pipeline(vec![]);
        p.set_search_term(term);
        p.set_active_filter(filter);
        if sorted {
            p.set_active_sort("rank");
        }

        prop_assert!(p.compute_display_list().is_empty());
    }

    /// Property: a group filter keeps only that group, in original order
    #[test]
    fn prop_filter_keeps_relative_order(
        items in prop::collection::vec(arb_record(), 0..30),
        group in 0u8..3,
    ) {
        let mut p = pipeline(items.clone());
        p.set_active_filter(group.to_string());

        let expected: Vec<&Record> = items.iter().filter(|r| r.group == group).collect();
        prop_assert_eq!(p.compute_display_list(), expected);
    }
}
