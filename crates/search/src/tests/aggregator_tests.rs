use std::collections::HashSet;
use std::sync::Arc;

use catalog_lookup_core::{CoreError, EntryField, MAX_QUERY_LIMIT, MatchTier};
use catalog_lookup_phonetic::SharedPhonetics;

use super::*;
use crate::{PriorityMerge, SearchError};

/// One entry per tier for the keyword "Shadow Clone", inserted out of tier order.
fn clones() -> Vec<Entry> {
    vec![
        entry(1, "Shadow-Clone Jutsu"),
        entry(2, "Multi Shadow Clone"),
        entry(3, "Rasengan"),
        entry(4, "shadowclone"),
    ]
}

fn tiers(outcome: &crate::SearchOutcome) -> Vec<MatchTier> {
    outcome.hits.iter().map(|hit| hit.tier).collect()
}

#[tokio::test]
async fn normal_search_keeps_store_order() {
    let store = store_with(vec![entry(1, "Fire-Style"), entry(2, "Fire Style!")]).await;
    let search = searcher(store, None);

    let outcome = search.search("FireStyle", 10, MatchTier::Normal).await.unwrap();
    assert_eq!(ids(outcome.entries()), vec![1, 2]);
    assert_eq!(outcome.total, 2);
    assert_eq!(tiers(&outcome), vec![MatchTier::Normal, MatchTier::Normal]);
}

#[tokio::test]
async fn stricter_buckets_come_first() {
    let search = searcher(store_with(clones()).await, fold_case());

    let outcome = search.search("Shadow Clone", 10, MatchTier::Homophone).await.unwrap();
    assert_eq!(ids(outcome.entries()), vec![2, 1, 4]);
    assert_eq!(
        tiers(&outcome),
        vec![MatchTier::Strict, MatchTier::Normal, MatchTier::Homophone]
    );
    assert_eq!(outcome.total, 3);
    assert!(!outcome.is_truncated());
}

#[tokio::test]
async fn results_never_repeat_an_id() {
    let search = searcher(store_with(clones()).await, fold_case());

    let outcome = search.search("a", 10, MatchTier::Homophone).await.unwrap();
    let unique: HashSet<i64> = outcome.entries().map(|e| e.id).collect();
    assert_eq!(unique.len(), outcome.hits.len());
}

#[tokio::test]
async fn ordering_is_stable_across_calls() {
    let search = searcher(store_with(clones()).await, fold_case());

    let first = search.search("Clone", 10, MatchTier::Homophone).await.unwrap();
    for _ in 0..3 {
        assert_eq!(search.search("Clone", 10, MatchTier::Homophone).await.unwrap(), first);
    }
}

#[tokio::test]
async fn rendered_count_is_min_of_limit_and_total() {
    let search = searcher(store_with(clones()).await, fold_case());

    for limit in 1..=5 {
        let outcome = search.search("Shadow Clone", limit, MatchTier::Homophone).await.unwrap();
        assert_eq!(outcome.hits.len(), limit.min(outcome.total), "limit {limit}");
    }
}

#[tokio::test]
async fn total_does_not_depend_on_limit() {
    let search = searcher(store_with(clones()).await, fold_case());

    for limit in [1, 2, 3, 10, MAX_QUERY_LIMIT] {
        let outcome = search.search("Shadow Clone", limit, MatchTier::Homophone).await.unwrap();
        assert_eq!(outcome.total, 3, "limit {limit}");
    }
}

#[tokio::test]
async fn truncated_outcome_reports_more_than_it_shows() {
    let search = searcher(store_with(clones()).await, fold_case());

    let outcome = search.search("Shadow Clone", 1, MatchTier::Homophone).await.unwrap();
    assert_eq!(ids(outcome.entries()), vec![2]);
    assert_eq!(outcome.total, 3);
    assert!(outcome.is_truncated());
}

#[tokio::test]
async fn small_limits_keep_priority_order_and_full_total() {
    let search = searcher(store_with(clones()).await, fold_case());

    let outcome = search.search("Shadow Clone", 2, MatchTier::Homophone).await.unwrap();
    assert_eq!(ids(outcome.entries()), vec![2, 1]);
    assert_eq!(tiers(&outcome), vec![MatchTier::Strict, MatchTier::Normal]);
    assert_eq!(outcome.total, 3);
}

#[tokio::test]
async fn each_tier_query_is_capped_at_limit() {
    let store = RecordingStore::new(clones(), None).await;
    let search = searcher(Arc::clone(&store), fold_case());

    search.search("Shadow Clone", 2, MatchTier::Homophone).await.unwrap();
    assert_eq!(
        store.calls(),
        vec![
            Call::Substring(EntryField::Name, "Shadow Clone".to_owned(), 2),
            // Full tiers are counted past the cap.
            Call::Substring(EntryField::NormalizedName, "ShadowClone".to_owned(), 2),
            Call::SubstringIds(EntryField::NormalizedName, "ShadowClone".to_owned()),
            Call::Substring(EntryField::PhoneticName, "shadowclone".to_owned(), 2),
            Call::SubstringIds(EntryField::PhoneticName, "shadowclone".to_owned()),
        ]
    );
}

#[tokio::test]
async fn oversized_limit_is_clamped() {
    let store = RecordingStore::new(Vec::new(), None).await;
    let search = searcher(Arc::clone(&store), None);

    search.search("Chidori", usize::MAX, MatchTier::Strict).await.unwrap();
    assert_eq!(
        store.calls(),
        vec![Call::Substring(EntryField::Name, "Chidori".to_owned(), MAX_QUERY_LIMIT)]
    );
}

#[tokio::test]
async fn zero_limit_is_rejected() {
    let search = searcher(store_with(clones()).await, None);

    let err = search.search("Clone", 0, MatchTier::Normal).await.unwrap_err();
    assert!(matches!(err, SearchError::InvalidInput(CoreError::InvalidLimit(0))));
}

#[tokio::test]
async fn no_match_at_any_tier_is_empty() {
    let search = searcher(store_with(clones()).await, fold_case());

    let outcome = search.search("Chidori", 10, MatchTier::Homophone).await.unwrap();
    assert!(outcome.is_empty());
    assert_eq!(outcome.total, 0);
    assert!(outcome.hits.is_empty());
}

#[tokio::test]
async fn strict_search_matches_case_sensitive_substrings_only() {
    let store = RecordingStore::new(clones(), None).await;
    let search = searcher(Arc::clone(&store), fold_case());

    let outcome = search.search("Clone", 10, MatchTier::Strict).await.unwrap();
    assert_eq!(ids(outcome.entries()), vec![1, 2]);
    assert_eq!(store.calls().len(), 1);
}

#[tokio::test]
async fn unavailable_capability_matches_normal_search() {
    let offline: SharedPhonetics = Arc::new(Offline);
    for phonetics in [None, Some(offline)] {
        let store = RecordingStore::new(clones(), None).await;
        let search = searcher(Arc::clone(&store), phonetics);

        let homophone = search.search("Shadow Clone", 10, MatchTier::Homophone).await.unwrap();
        assert_eq!(store.calls().len(), 2);
        let normal = search.search("Shadow Clone", 10, MatchTier::Normal).await.unwrap();
        assert_eq!(homophone, normal);
        assert_eq!(ids(homophone.entries()), vec![2, 1]);
    }
}

#[tokio::test]
async fn empty_key_tiers_are_skipped() {
    let mut pending = entry(7, "Sharingan");
    pending.phonetic_name.clear();
    let store = RecordingStore::new(vec![pending], None).await;
    let search = searcher(Arc::clone(&store), fold_case());

    let outcome = search.search("...", 10, MatchTier::Homophone).await.unwrap();
    assert!(outcome.is_empty());
    assert_eq!(
        store.calls(),
        vec![Call::Substring(EntryField::Name, "...".to_owned(), 10)]
    );
}

#[tokio::test]
async fn failing_tier_aborts_the_search() {
    let store = RecordingStore::new(clones(), Some(EntryField::PhoneticName)).await;
    let search = searcher(Arc::clone(&store), fold_case());

    let err = search.search("Shadow Clone", 10, MatchTier::Homophone).await.unwrap_err();
    assert!(matches!(err, SearchError::Storage(_)));
}

#[tokio::test]
async fn failing_provider_aborts_the_search() {
    let search = searcher(store_with(clones()).await, Some(Arc::new(Broken)));

    let err = search.search("Shadow Clone", 10, MatchTier::Homophone).await.unwrap_err();
    assert!(matches!(err, SearchError::Phonetic(_)));

    // Tiers below Homophone never consult the provider.
    let outcome = search.search("Shadow Clone", 10, MatchTier::Normal).await.unwrap();
    assert_eq!(outcome.total, 2);
}

#[test]
fn merge_keeps_the_first_occurrence() {
    let mut merge = PriorityMerge::new();
    let mut renamed = entry(1, "Shadow Clone (old)");
    renamed.description = "later tier copy".to_owned();

    assert_eq!(merge.add_tier(MatchTier::Strict, vec![entry(1, "Shadow Clone")]), 1);
    assert_eq!(merge.add_tier(MatchTier::Normal, vec![entry(5, "Chidori"), renamed]), 1);
    assert_eq!(merge.total(), 2);

    let outcome = merge.into_outcome(10);
    assert_eq!(outcome.hits[0].tier, MatchTier::Strict);
    assert_eq!(outcome.hits[0].entry.name, "Shadow Clone");
    assert!(outcome.hits[0].entry.description.is_empty());
    assert_eq!(ids(outcome.entries()), vec![1, 5]);
}

#[test]
fn merge_truncates_only_the_materialized_hits() {
    let mut merge = PriorityMerge::new();
    merge.add_tier(MatchTier::Normal, (1..=4).map(|id| entry(id, "Katon")).collect());

    let outcome = merge.into_outcome(2);
    assert_eq!(outcome.total, 4);
    assert_eq!(ids(outcome.entries()), vec![1, 2]);
    assert!(outcome.is_truncated());
}

#[test]
fn counted_ids_raise_the_total_without_adding_hits() {
    let mut merge = PriorityMerge::new();
    merge.add_tier(MatchTier::Strict, vec![entry(1, "Katon")]);
    merge.count_matches([1, 2, 3]);
    merge.add_tier(MatchTier::Normal, vec![entry(3, "Katon!")]);
    assert_eq!(merge.total(), 3);

    let outcome = merge.into_outcome(10);
    assert_eq!(ids(outcome.entries()), vec![1, 3]);
    assert_eq!(outcome.total, 3);
    assert!(outcome.is_truncated());
}

#[test]
fn empty_merge_is_empty() {
    let outcome = PriorityMerge::new().into_outcome(5);
    assert!(outcome.is_empty());
    assert!(!outcome.is_truncated());
}
