use std::collections::HashSet;

use sentence_core::{NewItem, SentenceStore, StoreError};

fn store_with(contents: &[&str], seed: u64) -> SentenceStore {
    let mut store = SentenceStore::with_seed(seed);
    store
        .load(contents.iter().map(|c| NewItem::new(*c)).collect())
        .expect("load");
    store
}

fn sentences(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("sentence {i}")).collect()
}

#[test]
fn load_selects_first_item_and_marks_it_seen() {
    let store = store_with(&["A", "B", "C"], 1);

    assert_eq!(store.len(), 3);
    assert_eq!(store.cursor(), Some(0));
    assert_eq!(store.current().unwrap().content, "A");
    assert_eq!(store.seen_count(), 1);
    assert!(store.is_seen(0));
}

#[test]
fn load_rejects_empty_input() {
    let mut store = SentenceStore::with_seed(1);
    assert_eq!(store.load(Vec::new()), Err(StoreError::EmptySource));
    assert_eq!(
        store.load(vec![NewItem::new("  "), NewItem::new("")]),
        Err(StoreError::EmptySource)
    );
    assert!(store.is_empty());
    assert_eq!(store.cursor(), None);
    assert!(store.select_random_unseen().is_none());
    assert!(store.select_next().is_none());
}

#[test]
fn random_visits_every_item_before_repeating() {
    for seed in 0..20 {
        let contents = sentences(12);
        let refs: Vec<&str> = contents.iter().map(String::as_str).collect();
        let mut store = store_with(&refs, seed);
        store.reset_seen();

        let mut visited = HashSet::new();
        for _ in 0..12 {
            let item = store.select_random_unseen().expect("item");
            assert!(visited.insert(item.id), "seed {seed} repeated an item");
        }
        assert_eq!(visited.len(), 12);
        assert_eq!(store.seen_count(), 12);
    }
}

#[test]
fn preseen_first_item_is_skipped_then_cycle_restarts() {
    for seed in 0..20 {
        let mut store = store_with(&["A", "B", "C"], seed);

        let first = store.select_random_unseen().unwrap().content.clone();
        let second = store.select_random_unseen().unwrap().content.clone();
        let mut pair = vec![first, second];
        pair.sort();
        assert_eq!(pair, vec!["B".to_string(), "C".to_string()]);
        assert_eq!(store.seen_count(), 3);

        // Exhausted: the seen set is cleared and any item may come next.
        let third = store.select_random_unseen().unwrap().content.clone();
        assert!(["A", "B", "C"].contains(&third.as_str()));
        assert_eq!(store.seen_count(), 1);
    }
}

#[test]
fn single_item_view_keeps_returning_it() {
    let mut store = store_with(&["only"], 3);
    for _ in 0..5 {
        assert_eq!(store.select_random_unseen().unwrap().content, "only");
    }
}

#[test]
fn reset_then_random_always_yields_an_item() {
    let mut store = store_with(&["A", "B"], 9);
    store.select_random_unseen();
    store.reset_seen();

    assert_eq!(store.cursor(), Some(0));
    assert_eq!(store.seen_count(), 0);
    assert!(store.select_random_unseen().is_some());
}

#[test]
fn batch_returns_distinct_items() {
    for seed in 0..20 {
        let mut store = store_with(&["A", "B", "C", "D", "E"], seed);
        for _ in 0..4 {
            let batch = store.select_random_batch(3).expect("batch");
            let ids: HashSet<_> = batch.iter().map(|item| item.id).collect();
            assert_eq!(ids.len(), 3);
        }
    }
}

#[test]
fn batch_prefers_unseen_items() {
    for seed in 0..20 {
        let mut store = store_with(&["A", "B", "C", "D"], seed);
        // "A" is seen from load; three unseen remain, so the batch is exactly those.
        let mut batch: Vec<String> = store
            .select_random_batch(3)
            .unwrap()
            .iter()
            .map(|item| item.content.clone())
            .collect();
        batch.sort();
        assert_eq!(batch, vec!["B", "C", "D"]);
        assert_eq!(store.seen_count(), 4);
    }
}

#[test]
fn batch_refills_from_whole_view_when_unseen_pool_is_short() {
    let mut store = store_with(&["A", "B", "C", "D"], 5);
    store.select_random_batch(3).unwrap();
    assert_eq!(store.seen_count(), 4);

    let batch = store.select_random_batch(3).unwrap();
    assert_eq!(batch.len(), 3);
    assert_eq!(store.seen_count(), 3);
}

#[test]
fn batch_signals_not_enough_items_without_state_change() {
    let mut store = store_with(&["A", "B"], 5);
    let cursor = store.cursor();
    let seen = store.seen_count();

    assert_eq!(
        store.select_random_batch(3).map(|items| items.len()),
        Err(StoreError::NotEnoughItems {
            requested: 3,
            available: 2
        })
    );
    assert_eq!(store.cursor(), cursor);
    assert_eq!(store.seen_count(), seen);
}

#[test]
fn batch_moves_cursor_to_first_drawn_item() {
    let mut store = store_with(&["A", "B", "C"], 11);
    let first = store.select_random_batch(3).unwrap()[0].id;
    assert_eq!(store.current().unwrap().id, first);
}

#[test]
fn next_and_previous_stop_at_the_ends() {
    let mut store = store_with(&["A", "B", "C"], 1);

    assert_eq!(store.select_previous().unwrap().content, "A");
    assert_eq!(store.select_next().unwrap().content, "B");
    assert_eq!(store.select_next().unwrap().content, "C");
    assert_eq!(store.select_next().unwrap().content, "C");
    assert_eq!(store.cursor(), Some(2));
    assert_eq!(store.select_previous().unwrap().content, "B");
    assert_eq!(store.seen_count(), 3);
}

#[test]
fn select_jumps_within_active_view() {
    let mut store = store_with(&["A", "B", "C"], 1);

    assert_eq!(store.select(2).unwrap().content, "C");
    assert_eq!(store.cursor(), Some(2));
    assert_eq!(
        store.select(3).map(|item| item.content.clone()),
        Err(StoreError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(store.cursor(), Some(2));
}
