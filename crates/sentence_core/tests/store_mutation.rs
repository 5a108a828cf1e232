use pretty_assertions::assert_eq;
use sentence_core::{ActiveView, NewItem, SentenceStore, StoreError};

fn store_with(contents: &[&str]) -> SentenceStore {
    let mut store = SentenceStore::with_seed(13);
    store
        .load(contents.iter().map(|c| NewItem::new(*c)).collect())
        .unwrap();
    store
}

fn texts(store: &SentenceStore) -> Vec<&str> {
    store.items().iter().map(|item| item.content.as_str()).collect()
}

#[test]
fn edit_replaces_trimmed_content() {
    let mut store = store_with(&["A", "B"]);
    store.edit(1, "  Bee  ").unwrap();
    assert_eq!(texts(&store), vec!["A", "Bee"]);
}

#[test]
fn blank_edit_is_rejected_without_change() {
    let mut store = store_with(&["A", "B"]);
    assert_eq!(store.edit(0, "   "), Err(StoreError::BlankContent));
    assert_eq!(texts(&store), vec!["A", "B"]);
}

#[test]
fn edit_through_filtered_view_updates_the_collection() {
    let mut store = store_with(&["apple", "banana", "apricot"]);
    store.set_filter(Some("ap"));
    assert_eq!(store.active_len(), 2);

    store.edit(1, "apricot jam").unwrap();

    assert_eq!(texts(&store), vec!["apple", "banana", "apricot jam"]);
    assert_eq!(store.active_items()[1].content, "apricot jam");
}

#[test]
fn edit_only_touches_the_addressed_duplicate() {
    let mut store = store_with(&["twin", "twin"]);
    store.set_filter(Some("twin"));
    store.edit(1, "changed").unwrap();
    assert_eq!(texts(&store), vec!["twin", "changed"]);
}

#[test]
fn deleting_last_item_clamps_cursor() {
    let mut store = store_with(&["A", "B", "C"]);
    store.select(2).unwrap();

    let removed = store.delete(2).unwrap();

    assert_eq!(removed.content, "C");
    assert_eq!(store.cursor(), Some(1));
    assert_eq!(store.current().unwrap().content, "B");
}

#[test]
fn deleting_only_item_leaves_no_selection() {
    let mut store = store_with(&["A"]);
    store.delete(0).unwrap();

    assert!(store.is_empty());
    assert_eq!(store.cursor(), None);
    assert_eq!(store.delete(0), Err(StoreError::Unavailable));
    assert_eq!(store.edit(0, "x"), Err(StoreError::Unavailable));
    assert_eq!(store.toggle_favorite(0), Err(StoreError::Unavailable));
}

#[test]
fn deleting_before_cursor_keeps_current_item() {
    let mut store = store_with(&["A", "B", "C"]);
    store.select(2).unwrap();
    store.delete(0).unwrap();

    assert_eq!(store.cursor(), Some(1));
    assert_eq!(store.current().unwrap().content, "C");
}

#[test]
fn delete_keeps_seen_status_with_the_item() {
    let mut store = store_with(&["A", "B", "C", "D"]);
    // Seen: A (load) and C.
    store.select(2).unwrap();
    store.select(0).unwrap();

    store.delete(1).unwrap();

    assert_eq!(texts(&store), vec!["A", "C", "D"]);
    assert!(store.is_seen(0));
    assert!(store.is_seen(1));
    assert!(!store.is_seen(2));
    assert_eq!(store.select_random_unseen().unwrap().content, "D");
}

#[test]
fn delete_in_filtered_view_removes_from_both() {
    let mut store = store_with(&["red", "green", "reddish"]);
    store.set_filter(Some("red"));

    store.delete(0).unwrap();

    assert_eq!(store.active_view(), ActiveView::Filtered);
    assert_eq!(store.active_len(), 1);
    assert_eq!(texts(&store), vec!["green", "reddish"]);
}

#[test]
fn deleting_last_favorite_falls_back_to_full_view() {
    let mut store = SentenceStore::with_seed(1);
    store
        .load(vec![NewItem::new("A"), NewItem::favorite("B")])
        .unwrap();
    store.toggle_favorites_view();

    store.delete(0).unwrap();

    assert_eq!(store.active_view(), ActiveView::Full);
    assert_eq!(texts(&store), vec!["A"]);
    assert_eq!(store.cursor(), Some(0));
}

#[test]
fn out_of_range_positions_are_reported() {
    let mut store = store_with(&["A"]);
    assert_eq!(
        store.delete(4).map(|item| item.content),
        Err(StoreError::IndexOutOfRange { index: 4, len: 1 })
    );
    assert_eq!(texts(&store), vec!["A"]);
}
