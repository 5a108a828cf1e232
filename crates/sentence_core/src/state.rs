use std::time::Duration;

use crate::view_model::{AppViewModel, ItemRowView};
use crate::{AutoAdvance, Item, ItemId, Notice, SentenceStore};

/// Size of a random batch unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct AppState {
    store: SentenceStore,
    auto_advance: AutoAdvance,
    batch_size: usize,
    batch: Vec<ItemId>,
    list_visible: bool,
    load_error: Option<String>,
    notice: Option<Notice>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(SentenceStore::new(), AutoAdvance::default(), DEFAULT_BATCH_SIZE)
    }

    pub fn with_store(store: SentenceStore, auto_advance: AutoAdvance, batch_size: usize) -> Self {
        Self {
            store,
            auto_advance,
            batch_size,
            batch: Vec::new(),
            list_visible: false,
            load_error: None,
            notice: None,
            dirty: false,
        }
    }

    pub fn store(&self) -> &SentenceStore {
        &self.store
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn auto_advance_remaining(&self) -> Option<Duration> {
        self.auto_advance.remaining()
    }

    pub fn view(&self) -> AppViewModel {
        let store = &self.store;
        let cursor = store.cursor();
        let row = |position: usize, item: &Item| ItemRowView {
            position,
            id: item.id,
            content: item.content.clone(),
            favorite: item.favorite,
            current: cursor == Some(position),
            seen: store.is_seen(position),
        };

        let current = cursor.and_then(|position| store.current().map(|item| row(position, item)));
        let batch = self
            .batch
            .iter()
            .filter_map(|&id| Some(row(store.position_of(id)?, store.item(id)?)))
            .collect();
        let list = self.list_visible.then(|| {
            store
                .active_items()
                .into_iter()
                .enumerate()
                .map(|(position, item)| row(position, item))
                .collect()
        });

        AppViewModel {
            item_count: store.len(),
            active_view: store.active_view(),
            active_len: store.active_len(),
            filter_query: store.filter_query().map(ToOwned::to_owned),
            current,
            batch,
            list,
            seen_count: store.seen_count(),
            load_error: self.load_error.clone(),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the
    /// flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn store_mut(&mut self) -> &mut SentenceStore {
        &mut self.store
    }

    pub(crate) fn auto_advance_mut(&mut self) -> &mut AutoAdvance {
        &mut self.auto_advance
    }

    pub(crate) fn set_batch(&mut self, batch: Vec<ItemId>) {
        self.batch = batch;
    }

    pub(crate) fn clear_batch(&mut self) {
        self.batch.clear();
    }

    pub(crate) fn toggle_list(&mut self) {
        self.list_visible = !self.list_visible;
    }

    pub(crate) fn set_load_error(&mut self, reason: Option<String>) {
        self.load_error = reason;
    }

    pub(crate) fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
