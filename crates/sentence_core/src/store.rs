use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use viewer_logging::{viewer_debug, viewer_info};

use crate::filter::Filter;
use crate::item::{Item, ItemId, NewItem};

/// Which projection of the collection the cursor indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Full,
    Filtered,
    Favorites,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no sentences available")]
    Unavailable,
    #[error("the source contained no sentences")]
    EmptySource,
    #[error("index {index} is out of range for a view of {len} sentences")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("sentence content must not be blank")]
    BlankContent,
    #[error("not enough sentences: requested {requested}, available {available}")]
    NotEnoughItems { requested: usize, available: usize },
}

/// Owns the sentence collection, the active projection, the seen set and the
/// cursor.
///
/// Positions passed to and returned from the store are always relative to the
/// active view. Cross-view bookkeeping (seen set, favorite flags, edits) goes
/// through [`ItemId`], so duplicate texts never alias each other.
#[derive(Debug, Clone)]
pub struct SentenceStore {
    items: Vec<Item>,
    next_id: u64,
    view: ActiveView,
    filter: Option<Filter>,
    projection: Vec<ItemId>,
    seen: HashSet<ItemId>,
    cursor: Option<usize>,
    rng: StdRng,
}

impl Default for SentenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceStore {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Store with a deterministic random sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            view: ActiveView::Full,
            filter: None,
            projection: Vec::new(),
            seen: HashSet::new(),
            cursor: None,
            rng,
        }
    }

    /// Replaces the collection and shows the first item.
    ///
    /// Items with blank content are dropped. If nothing remains the store is
    /// left empty and `EmptySource` is returned.
    pub fn load(&mut self, items: Vec<NewItem>) -> Result<usize, StoreError> {
        let mut loaded = Vec::with_capacity(items.len());
        for new in items {
            let content = new.content.trim();
            if content.is_empty() {
                continue;
            }
            let id = self.allocate_id();
            loaded.push(Item {
                id,
                content: content.to_string(),
                favorite: new.favorite,
            });
        }

        self.items = loaded;
        self.view = ActiveView::Full;
        self.filter = None;
        self.rebuild_projection();
        self.seen.clear();
        self.cursor = None;

        if self.items.is_empty() {
            return Err(StoreError::EmptySource);
        }
        self.show(0);
        viewer_info!("Loaded {} sentences", self.items.len());
        Ok(self.items.len())
    }

    /// Drops every item, leaving the store in its "no data" state.
    pub fn clear(&mut self) {
        self.items.clear();
        self.view = ActiveView::Full;
        self.filter = None;
        self.projection.clear();
        self.seen.clear();
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn active_view(&self) -> ActiveView {
        self.view
    }

    pub fn active_len(&self) -> usize {
        self.projection.len()
    }

    pub fn active_items(&self) -> Vec<&Item> {
        self.projection
            .iter()
            .filter_map(|&id| self.item(id))
            .collect()
    }

    pub fn filter_query(&self) -> Option<&str> {
        self.filter.as_ref().map(Filter::query)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&Item> {
        self.cursor
            .and_then(|position| self.projection.get(position))
            .and_then(|&id| self.item(id))
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Position of `id` in the active view.
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.projection.iter().position(|&other| other == id)
    }

    /// Number of items in the active view already shown in this cycle.
    pub fn seen_count(&self) -> usize {
        self.projection
            .iter()
            .filter(|&id| self.seen.contains(id))
            .count()
    }

    pub fn is_seen(&self, position: usize) -> bool {
        self.projection
            .get(position)
            .is_some_and(|id| self.seen.contains(id))
    }

    pub fn select_next(&mut self) -> Option<&Item> {
        let cursor = self.cursor?;
        if cursor + 1 < self.projection.len() {
            self.show(cursor + 1);
        }
        self.current()
    }

    pub fn select_previous(&mut self) -> Option<&Item> {
        let cursor = self.cursor?;
        if cursor > 0 {
            self.show(cursor - 1);
        }
        self.current()
    }

    /// Jumps to `position` in the active view.
    pub fn select(&mut self, position: usize) -> Result<&Item, StoreError> {
        self.id_at(position)?;
        self.show(position);
        self.current().ok_or(StoreError::Unavailable)
    }

    /// Picks a random item not yet shown in this cycle.
    ///
    /// Once every item has been seen the cycle restarts: the seen set is
    /// cleared and any item, including the one just shown, may come next.
    pub fn select_random_unseen(&mut self) -> Option<&Item> {
        let len = self.projection.len();
        if len == 0 {
            return None;
        }

        let unseen = self.unseen_positions();
        let position = if unseen.is_empty() {
            viewer_debug!("All {} sentences seen; starting a new cycle", len);
            self.seen.clear();
            self.rng.gen_range(0..len)
        } else {
            unseen[self.rng.gen_range(0..unseen.len())]
        };
        self.show(position);
        self.current()
    }

    /// Draws `count` distinct items, preferring unseen ones.
    ///
    /// When fewer than `count` unseen items remain the cycle restarts and the
    /// draw uses the whole view. The cursor moves to the first drawn item.
    pub fn select_random_batch(&mut self, count: usize) -> Result<Vec<&Item>, StoreError> {
        let len = self.projection.len();
        if len == 0 {
            return Err(StoreError::Unavailable);
        }
        if len < count {
            return Err(StoreError::NotEnoughItems {
                requested: count,
                available: len,
            });
        }

        let mut pool = self.unseen_positions();
        if pool.len() < count {
            viewer_debug!(
                "Only {} unseen sentences for a batch of {}; starting a new cycle",
                pool.len(),
                count
            );
            self.seen.clear();
            pool = (0..len).collect();
        }

        let mut picked = Vec::with_capacity(count);
        while picked.len() < count {
            let position = pool.swap_remove(self.rng.gen_range(0..pool.len()));
            self.seen.insert(self.projection[position]);
            picked.push(position);
        }
        if let Some(&first) = picked.first() {
            self.cursor = Some(first);
        }

        Ok(picked
            .iter()
            .filter_map(|&position| self.item(self.projection[position]))
            .collect())
    }

    pub fn reset_seen(&mut self) {
        self.reset_position();
    }

    /// Applies a substring filter, or returns to the full view for `None` or a
    /// blank query.
    pub fn set_filter(&mut self, query: Option<&str>) {
        self.filter = query.and_then(Filter::new);
        self.view = if self.filter.is_some() {
            ActiveView::Filtered
        } else {
            ActiveView::Full
        };
        self.rebuild_projection();
        self.reset_position();
    }

    /// Switches between the favorites view and the full view. Entering the
    /// favorites view drops any filter.
    pub fn toggle_favorites_view(&mut self) {
        if self.view == ActiveView::Favorites {
            self.view = ActiveView::Full;
        } else {
            self.view = ActiveView::Favorites;
            self.filter = None;
        }
        self.rebuild_projection();
        self.reset_position();
    }

    /// Flips the favorite flag of the item at `position` and returns the new
    /// flag.
    pub fn toggle_favorite(&mut self, position: usize) -> Result<bool, StoreError> {
        let id = self.id_at(position)?;
        let item = self.item_mut(id).ok_or(StoreError::Unavailable)?;
        item.favorite = !item.favorite;
        let favorite = item.favorite;

        if self.view == ActiveView::Favorites && !favorite {
            self.rebuild_projection();
            self.seen.remove(&id);
            if self.projection.is_empty() {
                viewer_debug!("Favorites view emptied; falling back to the full view");
                self.view = ActiveView::Full;
                self.rebuild_projection();
                self.reset_position();
            } else {
                self.adjust_cursor_after_removal(position);
            }
        }
        Ok(favorite)
    }

    /// Replaces the content of the item at `position`. Blank content is
    /// rejected without any change.
    pub fn edit(&mut self, position: usize, content: &str) -> Result<(), StoreError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::BlankContent);
        }
        let id = self.id_at(position)?;
        let item = self.item_mut(id).ok_or(StoreError::Unavailable)?;
        item.content = content.to_string();
        Ok(())
    }

    /// Removes the item at `position` from the collection and the active view.
    ///
    /// The seen set only loses the deleted item. The cursor keeps pointing at
    /// the same item when an earlier one is deleted, and is clamped otherwise.
    pub fn delete(&mut self, position: usize) -> Result<Item, StoreError> {
        let id = self.id_at(position)?;
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::Unavailable)?;
        let removed = self.items.remove(index);
        self.projection.retain(|&other| other != id);
        self.seen.remove(&id);

        if self.view == ActiveView::Favorites && self.projection.is_empty() {
            self.view = ActiveView::Full;
            self.rebuild_projection();
            self.reset_position();
        } else {
            self.adjust_cursor_after_removal(position);
        }
        viewer_debug!("Deleted sentence {}; {} remain", removed.id, self.items.len());
        Ok(removed)
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn id_at(&self, position: usize) -> Result<ItemId, StoreError> {
        if self.projection.is_empty() {
            return Err(StoreError::Unavailable);
        }
        self.projection
            .get(position)
            .copied()
            .ok_or(StoreError::IndexOutOfRange {
                index: position,
                len: self.projection.len(),
            })
    }

    fn show(&mut self, position: usize) {
        self.cursor = Some(position);
        self.seen.insert(self.projection[position]);
    }

    fn unseen_positions(&self) -> Vec<usize> {
        (0..self.projection.len())
            .filter(|&position| !self.seen.contains(&self.projection[position]))
            .collect()
    }

    fn rebuild_projection(&mut self) {
        let filter = self.filter.as_ref();
        self.projection = self
            .items
            .iter()
            .filter(|item| match self.view {
                ActiveView::Full => true,
                ActiveView::Filtered => filter.is_none_or(|f| f.matches(&item.content)),
                ActiveView::Favorites => item.favorite,
            })
            .map(|item| item.id)
            .collect();
    }

    fn reset_position(&mut self) {
        self.seen.clear();
        self.cursor = if self.projection.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    fn adjust_cursor_after_removal(&mut self, removed: usize) {
        let len = self.projection.len();
        self.cursor = match self.cursor {
            _ if len == 0 => None,
            Some(cursor) if removed < cursor => Some(cursor - 1),
            Some(cursor) => Some(cursor.min(len - 1)),
            None => None,
        };
    }
}
