use crate::{ActiveView, ItemId, Notice};

/// Read-only snapshot handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Size of the whole collection.
    pub item_count: usize,
    pub active_view: ActiveView,
    /// Size of the active view.
    pub active_len: usize,
    pub filter_query: Option<String>,
    pub current: Option<ItemRowView>,
    /// Result of the last random batch, empty once another command runs.
    pub batch: Vec<ItemRowView>,
    /// Rows of the active view when the list panel is visible.
    pub list: Option<Vec<ItemRowView>>,
    pub seen_count: usize,
    pub load_error: Option<String>,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowView {
    /// Position in the active view.
    pub position: usize,
    pub id: ItemId,
    pub content: String,
    pub favorite: bool,
    pub current: bool,
    pub seen: bool,
}
