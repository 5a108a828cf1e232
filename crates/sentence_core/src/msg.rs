use std::time::Duration;

use crate::NewItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The loader produced the initial collection.
    Loaded(Vec<NewItem>),
    /// The loader failed; the reason is shown once.
    LoadFailed(String),
    /// User asked for the next sentence.
    Next,
    /// User asked for the previous sentence.
    Previous,
    /// User asked for one random unseen sentence.
    RandomOne,
    /// User asked for a batch of random sentences.
    RandomBatch,
    /// User reset the seen tracking.
    ResetSeen,
    /// User applied a filter query.
    FilterChanged(String),
    /// User cleared the filter.
    FilterCleared,
    /// User toggled the favorites view.
    FavoritesViewToggled,
    /// User toggled the favorite flag of the current sentence.
    FavoriteToggled,
    /// User submitted new text for the current sentence.
    EditSubmitted(String),
    /// User deleted the current sentence.
    DeleteClicked,
    /// User jumped to a position in the active view.
    IndexSelected(usize),
    /// User showed or hid the list panel.
    ListToggled,
    /// Time passed since the previous tick.
    Tick(Duration),
    /// Fallback for placeholder wiring.
    NoOp,
}

impl Msg {
    /// Whether the message comes from the user and therefore restarts the
    /// auto-advance countdown.
    pub fn is_user_command(&self) -> bool {
        !matches!(
            self,
            Msg::Loaded(_) | Msg::LoadFailed(_) | Msg::Tick(_) | Msg::NoOp
        )
    }
}
