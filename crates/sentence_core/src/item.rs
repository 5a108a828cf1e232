use std::fmt;

/// Stable identifier assigned by the store when an item is loaded.
///
/// Identifiers are never reused within one store, so they stay valid across
/// edits, deletes and view changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub content: String,
    pub favorite: bool,
}

/// An item as handed over by a loader, before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub content: String,
    pub favorite: bool,
}

impl NewItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            favorite: false,
        }
    }

    pub fn favorite(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            favorite: true,
        }
    }
}
