use std::fmt;

use crate::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Something the user should be told about; state is unchanged.
    Notify(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The data source could not be loaded.
    LoadFailed(String),
    /// There is nothing to show in the active view.
    NoData,
    NotEnoughItems { requested: usize, available: usize },
    BlankEditRejected,
    IndexOutOfRange { index: usize, len: usize },
}

impl From<StoreError> for Notice {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable | StoreError::EmptySource => Notice::NoData,
            StoreError::IndexOutOfRange { index, len } => Notice::IndexOutOfRange { index, len },
            StoreError::BlankContent => Notice::BlankEditRejected,
            StoreError::NotEnoughItems {
                requested,
                available,
            } => Notice::NotEnoughItems {
                requested,
                available,
            },
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LoadFailed(reason) => write!(f, "error loading sentences: {reason}"),
            Notice::NoData => write!(f, "no sentences available"),
            Notice::NotEnoughItems {
                requested,
                available,
            } => write!(
                f,
                "not enough sentences: need {requested}, only {available} available"
            ),
            Notice::BlankEditRejected => write!(f, "a sentence cannot be blank"),
            Notice::IndexOutOfRange { index, len } => {
                write!(f, "no sentence {} (view has {len})", index + 1)
            }
        }
    }
}
