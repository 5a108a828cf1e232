//! Sentence core: the sentence store, pure update loop and view-model helpers.
mod effect;
mod filter;
mod item;
mod msg;
mod state;
mod store;
mod timer;
mod update;
mod view_model;

pub use effect::{Effect, Notice};
pub use filter::Filter;
pub use item::{Item, ItemId, NewItem};
pub use msg::Msg;
pub use state::{AppState, DEFAULT_BATCH_SIZE};
pub use store::{ActiveView, SentenceStore, StoreError};
pub use timer::{AutoAdvance, DEFAULT_AUTO_ADVANCE};
pub use update::update;
pub use view_model::{AppViewModel, ItemRowView};
