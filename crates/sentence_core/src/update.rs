use viewer_logging::{viewer_debug, viewer_warn};

use crate::{AppState, Effect, Msg, Notice, SentenceStore, StoreError};

/// Pure update function: applies a message to state and returns any effects.
///
/// Failed commands leave the store untouched and surface a [`Notice`] both in
/// the view model and as an [`Effect::Notify`].
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let user_command = msg.is_user_command();
    if user_command {
        state.auto_advance_mut().restart();
    }

    let outcome: Result<(), Notice> = match msg {
        Msg::Loaded(items) => {
            state.clear_batch();
            state.mark_dirty();
            match state.store_mut().load(items) {
                Ok(_) => {
                    state.set_load_error(None);
                    state.set_notice(None);
                    Ok(())
                }
                Err(err) => Err(Notice::from(err)),
            }
        }
        Msg::LoadFailed(reason) => {
            viewer_warn!("Sentence source unavailable: {}", reason);
            state.store_mut().clear();
            state.clear_batch();
            state.set_load_error(Some(reason.clone()));
            state.mark_dirty();
            Err(Notice::LoadFailed(reason))
        }
        Msg::Next => navigate(&mut state, |store| store.select_next().is_some()),
        Msg::Previous => navigate(&mut state, |store| store.select_previous().is_some()),
        Msg::RandomOne => navigate(&mut state, |store| store.select_random_unseen().is_some()),
        Msg::RandomBatch => {
            let batch_size = state.batch_size();
            let picked = state
                .store_mut()
                .select_random_batch(batch_size)
                .map(|items| items.iter().map(|item| item.id).collect::<Vec<_>>());
            picked.map_err(Notice::from).map(|ids| {
                state.set_batch(ids);
                state.mark_dirty();
            })
        }
        Msg::ResetSeen => {
            state.store_mut().reset_seen();
            state.clear_batch();
            state.mark_dirty();
            Ok(())
        }
        Msg::FilterChanged(query) => {
            state.store_mut().set_filter(Some(&query));
            state.clear_batch();
            state.mark_dirty();
            Ok(())
        }
        Msg::FilterCleared => {
            state.store_mut().set_filter(None);
            state.clear_batch();
            state.mark_dirty();
            Ok(())
        }
        Msg::FavoritesViewToggled => {
            state.store_mut().toggle_favorites_view();
            state.clear_batch();
            state.mark_dirty();
            Ok(())
        }
        Msg::FavoriteToggled => at_cursor(&mut state, |store, position| {
            store.toggle_favorite(position).map(drop)
        }),
        Msg::EditSubmitted(content) => at_cursor(&mut state, |store, position| {
            store.edit(position, &content)
        }),
        Msg::DeleteClicked => at_cursor(&mut state, |store, position| {
            store.delete(position).map(drop)
        }),
        Msg::IndexSelected(position) => {
            let selected = state.store_mut().select(position).map(drop);
            selected.map_err(Notice::from).map(|()| {
                state.clear_batch();
                state.mark_dirty();
            })
        }
        Msg::ListToggled => {
            state.toggle_list();
            state.mark_dirty();
            Ok(())
        }
        Msg::Tick(delta) => {
            if state.auto_advance_mut().advance(delta)
                && state.store_mut().select_random_unseen().is_some()
            {
                viewer_debug!("Auto-advanced to a random sentence");
                state.clear_batch();
                state.mark_dirty();
            }
            Ok(())
        }
        Msg::NoOp => Ok(()),
    };

    let effects = match outcome {
        Ok(()) => {
            if user_command {
                state.set_notice(None);
            }
            Vec::new()
        }
        Err(notice) => {
            viewer_debug!("Notice: {}", notice);
            state.set_notice(Some(notice.clone()));
            state.mark_dirty();
            vec![Effect::Notify(notice)]
        }
    };

    (state, effects)
}

fn navigate(
    state: &mut AppState,
    select: impl FnOnce(&mut SentenceStore) -> bool,
) -> Result<(), Notice> {
    if !select(state.store_mut()) {
        return Err(Notice::NoData);
    }
    state.clear_batch();
    state.mark_dirty();
    Ok(())
}

fn at_cursor(
    state: &mut AppState,
    apply: impl FnOnce(&mut SentenceStore, usize) -> Result<(), StoreError>,
) -> Result<(), Notice> {
    let position = state.store().cursor().ok_or(Notice::NoData)?;
    apply(state.store_mut(), position)?;
    state.clear_batch();
    state.mark_dirty();
    Ok(())
}
