//! Key bindings.
//!
//! Translates Zellij key presses into [`Event`]s based on the current focus
//! and whether the detail overlay is open.
//!
//! Global (overlay closed):
//! - `Ctrl+n` / `Ctrl+p`: move the cursor
//!
//! Query box:
//! - printable characters: edit the query
//! - `Enter`: search
//! - `Tab` / `Down` / `Esc`: go to the results
//!
//! Results:
//! - `j`/`Down`, `k`/`Up`: move the cursor
//! - `l`/`Right`/`n`, `h`/`Left`/`p`: next / previous page
//! - `Enter`: open the row under the cursor, `1`-`9`: open that row
//! - `/`, `i`, `Tab`: back to the query box
//! - `r`: run the search again
//! - `q`: hide the plugin
//!
//! Detail overlay:
//! - `Esc`/`q`/`Enter`/`Backspace`: close
//! - page keys still page

use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

use super::handler::Event;
use super::modes::Focus;
use super::state::AppState;

/// Maps a key press to an event, or `None` if the key is unbound here.
#[must_use]
pub fn map_key(state: &AppState, key: &KeyWithModifier) -> Option<Event> {
    if state.selection.is_open() {
        return map_overlay_key(key);
    }

    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::CursorDown),
            BareKey::Char('p') => Some(Event::CursorUp),
            _ => None,
        };
    }
    if key.has_modifiers(&[KeyModifier::Alt]) || key.has_modifiers(&[KeyModifier::Super]) {
        return None;
    }

    match state.focus {
        Focus::Query => map_query_key(key),
        Focus::Results => map_results_key(key),
    }
}

fn map_overlay_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Esc | BareKey::Enter | BareKey::Backspace | BareKey::Char('q') => {
            Event::CloseDetail
        }
        BareKey::Right | BareKey::Char('l' | 'n') => Event::NextPage,
        BareKey::Left | BareKey::Char('h' | 'p') => Event::PreviousPage,
        _ => return None,
    })
}

fn map_query_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Enter => Event::Submit,
        BareKey::Backspace => Event::Backspace,
        BareKey::Tab | BareKey::Down | BareKey::Esc => Event::FocusResults,
        BareKey::Char(c) => Event::Char(c),
        _ => return None,
    })
}

fn map_results_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Down | BareKey::Char('j') => Event::CursorDown,
        BareKey::Up | BareKey::Char('k') => Event::CursorUp,
        BareKey::Right | BareKey::Char('l' | 'n') => Event::NextPage,
        BareKey::Left | BareKey::Char('h' | 'p') => Event::PreviousPage,
        BareKey::Enter => Event::OpenUnderCursor,
        BareKey::Char(digit @ '1'..='9') => {
            Event::OpenVisible(digit as usize - '1' as usize)
        }
        BareKey::Char('/' | 'i') | BareKey::Tab => Event::FocusQuery,
        BareKey::Char('r') => Event::Submit,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResultItem;
    use crate::ui::theme::Theme;

    fn key(bare: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare)
    }

    fn results_state() -> AppState {
        let mut state = AppState::new(5, Theme::default());
        state.focus = Focus::Results;
        state
    }

    #[test]
    fn query_focus_types_characters() {
        let state = AppState::new(5, Theme::default());
        assert_eq!(map_key(&state, &key(BareKey::Char('j'))), Some(Event::Char('j')));
        assert_eq!(map_key(&state, &key(BareKey::Char('q'))), Some(Event::Char('q')));
        assert_eq!(map_key(&state, &key(BareKey::Enter)), Some(Event::Submit));
        assert_eq!(map_key(&state, &key(BareKey::Tab)), Some(Event::FocusResults));
    }

    #[test]
    fn ctrl_keys_move_cursor_in_any_focus() {
        let state = AppState::new(5, Theme::default());
        let ctrl_n = KeyWithModifier::new(BareKey::Char('n')).with_ctrl_modifier();
        assert_eq!(map_key(&state, &ctrl_n), Some(Event::CursorDown));

        let state = results_state();
        let ctrl_p = KeyWithModifier::new(BareKey::Char('p')).with_ctrl_modifier();
        assert_eq!(map_key(&state, &ctrl_p), Some(Event::CursorUp));
    }

    #[test]
    fn results_focus_navigates() {
        let state = results_state();
        assert_eq!(map_key(&state, &key(BareKey::Char('j'))), Some(Event::CursorDown));
        assert_eq!(map_key(&state, &key(BareKey::Char('l'))), Some(Event::NextPage));
        assert_eq!(map_key(&state, &key(BareKey::Left)), Some(Event::PreviousPage));
        assert_eq!(map_key(&state, &key(BareKey::Char('3'))), Some(Event::OpenVisible(2)));
        assert_eq!(map_key(&state, &key(BareKey::Char('/'))), Some(Event::FocusQuery));
        assert_eq!(map_key(&state, &key(BareKey::Char('r'))), Some(Event::Submit));
        assert_eq!(map_key(&state, &key(BareKey::Char('q'))), Some(Event::CloseFocus));
        assert_eq!(map_key(&state, &key(BareKey::Char('0'))), None);
    }

    #[test]
    fn overlay_captures_keys() {
        let mut state = results_state();
        state.controller.update_query("x");
        let request = state.submit_search();
        state.complete_search(request.seq, Ok(vec![ResultItem::new(0, "x")]));
        state.select_visible(0);

        assert_eq!(map_key(&state, &key(BareKey::Esc)), Some(Event::CloseDetail));
        assert_eq!(map_key(&state, &key(BareKey::Char('q'))), Some(Event::CloseDetail));
        assert_eq!(map_key(&state, &key(BareKey::Char('n'))), Some(Event::NextPage));
        assert_eq!(map_key(&state, &key(BareKey::Char('j'))), None);
    }
}
