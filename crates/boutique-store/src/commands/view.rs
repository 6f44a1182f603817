//! # View Commands
//!
//! View-state commands: section switching, the transient search term, and
//! the edit-in-progress marker. These are the only commands with no
//! failure path in the store itself — the sole errors are boundary parse
//! failures on the enum names.

use serde::{Deserialize, Serialize};
use tracing::debug;

use boutique_core::validation::validate_search_query;
use boutique_core::{EditKind, Section};

use crate::error::ApiError;
use crate::store::StoreState;
use crate::view::EditTarget;

/// View-state snapshot for the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDto {
    pub active_section: Section,
    pub search_term: String,
    pub editing: Option<EditTarget>,
}

fn view_snapshot(store: &crate::store::Store) -> ViewDto {
    ViewDto {
        active_section: store.view().active_section(),
        search_term: store.view().search_term().to_string(),
        editing: store.view().editing().cloned(),
    }
}

/// Switches the active screen section.
pub fn set_active_section(state: &StoreState, section: &str) -> Result<ViewDto, ApiError> {
    let section: Section = section.parse()?;
    debug!(section = section.as_str(), "set_active_section command");

    Ok(state.with_store_mut(|store| {
        store.view_mut().set_active_section(section);
        view_snapshot(store)
    }))
}

/// Replaces the transient search term.
pub fn set_search_term(state: &StoreState, term: &str) -> Result<ViewDto, ApiError> {
    let term = validate_search_query(term)?;
    debug!(term = %term, "set_search_term command");

    Ok(state.with_store_mut(|store| {
        store.view_mut().set_search_term(term.clone());
        view_snapshot(store)
    }))
}

/// Marks one record of one kind as being edited, replacing any previous
/// marker. The record's existence is not checked: the marker is advisory
/// and a stale id simply never matches.
pub fn begin_edit(state: &StoreState, kind: &str, id: &str) -> Result<ViewDto, ApiError> {
    let kind: EditKind = kind.parse()?;
    debug!(kind = kind.as_str(), id = %id, "begin_edit command");

    Ok(state.with_store_mut(|store| {
        store.view_mut().begin_edit(kind, id);
        view_snapshot(store)
    }))
}

/// Clears the editing marker of the given kind, if set.
pub fn commit_edit(state: &StoreState, kind: &str) -> Result<ViewDto, ApiError> {
    let kind: EditKind = kind.parse()?;
    debug!(kind = kind.as_str(), "commit_edit command");

    Ok(state.with_store_mut(|store| {
        store.view_mut().commit_edit(kind);
        view_snapshot(store)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_set_active_section() {
        let state = StoreState::new();

        let view = set_active_section(&state, "statistics").unwrap();
        assert_eq!(view.active_section, Section::Statistics);

        let err = set_active_section(&state, "checkout").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // failed parse left the section alone
        let view = set_search_term(&state, "").unwrap();
        assert_eq!(view.active_section, Section::Statistics);
    }

    #[test]
    fn test_edit_marker_lifecycle() {
        let state = StoreState::new();

        let view = begin_edit(&state, "product", "P1").unwrap();
        assert_eq!(
            view.editing,
            Some(EditTarget {
                kind: EditKind::Product,
                id: "P1".to_string(),
            })
        );

        // mismatched kind leaves the marker
        let view = commit_edit(&state, "supplier").unwrap();
        assert!(view.editing.is_some());

        let view = commit_edit(&state, "product").unwrap();
        assert!(view.editing.is_none());
    }

    #[test]
    fn test_set_search_term() {
        let state = StoreState::new();
        let view = set_search_term(&state, "  azul ").unwrap();
        assert_eq!(view.search_term, "azul");
    }
}
