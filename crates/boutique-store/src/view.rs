//! # View State
//!
//! Transient UI selection: which section is active, the current search
//! term, and the edit-in-progress marker.
//!
//! This slice exists because it gates which mutations are *meaningful*:
//! field edits are intended for the record currently marked editing. The
//! catalog and directory do not enforce the marker themselves — honoring
//! it is a caller-side convention, and the command layer logs the marker
//! so a misbehaving caller shows up in traces.
//!
//! All transitions here are total functions; there is no error path.

use serde::{Deserialize, Serialize};

use boutique_core::{EditKind, Section};

/// The record currently being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTarget {
    pub kind: EditKind,
    pub id: String,
}

/// Transient view state.
///
/// ## Invariants
/// - At most one record (of one kind) is marked editing at a time
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    active_section: Section,
    search_term: String,
    editing: Option<EditTarget>,
}

impl ViewState {
    /// Creates the initial view state: products section, empty search,
    /// nothing being edited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the active screen section.
    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// The currently active section.
    pub fn active_section(&self) -> Section {
        self.active_section
    }

    /// Replaces the transient search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Marks one record of one kind as being edited, replacing any
    /// previous marker.
    pub fn begin_edit(&mut self, kind: EditKind, id: impl Into<String>) {
        self.editing = Some(EditTarget {
            kind,
            id: id.into(),
        });
    }

    /// Clears the editing marker if its kind matches; no-op otherwise.
    pub fn commit_edit(&mut self, kind: EditKind) {
        if self.editing.as_ref().map(|t| t.kind) == Some(kind) {
            self.editing = None;
        }
    }

    /// The record currently marked editing, if any.
    pub fn editing(&self) -> Option<&EditTarget> {
        self.editing.as_ref()
    }

    /// Checks whether a specific record is marked editing.
    pub fn is_editing(&self, kind: EditKind, id: &str) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|t| t.kind == kind && t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert_eq!(view.active_section(), Section::Products);
        assert_eq!(view.search_term(), "");
        assert!(view.editing().is_none());
    }

    #[test]
    fn test_set_active_section() {
        let mut view = ViewState::new();
        view.set_active_section(Section::Statistics);
        assert_eq!(view.active_section(), Section::Statistics);
    }

    #[test]
    fn test_begin_edit_replaces_marker() {
        let mut view = ViewState::new();
        view.begin_edit(EditKind::Product, "P1");
        assert!(view.is_editing(EditKind::Product, "P1"));

        // one marker at a time, across kinds
        view.begin_edit(EditKind::Supplier, "S1");
        assert!(!view.is_editing(EditKind::Product, "P1"));
        assert!(view.is_editing(EditKind::Supplier, "S1"));
    }

    #[test]
    fn test_commit_edit_matches_kind() {
        let mut view = ViewState::new();
        view.begin_edit(EditKind::Product, "P1");

        // mismatched kind is a no-op
        view.commit_edit(EditKind::Supplier);
        assert!(view.is_editing(EditKind::Product, "P1"));

        view.commit_edit(EditKind::Product);
        assert!(view.editing().is_none());

        // committing with no marker is a no-op
        view.commit_edit(EditKind::Product);
        assert!(view.editing().is_none());
    }
}
