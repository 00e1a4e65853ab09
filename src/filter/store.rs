//! FilterByGroup Store - suggestion registry and selection state.
//!
//! The canonical set of available tags plus the current selection, held
//! in signals so consumers react to every mutation:
//!
//! - `suggestions` - ordered, no duplicate ids, append-only merges
//! - `selected` - at most one tag, a detached copy
//!
//! Duplicate registration is not an error: the existing entry wins and
//! the duplicate is silently dropped. Downstream UI depends on this
//! first-write-wins policy.

use spark_signals::{signal, Signal};

use crate::types::Tag;

// =============================================================================
// Store
// =============================================================================

/// In-memory holder of suggestions and the current selection.
///
/// Exclusively owned by one provider mount; see
/// [`FilterByGroupProvider`](crate::filter::FilterByGroupProvider).
pub struct FilterByGroupStore {
    suggestions: Signal<Vec<Tag>>,
    selected: Signal<Option<Tag>>,
}

impl FilterByGroupStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_suggestions(Vec::new())
    }

    /// Create a store seeded with initial suggestions.
    ///
    /// The seed itself is deduplicated by id, first occurrence wins, so
    /// the no-duplicates invariant holds from the start.
    pub fn with_suggestions(seed: Vec<Tag>) -> Self {
        let mut unique: Vec<Tag> = Vec::with_capacity(seed.len());
        for tag in seed {
            if unique.iter().any(|t| t.id() == tag.id()) {
                log::trace!("filter-by-group: dropping duplicate seed tag `{}`", tag.id());
                continue;
            }
            unique.push(tag);
        }
        Self {
            suggestions: signal(unique),
            selected: signal(None),
        }
    }

    /// Snapshot of the full suggestion list, in registration order.
    ///
    /// Reading inside an observer effect establishes a dependency on the
    /// list.
    pub fn suggestions(&self) -> Vec<Tag> {
        self.suggestions.get()
    }

    /// Merge new tags into the suggestion list by id.
    ///
    /// New ids are appended in the order given; ids already present are
    /// silently dropped, keeping the original entry (and its name)
    /// untouched. Observers re-run when anything was appended.
    pub fn register_suggestions(&self, new_tags: Vec<Tag>) {
        let mut current = self.suggestions.get();
        let mut added = false;
        for tag in new_tags {
            if current.iter().any(|t| t.id() == tag.id()) {
                log::trace!(
                    "filter-by-group: dropping duplicate suggestion `{}`",
                    tag.id()
                );
                continue;
            }
            current.push(tag);
            added = true;
        }
        if added {
            self.suggestions.set(current);
        }
    }

    /// Set the selection to a copy of the given tag, replacing any prior
    /// selection. The tag does not have to be a registered suggestion.
    pub fn select_tag(&self, tag: Tag) {
        log::trace!("filter-by-group: selecting tag `{}`", tag.id());
        self.selected.set(Some(tag));
    }

    /// The selection as a sequence of length 0 or 1.
    pub fn selected_tags(&self) -> Vec<Tag> {
        self.selected.get().into_iter().collect()
    }

    /// Clear the selection. Idempotent; safe when nothing is selected.
    pub fn clear_selected_tags(&self) {
        self.selected.set(None);
    }

    /// Whether the given tag is the current selection, by id.
    pub fn is_selected(&self, tag: &Tag) -> bool {
        self.selected
            .get()
            .is_some_and(|selected| selected.id() == tag.id())
    }
}

impl Default for FilterByGroupStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
