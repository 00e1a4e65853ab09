//! FilterByGroup Context - bound store operations for a consumer tree.
//!
//! The provider owns the store for one mount; contexts are cheap weak
//! handles exposing the store operations without prop-drilling. Using a
//! context after the provider unmounted panics - stale reads would
//! corrupt consumer state invisibly.
//!
//! # Example
//!
//! ```ignore
//! use spark_content::filter::FilterByGroupProvider;
//!
//! let provider = FilterByGroupProvider::mount_with_suggestions(seed);
//! let ctx = provider.context();
//!
//! // Deferred registration: hand the bound object out now, call later.
//! let register = ctx.register_suggestions_handle();
//! on_data_arrival(move |tags| register.register(tags));
//!
//! provider.unmount(); // discards the store and every observer
//! ```

use crate::provider::{ContextHandle, Provider};
use crate::types::{Cleanup, Tag};

use super::store::FilterByGroupStore;

/// Context label used in logs and fail-fast panic messages.
const CONTEXT_LABEL: &str = "filter-by-group";

// =============================================================================
// Provider
// =============================================================================

/// Owns a [`FilterByGroupStore`] for the duration of one mount.
pub struct FilterByGroupProvider {
    inner: Provider<FilterByGroupStore>,
}

impl FilterByGroupProvider {
    /// Mount with an empty suggestion list.
    pub fn mount() -> Self {
        Self::mount_with_suggestions(Vec::new())
    }

    /// Mount with seed suggestions (deduplicated by id, first wins).
    pub fn mount_with_suggestions(seed: Vec<Tag>) -> Self {
        Self {
            inner: Provider::mount(CONTEXT_LABEL, FilterByGroupStore::with_suggestions(seed)),
        }
    }

    /// The owned store, for the providing component itself.
    pub fn store(&self) -> &FilterByGroupStore {
        self.inner.store()
    }

    /// Hand out a context for a consumer subtree.
    pub fn context(&self) -> FilterByGroupContext {
        FilterByGroupContext {
            handle: self.inner.context(),
        }
    }

    /// Tear down: stops all observers and discards the store. Every
    /// outstanding context and registration handle becomes dead.
    pub fn unmount(self) {
        self.inner.unmount();
    }
}

// =============================================================================
// Context
// =============================================================================

/// Bound references to one store's operations.
#[derive(Clone)]
pub struct FilterByGroupContext {
    handle: ContextHandle<FilterByGroupStore>,
}

impl FilterByGroupContext {
    /// Whether the owning provider is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.handle.is_mounted()
    }

    /// Snapshot of the full suggestion list.
    pub fn suggestions(&self) -> Vec<Tag> {
        self.handle.with(|store| store.suggestions())
    }

    /// Merge new tags into the suggestion list (existing ids win).
    pub fn register_suggestions(&self, tags: Vec<Tag>) {
        self.handle.with(|store| store.register_suggestions(tags));
    }

    /// Replace the selection with a copy of the given tag.
    pub fn select_tag(&self, tag: Tag) {
        self.handle.with(|store| store.select_tag(tag));
    }

    /// The selection as a sequence of length 0 or 1.
    pub fn selected_tags(&self) -> Vec<Tag> {
        self.handle.with(|store| store.selected_tags())
    }

    /// Clear the selection (idempotent).
    pub fn clear_selected_tags(&self) {
        self.handle.with(|store| store.clear_selected_tags());
    }

    /// Whether the given tag is currently selected, by id.
    pub fn is_selected(&self, tag: &Tag) -> bool {
        self.handle.with(|store| store.is_selected(tag))
    }

    /// A stable registration handle bound to this store instance,
    /// intended for deferred invocation (user action, late data arrival)
    /// rather than immediate use.
    pub fn register_suggestions_handle(&self) -> RegisterSuggestions {
        RegisterSuggestions {
            handle: self.handle.clone(),
        }
    }

    /// Subscribe an observer effect; see
    /// [`ContextHandle::watch`](crate::provider::ContextHandle::watch).
    pub fn watch(&self, f: impl Fn() + 'static) -> Cleanup {
        self.handle.watch(f)
    }
}

// =============================================================================
// Deferred registration
// =============================================================================

/// Command object for deferred suggestion registration.
///
/// Cloneable; each clone stays bound to the store instance it was
/// created from. Invoking it after the provider unmounted is the same
/// usage error as any other post-unmount context access.
#[derive(Clone)]
pub struct RegisterSuggestions {
    handle: ContextHandle<FilterByGroupStore>,
}

impl RegisterSuggestions {
    /// Merge `tags` into the bound store (existing ids win).
    pub fn register(&self, tags: Vec<Tag>) {
        self.handle.with(|store| store.register_suggestions(tags));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn tag(id: &str, name: &str) -> Tag {
        Tag::new(id, name).unwrap()
    }

    fn seeded_provider() -> FilterByGroupProvider {
        FilterByGroupProvider::mount_with_suggestions(vec![
            tag("test-id-1", "Test Tag 1"),
            tag("test-id-2", "Test Tag 2"),
        ])
    }

    #[test]
    fn seed_suggestions_reach_consumers() {
        let provider = seeded_provider();
        let ctx = provider.context();

        let suggestions = ctx.suggestions();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].name(), "Test Tag 1");
        assert_eq!(suggestions[1].name(), "Test Tag 2");
    }

    #[test]
    fn deferred_registration_appends() {
        let provider = seeded_provider();
        let ctx = provider.context();

        // Handed out at mount time, invoked later (e.g. on click).
        let register = ctx.register_suggestions_handle();
        assert_eq!(ctx.suggestions().len(), 2);

        register.register(vec![tag("new-tag-id", "New Tag")]);

        let suggestions = ctx.suggestions();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[2].name(), "New Tag");
    }

    #[test]
    fn registration_handle_clones_share_the_store() {
        let provider = seeded_provider();
        let register = provider.context().register_suggestions_handle();
        let clone = register.clone();

        clone.register(vec![tag("t3", "Tag 3")]);
        register.register(vec![tag("t3", "Shadowed")]);

        let suggestions = provider.context().suggestions();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[2].name(), "Tag 3");
    }

    #[test]
    fn select_and_reset() {
        let provider = FilterByGroupProvider::mount();
        let ctx = provider.context();

        assert!(ctx.selected_tags().is_empty());

        ctx.select_tag(tag("1", "Selected Tag"));
        assert_eq!(ctx.selected_tags()[0].name(), "Selected Tag");

        ctx.clear_selected_tags();
        assert!(ctx.selected_tags().is_empty());
    }

    #[test]
    fn observers_rerun_on_registration() {
        let provider = seeded_provider();
        let ctx = provider.context();

        let seen = Rc::new(Cell::new(0usize));
        let seen_clone = seen.clone();
        let ctx_for_watch = ctx.clone();
        let _cleanup = ctx.watch(move || {
            seen_clone.set(ctx_for_watch.suggestions().len());
        });

        assert_eq!(seen.get(), 2);

        ctx.register_suggestions(vec![tag("t3", "Tag 3")]);
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn duplicate_only_batch_does_not_notify() {
        let provider = seeded_provider();
        let ctx = provider.context();

        let runs = Rc::new(Cell::new(0));
        let runs_clone = runs.clone();
        let ctx_for_watch = ctx.clone();
        let _cleanup = ctx.watch(move || {
            ctx_for_watch.suggestions();
            runs_clone.set(runs_clone.get() + 1);
        });

        assert_eq!(runs.get(), 1);

        ctx.register_suggestions(vec![tag("test-id-1", "Duplicate")]);
        assert_eq!(runs.get(), 1);
        assert_eq!(ctx.suggestions()[0].name(), "Test Tag 1");
    }

    #[test]
    fn observers_rerun_on_selection_change() {
        let provider = FilterByGroupProvider::mount();
        let ctx = provider.context();

        let names = Rc::new(std::cell::RefCell::new(Vec::new()));
        let names_clone = names.clone();
        let ctx_for_watch = ctx.clone();
        let _cleanup = ctx.watch(move || {
            let current = ctx_for_watch
                .selected_tags()
                .first()
                .map(|t| t.name().to_string())
                .unwrap_or_default();
            names_clone.borrow_mut().push(current);
        });

        ctx.select_tag(tag("1", "Selected Tag"));
        ctx.clear_selected_tags();

        assert_eq!(
            *names.borrow(),
            vec!["".to_string(), "Selected Tag".to_string(), "".to_string()]
        );
    }

    #[test]
    #[should_panic(expected = "`filter-by-group` context used outside a mounted provider")]
    fn registration_after_unmount_panics() {
        let provider = seeded_provider();
        let register = provider.context().register_suggestions_handle();
        provider.unmount();

        register.register(vec![tag("t3", "Tag 3")]);
    }
}
