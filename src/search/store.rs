//! Search Store - current term and result suggestions.
//!
//! Holds what the search UI needs to react to: the term the user
//! committed and the suggestion list produced for it. Producing the
//! suggestions (the search index itself) is the host's concern; this
//! store only propagates results to consumers.

use spark_signals::{signal, Signal};

use crate::provider::{ContextHandle, Provider};
use crate::types::{Cleanup, Suggestion};

/// Context label used in logs and fail-fast panic messages.
const CONTEXT_LABEL: &str = "search";

// =============================================================================
// Store
// =============================================================================

/// In-memory search state for one provider mount.
pub struct SearchStore {
    term: Signal<String>,
    suggestions: Signal<Vec<Suggestion>>,
}

impl SearchStore {
    pub fn new() -> Self {
        Self {
            term: signal(String::new()),
            suggestions: signal(Vec::new()),
        }
    }

    /// The committed search term.
    pub fn search_term(&self) -> String {
        self.term.get()
    }

    /// Commit a new search term; observers re-run.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        log::trace!("search: term set to `{term}`");
        self.term.set(term);
    }

    /// Current result suggestions.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.suggestions.get()
    }

    /// Replace the result suggestions (new results arrived).
    pub fn set_suggestions(&self, suggestions: Vec<Suggestion>) {
        self.suggestions.set(suggestions);
    }
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Provider / Context
// =============================================================================

/// Owns a [`SearchStore`] for the duration of one mount.
pub struct SearchProvider {
    inner: Provider<SearchStore>,
}

impl SearchProvider {
    pub fn mount() -> Self {
        Self {
            inner: Provider::mount(CONTEXT_LABEL, SearchStore::new()),
        }
    }

    pub fn store(&self) -> &SearchStore {
        self.inner.store()
    }

    pub fn context(&self) -> SearchContext {
        SearchContext {
            handle: self.inner.context(),
        }
    }

    pub fn unmount(self) {
        self.inner.unmount();
    }
}

/// Bound references to one search store's operations.
#[derive(Clone)]
pub struct SearchContext {
    handle: ContextHandle<SearchStore>,
}

impl SearchContext {
    pub fn is_mounted(&self) -> bool {
        self.handle.is_mounted()
    }

    pub fn search_term(&self) -> String {
        self.handle.with(|store| store.search_term())
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.handle.with(|store| store.set_search_term(term));
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.handle.with(|store| store.suggestions())
    }

    pub fn set_suggestions(&self, suggestions: Vec<Suggestion>) {
        self.handle.with(|store| store.set_suggestions(suggestions));
    }

    /// Subscribe an observer effect; see
    /// [`ContextHandle::watch`](crate::provider::ContextHandle::watch).
    pub fn watch(&self, f: impl Fn() + 'static) -> Cleanup {
        self.handle.watch(f)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_starts_empty_and_commits() {
        let provider = SearchProvider::mount();
        let ctx = provider.context();

        assert_eq!(ctx.search_term(), "");
        ctx.set_search_term("contact");
        assert_eq!(ctx.search_term(), "contact");
    }

    #[test]
    fn suggestions_replace_wholesale() {
        let provider = SearchProvider::mount();
        let ctx = provider.context();

        ctx.set_suggestions(vec![Suggestion::new("alpha", 2)]);
        ctx.set_suggestions(vec![Suggestion::new("beta", 1), Suggestion::new("gamma", 4)]);

        let suggestions = ctx.suggestions();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].text, "beta");
    }

    #[test]
    #[should_panic(expected = "`search` context used outside a mounted provider")]
    fn term_access_after_unmount_panics() {
        let provider = SearchProvider::mount();
        let ctx = provider.context();
        provider.unmount();

        ctx.search_term();
    }
}
