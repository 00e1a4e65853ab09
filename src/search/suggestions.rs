//! Suggestion List - headless search-suggestion widget.
//!
//! A view over [`SearchStore`](super::SearchStore) suggestions, limited
//! to a display count. Choosing a row commits its text as the new
//! search term; what the host does with the committed term (navigate,
//! re-query) is outside this crate.

use std::rc::Rc;

use crate::types::Cleanup;

use super::store::SearchContext;

/// How many suggestions to show when the props don't say.
pub const DEFAULT_DISPLAY_COUNT: usize = 5;

// =============================================================================
// View model
// =============================================================================

/// One visible suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    pub text: String,
    pub count: u32,
    /// Position within the visible list (0-based).
    pub position: usize,
}

/// Render callback invoked with fresh rows after every store change.
pub type SuggestionRenderCallback = Rc<dyn Fn(&[SuggestionRow])>;

/// Widget props.
#[derive(Default)]
pub struct SuggestionListProps {
    /// Cap on visible rows; defaults to [`DEFAULT_DISPLAY_COUNT`].
    pub display_count: Option<usize>,
    pub on_render: Option<SuggestionRenderCallback>,
}

// =============================================================================
// Widget
// =============================================================================

/// Headless suggestion list over a mounted search context.
pub struct SuggestionList {
    ctx: SearchContext,
    display_count: usize,
    stop: Option<Cleanup>,
}

impl SuggestionList {
    /// Attach to a mounted context. When `on_render` is set it fires
    /// immediately with the current rows, then after every change.
    pub fn attach(ctx: &SearchContext, props: SuggestionListProps) -> Self {
        let display_count = props.display_count.unwrap_or(DEFAULT_DISPLAY_COUNT);

        let stop = props.on_render.map(|on_render| {
            let watch_ctx = ctx.clone();
            ctx.watch(move || {
                let rows = rows_of(&watch_ctx, display_count);
                on_render(&rows);
            })
        });

        Self {
            ctx: ctx.clone(),
            display_count,
            stop,
        }
    }

    /// Current visible rows.
    pub fn rows(&self) -> Vec<SuggestionRow> {
        rows_of(&self.ctx, self.display_count)
    }

    /// Choose the row at `position`: commits its text as the search
    /// term. Returns false when the position is not visible.
    pub fn choose(&self, position: usize) -> bool {
        let rows = self.rows();
        match rows.into_iter().find(|row| row.position == position) {
            Some(row) => {
                self.ctx.set_search_term(row.text);
                true
            }
            None => false,
        }
    }

    /// Detach from the store, stopping re-renders.
    pub fn detach(mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl Drop for SuggestionList {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

fn rows_of(ctx: &SearchContext, display_count: usize) -> Vec<SuggestionRow> {
    ctx.suggestions()
        .into_iter()
        .take(display_count)
        .enumerate()
        .map(|(position, suggestion)| SuggestionRow {
            text: suggestion.text,
            count: suggestion.count,
            position,
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
