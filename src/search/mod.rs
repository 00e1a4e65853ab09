//! Search - term state and suggestion widgets.
//!
//! - [`SearchStore`] - committed term + result suggestions
//! - [`SearchProvider`] / [`SearchContext`] - per-mount ownership
//! - [`SuggestionList`] - headless suggestion list with display cap

mod store;
mod suggestions;

pub use store::{SearchContext, SearchProvider, SearchStore};
pub use suggestions::{
    SuggestionList, SuggestionListProps, SuggestionRenderCallback, SuggestionRow,
    DEFAULT_DISPLAY_COUNT,
};
