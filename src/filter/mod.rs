//! FilterByGroup - tag-based content filtering.
//!
//! The filtering subsystem:
//! - [`FilterByGroupStore`] - suggestion registry + single selection
//! - [`FilterByGroupProvider`] / [`FilterByGroupContext`] - per-mount
//!   store ownership and bound operation handles
//! - [`RegisterSuggestions`] - deferred registration command object
//! - [`Filter`] - the default headless filter UI (rows + reset)

mod context;
mod store;
mod widget;

pub use context::{FilterByGroupContext, FilterByGroupProvider, RegisterSuggestions};
pub use store::FilterByGroupStore;
pub use widget::{Filter, FilterItem, FilterProps, FilterView, RenderCallback};
