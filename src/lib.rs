//! # spark-content
//!
//! Reactive headless components for content-management UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Every subsystem is the same shape: a store holding its state in
//! signals, a provider owning that store for exactly one mount, and
//! weak context handles consumers use to read, mutate, and subscribe.
//!
//! ```text
//! Provider (owns store) → ContextHandle → consumer reads/writes
//!                                       → watch() effects re-run per mutation
//! ```
//!
//! Stores are plain objects passed by handle - there is no ambient or
//! global state. Unmounting a provider discards its store and stops all
//! subscribed observers; using a handle afterwards fails fast.
//!
//! Components are headless: they own state propagation and hand view
//! rows to the host through callbacks. Rendering, layout, styling, and
//! routing belong to the host UI layer.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Tag, Suggestion, Cleanup)
//! - [`provider`] - Store ownership and context handles
//! - [`filter`] - Tag-based filtering (FilterByGroup)
//! - [`search`] - Search term state and suggestion lists
//! - [`menu`] - Navigation-menu interaction state

pub mod filter;
pub mod menu;
pub mod provider;
pub mod search;
pub mod types;

// Re-export commonly used items
pub use types::{Cleanup, Suggestion, Tag, TagData, TagError};

pub use provider::{ContextHandle, OutsideProvider, Provider};

pub use filter::{
    Filter, FilterByGroupContext, FilterByGroupProvider, FilterByGroupStore, FilterItem,
    FilterProps, FilterView, RegisterSuggestions,
};

pub use search::{
    SearchContext, SearchProvider, SearchStore, SuggestionList, SuggestionListProps,
    SuggestionRow, DEFAULT_DISPLAY_COUNT,
};

pub use menu::{MenuContext, MenuFlags, MenuProvider, MenuStore, SubmenuHandle};
