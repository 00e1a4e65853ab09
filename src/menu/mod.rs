//! Menu - navigation-menu interaction state.
//!
//! - [`MenuStore`] - active / hover flags + submenu depth
//! - [`MenuProvider`] / [`MenuContext`] - per-mount ownership
//! - [`SubmenuHandle`] - proof of one submenu entry

mod store;

pub use store::{MenuContext, MenuFlags, MenuProvider, MenuStore, SubmenuHandle};
