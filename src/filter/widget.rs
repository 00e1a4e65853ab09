//! Filter Widget - the default filter UI, headless.
//!
//! A pure view over the store via [`FilterByGroupContext`]: one
//! selectable row per suggestion plus a reset control. It owns no state
//! of its own - rendering is the host's job, so the widget hands out
//! view rows through `on_render` and re-invokes it after every store
//! change.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use spark_content::filter::{Filter, FilterProps};
//!
//! let filter = Filter::attach(&ctx, FilterProps {
//!     on_render: Some(Rc::new(|view| {
//!         for item in &view.items {
//!             draw_control(item.tag.name(), item.selected);
//!         }
//!     })),
//! });
//!
//! filter.select("t1"); // control click
//! filter.reset();      // reset control
//! ```

use std::rc::Rc;

use crate::types::{Cleanup, Tag};

use super::context::FilterByGroupContext;

// =============================================================================
// View model
// =============================================================================

/// One selectable control row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterItem {
    pub tag: Tag,
    pub selected: bool,
}

/// The whole filter view: rows in store order plus the current
/// selection (which may not correspond to any row).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterView {
    pub items: Vec<FilterItem>,
    pub selection: Option<Tag>,
}

/// Render callback invoked with a fresh view after every store change.
pub type RenderCallback = Rc<dyn Fn(&FilterView)>;

/// Widget props.
#[derive(Default)]
pub struct FilterProps {
    pub on_render: Option<RenderCallback>,
}

// =============================================================================
// Widget
// =============================================================================

/// The default filter UI. Detaching (or dropping) stops its
/// subscription; the store is untouched.
pub struct Filter {
    ctx: FilterByGroupContext,
    stop: Option<Cleanup>,
}

impl Filter {
    /// Attach to a mounted context. When `on_render` is set it fires
    /// immediately with the current view, then after every change.
    pub fn attach(ctx: &FilterByGroupContext, props: FilterProps) -> Self {
        let stop = props.on_render.map(|on_render| {
            let watch_ctx = ctx.clone();
            ctx.watch(move || {
                let view = view_of(&watch_ctx);
                on_render(&view);
            })
        });

        Self {
            ctx: ctx.clone(),
            stop,
        }
    }

    /// Current view snapshot.
    pub fn view(&self) -> FilterView {
        view_of(&self.ctx)
    }

    /// A control click: select the suggestion with the given id.
    /// Returns false when no suggestion has that id.
    pub fn select(&self, id: &str) -> bool {
        let tag = self
            .ctx
            .suggestions()
            .into_iter()
            .find(|tag| tag.id() == id);
        match tag {
            Some(tag) => {
                self.ctx.select_tag(tag);
                true
            }
            None => false,
        }
    }

    /// The reset control: clear the selection.
    pub fn reset(&self) {
        self.ctx.clear_selected_tags();
    }

    /// Detach from the store, stopping re-renders.
    pub fn detach(mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl Drop for Filter {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

fn view_of(ctx: &FilterByGroupContext) -> FilterView {
    let selection = ctx.selected_tags().into_iter().next();
    let items = ctx
        .suggestions()
        .into_iter()
        .map(|tag| {
            let selected = selection.as_ref().is_some_and(|s| s.id() == tag.id());
            FilterItem { tag, selected }
        })
        .collect();
    FilterView { items, selection }
}

// =============================================================================
// TESTS
// =============================================================================
