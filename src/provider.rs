//! Provider machinery - store ownership and context handles.
//!
//! A [`Provider`] owns one store for one mount. Consumers never touch the
//! store directly; they hold a [`ContextHandle`] and go through it. The
//! handle is weak: once the provider unmounts, every handle operation
//! fails fast instead of silently reading stale state.
//!
//! Observer effects subscribed through [`ContextHandle::watch`] are
//! registered with the provider and stopped at unmount, so no consumer
//! outlives the store it reads.
//!
//! # Example
//!
//! ```ignore
//! use spark_content::provider::Provider;
//!
//! let provider = Provider::mount("my-store", MyStore::new());
//! let ctx = provider.context();
//!
//! let cleanup = ctx.watch(move || {
//!     // reads establish reactive dependencies; re-runs on change
//! });
//!
//! cleanup();          // stop one observer
//! provider.unmount(); // stop all observers, drop the store
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use spark_signals::effect;
use thiserror::Error;

use crate::types::Cleanup;

// =============================================================================
// Errors
// =============================================================================

/// A context handle was used after its provider unmounted (or the
/// handle never belonged to a mounted provider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`{0}` context used outside a mounted provider")]
pub struct OutsideProvider(pub &'static str);

// =============================================================================
// Provider
// =============================================================================

/// Stop functions for subscribed observers. Slots are taken on stop so
/// consumer cleanup and provider unmount can both fire safely.
type ObserverSlots = Rc<RefCell<Vec<Option<Box<dyn FnOnce()>>>>>;

/// Owns a store for the duration of one mount.
///
/// Created with [`Provider::mount`], destroyed with [`Provider::unmount`]
/// (or on drop). There are exactly two states: mounted (store exists,
/// handles work) and unmounted (store dropped, handles fail fast).
pub struct Provider<S> {
    store: Rc<S>,
    label: &'static str,
    observers: ObserverSlots,
}

impl<S> Provider<S> {
    /// Mount a store. `label` names the context in logs and panic
    /// messages.
    pub fn mount(label: &'static str, store: S) -> Self {
        log::debug!("{label}: provider mounted");
        Self {
            store: Rc::new(store),
            label,
            observers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Direct access for the owning component.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hand out a context handle for a consumer subtree.
    pub fn context(&self) -> ContextHandle<S> {
        ContextHandle {
            store: Rc::downgrade(&self.store),
            observers: Rc::downgrade(&self.observers),
            label: self.label,
        }
    }

    /// Unmount: stop every subscribed observer, then drop the store.
    /// All context handles become dead.
    pub fn unmount(self) {
        self.stop_observers();
        log::debug!("{}: provider unmounted", self.label);
    }

    fn stop_observers(&self) {
        let mut slots = self.observers.borrow_mut();
        for slot in slots.iter_mut() {
            if let Some(stop) = slot.take() {
                stop();
            }
        }
    }
}

impl<S> Drop for Provider<S> {
    fn drop(&mut self) {
        // Best effort if unmount() was never called. Slots already taken
        // are no-ops.
        self.stop_observers();
    }
}

// =============================================================================
// Context Handle
// =============================================================================

/// Weak handle to a provider's store.
///
/// Cheap to clone and hand down a consumer tree. Every operation goes
/// through [`ContextHandle::with`], which panics once the provider has
/// unmounted - a silent fallback would corrupt consumer state invisibly.
pub struct ContextHandle<S> {
    store: Weak<S>,
    observers: Weak<RefCell<Vec<Option<Box<dyn FnOnce()>>>>>,
    label: &'static str,
}

impl<S> Clone for ContextHandle<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            observers: self.observers.clone(),
            label: self.label,
        }
    }
}

impl<S> ContextHandle<S> {
    /// The label of the owning provider.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether the owning provider is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Run `f` against the store.
    ///
    /// # Panics
    ///
    /// Panics if the provider has unmounted. This is a usage error in the
    /// integration, not a recoverable condition.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        match self.try_with(f) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible variant of [`with`](Self::with) for callers that need to
    /// probe instead of assert.
    pub fn try_with<R>(&self, f: impl FnOnce(&S) -> R) -> Result<R, OutsideProvider> {
        let store = self.store.upgrade().ok_or(OutsideProvider(self.label))?;
        Ok(f(&store))
    }

    /// Subscribe an observer effect.
    ///
    /// `f` runs immediately, and again after every change to the signals
    /// it read. The returned cleanup stops it; provider unmount stops it
    /// too. Both paths are safe to combine - stopping twice is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the provider has unmounted.
    pub fn watch(&self, f: impl Fn() + 'static) -> Cleanup {
        let Some(observers) = self.observers.upgrade() else {
            panic!("{}", OutsideProvider(self.label));
        };

        let stop = effect(f);
        let index = {
            let mut slots = observers.borrow_mut();
            slots.push(Some(Box::new(stop)));
            slots.len() - 1
        };

        let slots = Rc::downgrade(&observers);
        Box::new(move || {
            if let Some(slots) = slots.upgrade() {
                if let Some(stop) = slots.borrow_mut()[index].take() {
                    stop();
                }
            }
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
