//! Menu Store - navigation-menu interaction state.
//!
//! Backs the menu widgets of the host UI: whether the menu context is
//! active, whether hover interaction is enabled, and how deep into
//! submenus the user currently is. `is_menu_open` is true while any
//! submenu is entered.
//!
//! Submenu entry is tracked with explicit handles rather than ambient
//! state: entering returns a [`SubmenuHandle`] whose `leave` undoes it
//! (idempotently per handle).

use spark_signals::{signal, Signal};
use std::cell::Cell;

use crate::provider::{ContextHandle, Provider};
use crate::types::Cleanup;

/// Context label used in logs and fail-fast panic messages.
const CONTEXT_LABEL: &str = "menu";

// =============================================================================
// Flags
// =============================================================================

bitflags::bitflags! {
    /// Menu interaction flags as a bitfield.
    ///
    /// Combine with bitwise OR: `MenuFlags::ACTIVE | MenuFlags::HOVER_ENABLED`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MenuFlags: u8 {
        /// The menu context is active (has the user's attention).
        const ACTIVE = 1 << 0;
        /// Hover opens submenus; disabled for touch-driven interaction.
        const HOVER_ENABLED = 1 << 1;
    }
}

impl Default for MenuFlags {
    fn default() -> Self {
        Self::HOVER_ENABLED
    }
}

// =============================================================================
// Store
// =============================================================================

/// In-memory menu state for one provider mount.
pub struct MenuStore {
    flags: Signal<MenuFlags>,
    submenu_depth: Signal<usize>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self {
            flags: signal(MenuFlags::default()),
            submenu_depth: signal(0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.flags.get().contains(MenuFlags::ACTIVE)
    }

    pub fn set_active(&self, active: bool) {
        self.set_flag(MenuFlags::ACTIVE, active);
    }

    pub fn is_hover_enabled(&self) -> bool {
        self.flags.get().contains(MenuFlags::HOVER_ENABLED)
    }

    pub fn set_hover_enabled(&self, enabled: bool) {
        self.set_flag(MenuFlags::HOVER_ENABLED, enabled);
    }

    /// True while any submenu is entered.
    pub fn is_menu_open(&self) -> bool {
        self.submenu_depth.get() > 0
    }

    /// Current submenu nesting depth (0 = top level only).
    pub fn submenu_depth(&self) -> usize {
        self.submenu_depth.get()
    }

    fn set_flag(&self, flag: MenuFlags, on: bool) {
        let mut flags = self.flags.get();
        flags.set(flag, on);
        self.flags.set(flags);
    }

    fn enter_submenu(&self) -> usize {
        let level = self.submenu_depth.get() + 1;
        self.submenu_depth.set(level);
        log::trace!("menu: entered submenu level {level}");
        level
    }

    fn leave_submenu(&self) {
        let depth = self.submenu_depth.get();
        if depth > 0 {
            self.submenu_depth.set(depth - 1);
        }
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Provider / Context
// =============================================================================

/// Owns a [`MenuStore`] for the duration of one mount.
pub struct MenuProvider {
    inner: Provider<MenuStore>,
}

impl MenuProvider {
    pub fn mount() -> Self {
        Self {
            inner: Provider::mount(CONTEXT_LABEL, MenuStore::new()),
        }
    }

    pub fn store(&self) -> &MenuStore {
        self.inner.store()
    }

    pub fn context(&self) -> MenuContext {
        MenuContext {
            handle: self.inner.context(),
        }
    }

    pub fn unmount(self) {
        self.inner.unmount();
    }
}

/// Bound references to one menu store's operations.
#[derive(Clone)]
pub struct MenuContext {
    handle: ContextHandle<MenuStore>,
}

impl MenuContext {
    pub fn is_mounted(&self) -> bool {
        self.handle.is_mounted()
    }

    pub fn is_active(&self) -> bool {
        self.handle.with(|store| store.is_active())
    }

    pub fn set_active(&self, active: bool) {
        self.handle.with(|store| store.set_active(active));
    }

    pub fn is_hover_enabled(&self) -> bool {
        self.handle.with(|store| store.is_hover_enabled())
    }

    pub fn set_hover_enabled(&self, enabled: bool) {
        self.handle.with(|store| store.set_hover_enabled(enabled));
    }

    pub fn is_menu_open(&self) -> bool {
        self.handle.with(|store| store.is_menu_open())
    }

    pub fn submenu_depth(&self) -> usize {
        self.handle.with(|store| store.submenu_depth())
    }

    /// Enter a submenu; the returned handle's level is 1-based.
    pub fn enter_submenu(&self) -> SubmenuHandle {
        let level = self.handle.with(|store| store.enter_submenu());
        SubmenuHandle {
            handle: self.handle.clone(),
            level,
            left: Cell::new(false),
        }
    }

    /// Subscribe an observer effect; see
    /// [`ContextHandle::watch`](crate::provider::ContextHandle::watch).
    pub fn watch(&self, f: impl Fn() + 'static) -> Cleanup {
        self.handle.watch(f)
    }
}

// =============================================================================
// Submenu Handle
// =============================================================================

/// Proof of one submenu entry. `leave` undoes it; leaving twice through
/// the same handle is a no-op.
pub struct SubmenuHandle {
    handle: ContextHandle<MenuStore>,
    level: usize,
    left: Cell<bool>,
}

impl SubmenuHandle {
    /// Nesting level of this entry (1 = first submenu).
    pub fn level(&self) -> usize {
        self.level
    }

    /// Leave this submenu.
    pub fn leave(&self) {
        if self.left.replace(true) {
            return;
        }
        self.handle.with(|store| store.leave_submenu());
    }
}

// =============================================================================
// TESTS
// =============================================================================
