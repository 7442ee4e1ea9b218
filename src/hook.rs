//! Panic-hook integration for guarded calls.
//!
//! `catch_unwind` absorbs the unwind but still runs the process panic
//! hook, which reports to stderr. The hook installed here stays silent
//! for panics that a guard on the current thread is about to absorb,
//! recording the panic site for the capture instead, and delegates to
//! the previously installed hook for everything else.

use std::cell::{Cell, RefCell};
use std::panic;

use once_cell::sync::Lazy;

thread_local! {
    /// Number of guarded calls currently active on this thread.
    static GUARD_DEPTH: Cell<usize> = const { Cell::new(0) };

    /// Panic site recorded by the hook for the innermost active guard.
    static PANIC_SITE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// One-time installation of the chained panic hook.
static HOOK: Lazy<()> = Lazy::new(|| {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if GUARD_DEPTH.with(Cell::get) > 0 {
            let site = info
                .location()
                .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
            PANIC_SITE.with(|slot| *slot.borrow_mut() = site);
        } else {
            previous(info);
        }
    }));
});

/// Marks the current thread as inside a guarded call for its lifetime.
///
/// Dropping decrements the depth even when leaving by unwind, so the
/// hook never misattributes a later, unguarded panic.
pub(crate) struct GuardScope;

impl GuardScope {
    pub(crate) fn enter() -> Self {
        Lazy::force(&HOOK);
        GUARD_DEPTH.with(|depth| depth.set(depth.get() + 1));
        // Drop any site left behind by a panic absorbed elsewhere
        PANIC_SITE.with(|slot| *slot.borrow_mut() = None);
        GuardScope
    }

    /// Takes the panic site the hook recorded for this guard, if any.
    pub(crate) fn take_site(&self) -> Option<String> {
        PANIC_SITE.with(|slot| slot.borrow_mut().take())
    }
}

impl Drop for GuardScope {
    fn drop(&mut self) {
        GUARD_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}
