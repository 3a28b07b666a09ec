//! Leptos Overlay Utilities
//!
//! Plumbing shared by modal-like overlays (lightboxes, full-screen menus):
//! - a reference-counted document scroll lock
//! - per-overlay leases that acquire on open and release on close/unmount
//! - Escape-key and outside-click dismissal helpers
//!
//! The counting and lease logic is plain Rust so it can be tested off the
//! browser; the Leptos bindings only wire it to signals and DOM events.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

// ========================
// Overlay count
// ========================

/// How the lock state changed after an acquire/release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockChange {
    /// First overlay opened: the document must stop scrolling
    Locked,
    /// Last overlay closed: the document may scroll again
    Unlocked,
    /// Count changed but the lock state did not
    Unchanged,
}

/// Number of overlays currently holding the scroll lock
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayCount {
    open: usize,
}

impl OverlayCount {
    pub fn acquire(&mut self) -> LockChange {
        self.open += 1;
        if self.open == 1 {
            LockChange::Locked
        } else {
            LockChange::Unchanged
        }
    }

    /// Saturates at zero so a stray release can never go negative.
    pub fn release(&mut self) -> LockChange {
        match self.open {
            0 => LockChange::Unchanged,
            1 => {
                self.open = 0;
                LockChange::Unlocked
            }
            _ => {
                self.open -= 1;
                LockChange::Unchanged
            }
        }
    }

    pub fn is_locked(&self) -> bool {
        self.open > 0
    }

    pub fn open(&self) -> usize {
        self.open
    }
}

// ========================
// Leases
// ========================

/// What an overlay must do to keep its lease in sync with its open state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaseAction {
    Acquire,
    Release,
}

/// One overlay's claim on the scroll lock.
///
/// Only edges produce actions: reopening while already open (last-open-wins
/// selection changes) never acquires twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lease {
    held: bool,
}

impl Lease {
    pub fn sync(&mut self, open: bool) -> Option<LeaseAction> {
        match (self.held, open) {
            (false, true) => {
                self.held = true;
                Some(LeaseAction::Acquire)
            }
            (true, false) => {
                self.held = false;
                Some(LeaseAction::Release)
            }
            _ => None,
        }
    }

    /// Give the lease back on unmount
    pub fn drop_lease(&mut self) -> Option<LeaseAction> {
        self.sync(false)
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

// ========================
// Scroll targets
// ========================

/// Something whose scrolling can be switched off while overlays are open
pub trait ScrollTarget {
    fn apply(&self, locked: bool) -> Result<(), JsValue>;
}

/// The document body, via `style.overflow`
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScroll;

impl ScrollTarget for BodyScroll {
    fn apply(&self, locked: bool) -> Result<(), JsValue> {
        let body = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.body())
            .ok_or_else(|| JsValue::from_str("document body unavailable"))?;
        let style = body.style();
        if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        }
    }
}

// ========================
// Leptos bindings
// ========================

/// App-wide scroll lock shared by every overlay.
///
/// Create once near the root and hand it out through context.
#[derive(Clone, Copy)]
pub struct ScrollLock {
    count: RwSignal<OverlayCount>,
}

impl ScrollLock {
    /// Lock on the document body
    pub fn new() -> Self {
        Self::with_target(BodyScroll)
    }

    pub fn with_target<T: ScrollTarget + 'static>(target: T) -> Self {
        let count = RwSignal::new(OverlayCount::default());
        Effect::new(move |_| {
            let locked = count.with(|c| c.is_locked());
            if let Err(err) = target.apply(locked) {
                log::warn!("scroll lock not applied: {:?}", err);
            }
        });
        Self { count }
    }

    pub fn acquire(&self) {
        self.count.update(|c| {
            if c.acquire() == LockChange::Locked {
                log::debug!("scroll locked");
            }
        });
    }

    pub fn release(&self) {
        // May run from on_cleanup after the root is gone
        self.count.try_update(|c| {
            if c.release() == LockChange::Unlocked {
                log::debug!("scroll unlocked");
            }
        });
    }

    pub fn is_locked(&self) -> bool {
        self.count.with_untracked(|c| c.is_locked())
    }

    pub fn apply(&self, action: LeaseAction) {
        match action {
            LeaseAction::Acquire => self.acquire(),
            LeaseAction::Release => self.release(),
        }
    }
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep an overlay's lease in sync with `is_open` for the lifetime of the
/// calling component. The lease is returned on unmount even if the overlay
/// was still open.
pub fn bind_overlay(lock: ScrollLock, is_open: Signal<bool>) {
    let lease = StoredValue::new(Lease::default());
    Effect::new(move |_| {
        let open = is_open.get();
        if let Some(action) = lease.try_update_value(|l| l.sync(open)).flatten() {
            lock.apply(action);
        }
    });
    on_cleanup(move || {
        if let Some(action) = lease.try_update_value(|l| l.drop_lease()).flatten() {
            lock.apply(action);
        }
    });
}

/// True for the key value of an Escape press
pub fn is_escape_key(key: &str) -> bool {
    // Old Edge reported "Esc"
    key == "Escape" || key == "Esc"
}

/// Call `on_escape` whenever Escape is pressed while the calling component
/// is mounted. The window listener is removed on unmount.
pub fn bind_escape(on_escape: impl Fn() + 'static) {
    let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if is_escape_key(&ev.key()) {
            on_escape();
        }
    });
    on_cleanup(move || handle.remove());
}

/// Whether a click should dismiss an overlay: only when the content element
/// exists and does not contain the click target.
pub fn click_is_outside(content_mounted: bool, target_inside_content: bool) -> bool {
    content_mounted && !target_inside_content
}

/// Check an event target against the overlay's content element
pub fn event_is_outside(content: Option<&web_sys::Node>, ev: &web_sys::Event) -> bool {
    let inside = match (content, ev.target()) {
        (Some(node), Some(target)) => match target.dyn_ref::<web_sys::Node>() {
            Some(target_node) => node.contains(Some(target_node)),
            None => false,
        },
        _ => false,
    };
    click_is_outside(content.is_some(), inside)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_overlay_locks_and_unlocks() {
        let mut count = OverlayCount::default();
        assert_eq!(count.acquire(), LockChange::Locked);
        assert!(count.is_locked());
        assert_eq!(count.release(), LockChange::Unlocked);
        assert!(!count.is_locked());
    }

    #[test]
    fn test_nested_overlays_unlock_only_when_all_closed() {
        let mut count = OverlayCount::default();
        count.acquire(); // lightbox
        assert_eq!(count.acquire(), LockChange::Unchanged); // mobile menu
        assert_eq!(count.release(), LockChange::Unchanged);
        assert!(count.is_locked());
        assert_eq!(count.release(), LockChange::Unlocked);
        assert!(!count.is_locked());
    }

    #[test]
    fn test_release_saturates_at_zero() {
        let mut count = OverlayCount::default();
        assert_eq!(count.release(), LockChange::Unchanged);
        assert_eq!(count.release(), LockChange::Unchanged);
        assert_eq!(count.open(), 0);
        assert_eq!(count.acquire(), LockChange::Locked);
    }

    #[test]
    fn test_lease_only_acts_on_edges() {
        let mut lease = Lease::default();
        assert_eq!(lease.sync(false), None);
        assert_eq!(lease.sync(true), Some(LeaseAction::Acquire));
        // Switching the selection keeps the overlay open
        assert_eq!(lease.sync(true), None);
        assert_eq!(lease.sync(false), Some(LeaseAction::Release));
        assert_eq!(lease.sync(false), None);
    }

    #[test]
    fn test_lease_released_on_unmount_while_open() {
        let mut count = OverlayCount::default();
        let mut lease = Lease::default();
        if let Some(LeaseAction::Acquire) = lease.sync(true) {
            count.acquire();
        }
        if let Some(LeaseAction::Release) = lease.drop_lease() {
            count.release();
        }
        assert!(!lease.is_held());
        assert!(!count.is_locked());
        assert_eq!(lease.drop_lease(), None);
    }

    #[test]
    fn test_repeated_open_close_never_leaks() {
        let mut count = OverlayCount::default();
        let mut lease = Lease::default();
        for _ in 0..10 {
            for open in [true, false, false, true, true, false] {
                match lease.sync(open) {
                    Some(LeaseAction::Acquire) => { count.acquire(); }
                    Some(LeaseAction::Release) => { count.release(); }
                    None => {}
                }
                assert_eq!(count.is_locked(), open);
            }
        }
        assert_eq!(count.open(), 0);
    }

    #[test]
    fn test_escape_key_names() {
        assert!(is_escape_key("Escape"));
        assert!(is_escape_key("Esc"));
        assert!(!is_escape_key("Enter"));
        assert!(!is_escape_key("escape"));
    }

    #[test]
    fn test_click_is_outside() {
        assert!(click_is_outside(true, false));
        assert!(!click_is_outside(true, true));
        // No modal mounted: nothing to dismiss
        assert!(!click_is_outside(false, false));
    }
}

#[cfg(test)]
mod reactive_tests {
    use super::*;
    use any_spawner::Executor;
    use std::cell::RefCell;
    use std::future::Future;
    use std::rc::Rc;
    use tokio::task::LocalSet;

    /// Records every lock state pushed to the document
    #[derive(Clone, Default)]
    struct RecordingTarget(Rc<RefCell<Vec<bool>>>);

    impl RecordingTarget {
        /// Applied states with consecutive repeats collapsed
        fn transitions(&self) -> Vec<bool> {
            let mut states = self.0.borrow().clone();
            states.dedup();
            states
        }
    }

    impl ScrollTarget for RecordingTarget {
        fn apply(&self, locked: bool) -> Result<(), JsValue> {
            self.0.borrow_mut().push(locked);
            Ok(())
        }
    }

    async fn with_runtime(test: impl Future<Output = ()>) {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();
        LocalSet::new().run_until(test).await;
    }

    #[tokio::test]
    async fn test_open_then_close_releases_lock() {
        with_runtime(async {
            let target = RecordingTarget::default();
            let lock = ScrollLock::with_target(target.clone());
            let open = RwSignal::new(false);
            bind_overlay(lock, open.into());
            Executor::tick().await;
            assert!(!lock.is_locked());

            open.set(true);
            Executor::tick().await;
            assert!(lock.is_locked());

            // Another item selected while already open
            open.set(true);
            Executor::tick().await;
            assert!(lock.is_locked());

            open.set(false);
            Executor::tick().await;
            assert!(!lock.is_locked());
            assert_eq!(target.transitions(), vec![false, true, false]);
        })
        .await;
    }

    #[tokio::test]
    async fn test_unmount_while_open_releases_lock() {
        with_runtime(async {
            let target = RecordingTarget::default();
            let lock = ScrollLock::with_target(target.clone());
            let open = RwSignal::new(false);
            let overlay = Owner::new();
            overlay.with(|| bind_overlay(lock, open.into()));

            open.set(true);
            Executor::tick().await;
            assert!(lock.is_locked());

            overlay.cleanup();
            Executor::tick().await;
            assert!(!lock.is_locked());
            assert_eq!(target.transitions(), vec![false, true, false]);
        })
        .await;
    }

    #[tokio::test]
    async fn test_lock_held_until_every_overlay_closes() {
        with_runtime(async {
            let target = RecordingTarget::default();
            let lock = ScrollLock::with_target(target.clone());
            let lightbox = RwSignal::new(false);
            let menu = RwSignal::new(false);
            bind_overlay(lock, lightbox.into());
            bind_overlay(lock, menu.into());

            lightbox.set(true);
            Executor::tick().await;
            menu.set(true);
            Executor::tick().await;
            assert!(lock.is_locked());

            lightbox.set(false);
            Executor::tick().await;
            assert!(lock.is_locked());

            menu.set(false);
            Executor::tick().await;
            assert!(!lock.is_locked());
            assert_eq!(target.transitions(), vec![false, true, false]);
        })
        .await;
    }

    #[tokio::test]
    async fn test_stray_release_keeps_document_scrollable() {
        with_runtime(async {
            let target = RecordingTarget::default();
            let lock = ScrollLock::with_target(target.clone());
            Executor::tick().await;
            lock.release();
            lock.release();
            Executor::tick().await;
            assert!(!lock.is_locked());

            lock.acquire();
            Executor::tick().await;
            assert!(lock.is_locked());
            lock.release();
            Executor::tick().await;
            assert!(!lock.is_locked());
            assert_eq!(target.transitions(), vec![false, true, false]);
        })
        .await;
    }
}
