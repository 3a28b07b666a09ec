//! Gallery Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each gallery
//! page owns one store; nothing is shared between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::ActiveCategory;
use crate::modal::ModalState;
use crate::models::GalleryItem;

/// State of one gallery page with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct GalleryState {
    /// Item shown in the lightbox
    pub preview: ModalState<GalleryItem>,
    /// Selected filter label (websites page)
    pub active_category: ActiveCategory,
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

/// Get the gallery store from context
pub fn use_gallery_store() -> GalleryStore {
    expect_context::<GalleryStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show an item in the lightbox, replacing any current preview
pub fn store_open_preview(store: &GalleryStore, item: GalleryItem) {
    log::debug!("preview open: #{} {}", item.id, item.title);
    store.preview().write().open(item);
}

/// Close the lightbox; a no-op when nothing is open
pub fn store_close_preview(store: &GalleryStore) {
    let open = store.preview().with_untracked(|preview| preview.is_open());
    if open {
        log::debug!("preview closed");
        store.preview().write().close();
    }
}

/// Switch the grid filter
pub fn store_set_category(store: &GalleryStore, label: String) {
    if store.active_category().with_untracked(|active| active.is(&label)) {
        return;
    }
    log::debug!("category: {}", label);
    store.active_category().write().set(label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use leptos_overlay::{bind_overlay, ScrollLock, ScrollTarget};
    use std::cell::RefCell;
    use std::future::Future;
    use std::rc::Rc;
    use tokio::task::LocalSet;
    use wasm_bindgen::JsValue;

    use crate::filter::ALL;
    use crate::models::Media;

    #[derive(Clone, Default)]
    struct RecordingTarget(Rc<RefCell<Vec<bool>>>);

    impl ScrollTarget for RecordingTarget {
        fn apply(&self, locked: bool) -> std::result::Result<(), JsValue> {
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

    fn item(id: u32) -> GalleryItem {
        GalleryItem {
            id,
            title: format!("Logo {}", id),
            description: String::new(),
            media: Media::Image { src: format!("/images/logo{}.png", id) },
            category: None,
            tags: Vec::new(),
            duration: None,
            live_url: None,
        }
    }

    fn selected_id(store: &GalleryStore) -> Option<u32> {
        store.preview().with_untracked(|preview| preview.selected().map(|item| item.id))
    }

    /// Store plus a scroll lock bound to its preview, as a gallery page wires them
    fn previewing_page(target: RecordingTarget) -> (GalleryStore, ScrollLock) {
        let store = Store::new(GalleryState::default());
        let lock = ScrollLock::with_target(target);
        let is_open = Signal::derive(move || store.preview().with(|preview| preview.is_open()));
        bind_overlay(lock, is_open);
        (store, lock)
    }

    #[tokio::test]
    async fn test_preview_open_close_drives_scroll_lock() {
        with_runtime(async {
            let target = RecordingTarget::default();
            let (store, lock) = previewing_page(target.clone());
            Executor::tick().await;
            assert!(!lock.is_locked());

            store_open_preview(&store, item(2));
            Executor::tick().await;
            assert!(lock.is_locked());

            store_close_preview(&store);
            Executor::tick().await;
            assert_eq!(selected_id(&store), None);
            assert!(!lock.is_locked());
        })
        .await;
    }

    #[tokio::test]
    async fn test_last_open_wins_and_lock_stays_held() {
        with_runtime(async {
            let target = RecordingTarget::default();
            let (store, lock) = previewing_page(target.clone());

            store_open_preview(&store, item(2));
            Executor::tick().await;
            store_open_preview(&store, item(5));
            Executor::tick().await;
            assert_eq!(selected_id(&store), Some(5));
            assert!(lock.is_locked());

            let mut applied = target.0.borrow().clone();
            applied.dedup();
            assert_eq!(applied, vec![false, true]);
        })
        .await;
    }

    #[tokio::test]
    async fn test_close_with_nothing_open_changes_nothing() {
        with_runtime(async {
            let target = RecordingTarget::default();
            let (store, lock) = previewing_page(target.clone());
            Executor::tick().await;

            // Escape and outside clicks on a page without a preview
            store_close_preview(&store);
            store_close_preview(&store);
            Executor::tick().await;
            assert_eq!(selected_id(&store), None);
            assert!(!lock.is_locked());
            assert!(target.0.borrow().iter().all(|locked| !locked));
        })
        .await;
    }

    #[test]
    fn test_set_category_replaces_label() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(GalleryState::default());
        assert!(store.active_category().with_untracked(|active| active.is(ALL)));

        store_set_category(&store, "Ecommerce".to_string());
        assert!(store.active_category().with_untracked(|active| active.is("Ecommerce")));

        // Same label again is a no-op
        store_set_category(&store, "Ecommerce".to_string());
        store_set_category(&store, ALL.to_string());
        assert!(store.active_category().with_untracked(|active| active.is(ALL)));
    }
}
