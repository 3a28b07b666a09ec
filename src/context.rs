//! Application Context
//!
//! App-wide handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos_overlay::ScrollLock;

use crate::nav::MenuState;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reference-counted body scroll lock shared by every overlay
    pub scroll_lock: ScrollLock,
    /// Mobile menu state - read
    pub menu: ReadSignal<MenuState>,
    /// Mobile menu state - write
    set_menu: WriteSignal<MenuState>,
}

impl AppContext {
    pub fn new(scroll_lock: ScrollLock, menu: (ReadSignal<MenuState>, WriteSignal<MenuState>)) -> Self {
        Self {
            scroll_lock,
            menu: menu.0,
            set_menu: menu.1,
        }
    }

    /// Menu button
    pub fn toggle_menu(&self) {
        self.set_menu.update(|state| *state = state.toggle());
        log::debug!("menu {:?}", self.menu.get_untracked());
    }

    /// Link selection, Escape, route change
    pub fn close_menu(&self) {
        if self.menu.get_untracked().is_open() {
            self.set_menu.update(|state| *state = state.dismiss());
            log::debug!("menu closed");
        }
    }

    pub fn menu_open(&self) -> Signal<bool> {
        let menu = self.menu;
        Signal::derive(move || menu.get().is_open())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
