//! HighTechMG Site App
//!
//! Root component: shared context, header and the route table.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_overlay::ScrollLock;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::Navbar;
use crate::context::AppContext;
use crate::nav::MenuState;
use crate::pages::{GalleryPage, HomePage, NotFound, LOGO_PAGE, POSTER_PAGE, REELS_PAGE, WEBSITES_PAGE};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One lock for every overlay on the page
    let scroll_lock = ScrollLock::new();
    provide_context(AppContext::new(scroll_lock, signal(MenuState::default())));

    view! {
        <Router>
            <Navbar />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=HomePage />
                <Route path=StaticSegment(WEBSITES_PAGE.segment()) view=|| view! { <GalleryPage config=&WEBSITES_PAGE /> } />
                <Route path=StaticSegment(LOGO_PAGE.segment()) view=|| view! { <GalleryPage config=&LOGO_PAGE /> } />
                <Route path=StaticSegment(POSTER_PAGE.segment()) view=|| view! { <GalleryPage config=&POSTER_PAGE /> } />
                <Route path=StaticSegment(REELS_PAGE.segment()) view=|| view! { <GalleryPage config=&REELS_PAGE /> } />
            </Routes>
        </Router>
    }
}
