//! Category Filter Component
//!
//! Pill buttons for the websites grid; one active label at a time.

use leptos::prelude::*;

use crate::store::{store_set_category, use_gallery_store, GalleryStateStoreFields};

#[component]
pub fn CategoryFilter(categories: Vec<String>) -> impl IntoView {
    let store = use_gallery_store();

    view! {
        <section class="relative max-w-7xl mx-auto mb-12 flex flex-wrap justify-center gap-4">
            {categories.into_iter().map(|label| {
                let is_active = {
                    let label = label.clone();
                    move || store.active_category().with(|active| active.is(&label))
                };
                let selected = label.clone();
                view! {
                    <button
                        class=move || if is_active() {
                            "px-6 py-2 rounded-full border transition duration-300 bg-amber-500 text-gray-950 border-amber-500"
                        } else {
                            "px-6 py-2 rounded-full border transition duration-300 border-gray-700 text-gray-400 hover:border-amber-500 hover:text-amber-400"
                        }
                        on:click=move |_| store_set_category(&store, selected.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </section>
    }
}
