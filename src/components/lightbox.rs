//! Lightbox Component
//!
//! Full-size preview of the gallery store's selected item. Dismissed by the
//! close button, a click outside the content card, or Escape (bound by the
//! page). The rendered copy outlives the selection by `EXIT_DURATION` so the
//! overlay can fade out.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos_overlay::event_is_outside;

use crate::components::media::MediaFull;
use crate::modal::{Presence, EXIT_DURATION};
use crate::models::GalleryItem;
use crate::store::{store_close_preview, use_gallery_store, GalleryStateStoreFields};

#[component]
pub fn Lightbox() -> impl IntoView {
    let store = use_gallery_store();
    let content_ref = NodeRef::<html::Div>::new();

    let selected = Memo::new(move |_| store.preview().with(|preview| preview.selected().cloned()));
    let (shown, set_shown) = signal(None::<GalleryItem>);
    let (presence, set_presence) = signal(Presence::Hidden);
    let exit_timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let current = selected.get();
        let next = presence.get_untracked().on_selection(current.is_some());
        match current {
            Some(item) => {
                // Dropping a pending timeout cancels it
                exit_timer.set_value(None);
                set_shown.set(Some(item));
            }
            None if next == Presence::Leaving => {
                let timeout = Timeout::new(EXIT_DURATION.as_millis() as u32, move || {
                    set_presence.try_update(|p| *p = p.on_exit_elapsed());
                    if presence.try_get_untracked().is_some_and(|p| !p.is_mounted()) {
                        set_shown.try_update(|s| *s = None);
                    }
                });
                exit_timer.set_value(Some(timeout));
            }
            None => {}
        }
        set_presence.set(next);
    });

    on_cleanup(move || {
        exit_timer.try_update_value(|timer| timer.take());
    });

    let close = move || store_close_preview(&store);

    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        let content = content_ref.get();
        let node = content.as_ref().map(|el| {
            let node: &web_sys::Node = el.as_ref();
            node
        });
        if event_is_outside(node, &ev) {
            close();
        }
    };

    view! {
        {move || shown.get().map(|item| {
            view! {
                <div
                    class="lightbox-backdrop fixed inset-0 bg-gray-950/95 backdrop-blur-2xl flex items-center justify-center z-50 p-4 md:p-6 lg:p-8"
                    class:leaving=move || presence.get() == Presence::Leaving
                    role="dialog"
                    aria-modal="true"
                    aria-label=item.title.clone()
                    on:click=on_backdrop_click
                >
                    <div
                        node_ref=content_ref
                        class="lightbox-content relative max-w-4xl w-full bg-gradient-to-b from-gray-900/80 to-gray-950/80 backdrop-blur-xl border border-amber-500/30 rounded-2xl md:rounded-3xl overflow-hidden shadow-2xl shadow-amber-500/20"
                    >
                        <div class="absolute inset-0 bg-gradient-to-br from-amber-500/5 via-transparent to-yellow-500/5 pointer-events-none" />

                        <button
                            class="absolute top-3 right-3 md:top-4 md:right-4 lg:top-6 lg:right-6 z-10 bg-gradient-to-r from-amber-500 to-yellow-500 hover:from-yellow-400 hover:to-amber-400 text-gray-950 font-bold px-4 md:px-6 py-2 md:py-2.5 rounded-lg md:rounded-xl transition-all duration-300 shadow-lg shadow-amber-500/30 text-sm md:text-base"
                            on:click=move |_| close()
                        >
                            "✕ Close"
                        </button>

                        <div class="relative w-full h-[45vh] sm:h-[55vh] md:h-[60vh] lg:h-[70vh] flex items-center justify-center p-8 md:p-12 bg-gray-900/50">
                            <MediaFull media=item.media.clone() alt=item.title.clone() class="w-full h-full object-contain" />
                        </div>

                        <div class="relative p-6 md:p-8 lg:p-10 text-center border-t border-white/5 bg-gradient-to-b from-gray-900/50 to-gray-950/50">
                            <h2 class="text-2xl md:text-3xl lg:text-4xl font-bold bg-gradient-to-r from-amber-400 to-yellow-500 bg-clip-text text-transparent mb-3 md:mb-4">
                                {item.title.clone()}
                            </h2>
                            <p class="text-gray-400 text-sm md:text-base lg:text-lg max-w-2xl mx-auto leading-relaxed">
                                {item.description.clone()}
                            </p>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
