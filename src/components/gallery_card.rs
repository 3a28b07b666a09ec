//! Gallery Card Component
//!
//! One card per registry item. The layout decides the card's shape and
//! hover affordances; previewable cards open the lightbox on click.

use leptos::prelude::*;

use crate::animation::Stagger;
use crate::components::media::MediaThumbnail;
use crate::models::GalleryItem;
use crate::store::{store_open_preview, use_gallery_store};

/// Card shape per gallery
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLayout {
    /// Screenshot, copy, category badge and a View Live link
    Project,
    /// Square tile with a hover overlay
    Logo,
    /// Tall tile in masonry columns
    Poster,
    /// Video thumbnail with a play overlay
    Reel,
}

impl CardLayout {
    pub fn grid_class(self) -> &'static str {
        match self {
            CardLayout::Project => "grid sm:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-10",
            CardLayout::Logo => "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 2xl:grid-cols-5 gap-6 justify-items-center",
            CardLayout::Poster => "columns-1 sm:columns-2 lg:columns-3 xl:columns-4 gap-6 space-y-6",
            CardLayout::Reel => "grid sm:grid-cols-2 lg:grid-cols-3 gap-10",
        }
    }

    pub fn stagger(self) -> Stagger {
        match self {
            CardLayout::Project => Stagger::FEATURED,
            CardLayout::Logo | CardLayout::Poster => Stagger::TILES,
            CardLayout::Reel => Stagger::REELS,
        }
    }

    /// Label on the hover overlay of previewable cards
    pub fn action_label(self) -> &'static str {
        match self {
            CardLayout::Project => "View Project",
            CardLayout::Logo => "View Logo",
            CardLayout::Poster => "View Poster",
            CardLayout::Reel => "Watch Reel",
        }
    }
}

/// Outbound "View Live" link; opens a new browsing context
#[component]
pub fn ViewLiveLink(#[prop(into)] href: String, hovered: ReadSignal<bool>) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="group/btn relative inline-flex items-center gap-2 px-6 py-3 bg-gradient-to-r from-amber-500 to-yellow-500 text-gray-950 rounded-lg font-semibold overflow-hidden transition-all duration-500 hover:shadow-lg hover:shadow-amber-500/30"
            on:click=|ev| ev.stop_propagation()
        >
            <span class="relative z-10">"View Live"</span>
            <span
                class="relative z-10 transition-transform duration-300"
                style=move || if hovered.get() { "transform: translateX(4px);" } else { "transform: translateX(0);" }
            >
                "→"
            </span>
        </a>
    }
}

#[component]
pub fn GalleryCard(item: GalleryItem, layout: CardLayout, previewable: bool) -> impl IntoView {
    let store = use_gallery_store();
    let (hovered, set_hovered) = signal(false);

    let title = item.title.clone();
    let on_open = {
        let item = item.clone();
        move |_| {
            if previewable {
                store_open_preview(&store, item.clone());
            }
        }
    };
    let cursor = if previewable { "cursor-pointer" } else { "" };

    let body = match layout {
        CardLayout::Project => {
            let category = item.category.clone();
            let tags = item.tags.clone();
            let live_url = item.live_url.clone();
            view! {
                <div class="relative bg-gradient-to-b from-gray-900/50 to-gray-950/50 backdrop-blur-sm rounded-2xl overflow-hidden border border-gray-800/50 hover:border-amber-500/50 transition-all duration-700 hover:-translate-y-3 shadow-2xl shadow-black/50 hover:shadow-amber-500/20">
                    <div class="relative w-full h-64 overflow-hidden">
                        <div
                            class="w-full h-full transition-transform duration-700"
                            style=move || if hovered.get() { "transform: scale(1.1);" } else { "transform: scale(1);" }
                        >
                            <MediaThumbnail media=item.media.clone() alt=title.clone() class="w-full h-full object-cover" />
                        </div>
                    </div>
                    <div class="relative p-8">
                        <h3 class="text-2xl font-bold bg-gradient-to-r from-amber-400 to-yellow-500 bg-clip-text text-transparent mb-3">
                            {item.title.clone()}
                        </h3>
                        <p class="text-gray-400 leading-relaxed mb-6">{item.description.clone()}</p>
                        {(!tags.is_empty()).then(|| view! {
                            <ul class="flex flex-wrap gap-2 mb-6">
                                {tags.into_iter().map(|tag| view! {
                                    <li class="text-xs text-amber-300/80 border border-amber-500/20 px-2 py-0.5 rounded-full">{tag}</li>
                                }).collect_view()}
                            </ul>
                        })}
                        <div class="flex items-center justify-between gap-4">
                            {category.map(|label| view! {
                                <span class="text-xs text-gray-500 bg-gray-800 px-3 py-1 rounded-full">{label}</span>
                            })}
                            {live_url.map(|href| view! { <ViewLiveLink href=href hovered=hovered /> })}
                        </div>
                    </div>
                    // Accent underline
                    <div
                        class="absolute bottom-0 left-0 h-[2px] w-full bg-gradient-to-r from-transparent via-amber-400 to-transparent origin-left transition-transform duration-500"
                        style=move || if hovered.get() { "transform: scaleX(1);" } else { "transform: scaleX(0);" }
                    />
                </div>
            }
            .into_any()
        }
        CardLayout::Logo | CardLayout::Poster => {
            let (frame, image) = if layout == CardLayout::Logo {
                ("relative bg-gray-900/50 p-6", "w-full h-auto object-contain transition-transform duration-700 group-hover:scale-110")
            } else {
                ("relative overflow-hidden", "w-full h-auto object-cover transition-transform duration-700 group-hover:scale-105")
            };
            view! {
                <div class="w-full relative group overflow-hidden break-inside-avoid rounded-2xl border border-gray-800/50 hover:border-amber-500/50 transition-all duration-500 bg-gradient-to-b from-gray-900/40 to-gray-950/40 backdrop-blur-sm shadow-xl shadow-black/50 hover:shadow-amber-500/20 hover:-translate-y-1">
                    <div class=frame>
                        <MediaThumbnail media=item.media.clone() alt=title.clone() class=image />
                    </div>
                    <div
                        class="absolute inset-0 bg-gradient-to-t from-gray-950/95 via-gray-900/80 to-transparent transition-opacity duration-500 flex flex-col items-center justify-center p-4 text-center"
                        style=move || if hovered.get() { "opacity: 1;" } else { "opacity: 0;" }
                    >
                        <span class="text-amber-400 font-bold text-lg mb-2">{item.title.clone()}</span>
                        <div class="px-5 py-2 bg-gradient-to-r from-amber-500 to-yellow-500 text-gray-950 rounded-lg font-semibold text-sm shadow-lg shadow-amber-500/30">
                            {layout.action_label()}
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
        CardLayout::Reel => {
            let duration = item.duration.clone();
            view! {
                <div class="relative group rounded-2xl overflow-hidden border border-gray-800/50 hover:border-amber-500/50 transition duration-300">
                    <div class="relative w-full h-80">
                        <MediaThumbnail
                            media=item.media.clone()
                            alt=title.clone()
                            class="w-full h-full object-cover transition duration-500 group-hover:scale-105"
                        />
                        <div
                            class="absolute inset-0 bg-black/60 transition duration-300 flex items-center justify-center"
                            style=move || if hovered.get() { "opacity: 1;" } else { "opacity: 0;" }
                        >
                            <span class="bg-amber-500 text-gray-950 px-6 py-2 rounded-full font-semibold">
                                {layout.action_label()}
                            </span>
                        </div>
                        {item.media.is_video().then(|| view! {
                            <span class="absolute top-3 left-3 w-9 h-9 rounded-full bg-black/60 text-amber-300 flex items-center justify-center text-sm">"▶"</span>
                        })}
                        {duration.map(|d| view! {
                            <span class="absolute bottom-3 right-3 bg-black/70 text-amber-300 text-xs px-2 py-1 rounded-md">{d}</span>
                        })}
                    </div>
                    <div class="p-6 bg-gray-900">
                        <h3 class="text-lg font-semibold text-amber-400">{item.title.clone()}</h3>
                        <p class="text-gray-400 mt-3 text-sm">{item.description.clone()}</p>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div
            class=format!("group relative w-full {}", cursor)
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:click=on_open
        >
            {body}
        </div>
    }
}
