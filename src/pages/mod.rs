//! Pages
//!
//! Home, the four gallery pages and the fallback. Every gallery page is the
//! same component driven by a static config.

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFound;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_overlay::{bind_escape, bind_overlay};
use reactive_stores::Store;

use crate::components::{CardLayout, CategoryFilter, CtaSection, GalleryCard, Lightbox, Reveal};
use crate::content::{self, Registry};
use crate::context::use_app_context;
use crate::effects::use_window_pointer;
use crate::filter;
use crate::nav;
use crate::pointer::Glow;
use crate::store::{store_close_preview, GalleryState, GalleryStateStoreFields};

/// Closing call to action
#[derive(Clone, Copy, Debug)]
pub struct CtaCopy {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Everything that differs between gallery pages
#[derive(Clone, Copy, Debug)]
pub struct GalleryPageConfig {
    pub route: &'static str,
    pub document_title: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub registry: Registry,
    pub layout: CardLayout,
    /// Show the category pills above the grid
    pub filterable: bool,
    /// Cards open the lightbox on click
    pub previewable: bool,
    pub cta: CtaCopy,
}

impl GalleryPageConfig {
    /// Route as a router path segment
    pub fn segment(&self) -> &'static str {
        self.route.trim_start_matches('/')
    }
}

pub const WEBSITES_PAGE: GalleryPageConfig = GalleryPageConfig {
    route: nav::WEBSITES,
    document_title: "Website Projects | HighTechMG",
    heading: "Website Projects",
    subtitle: "A collection of premium websites crafted with performance, aesthetics and conversion strategy in mind.",
    registry: Registry::Websites,
    layout: CardLayout::Project,
    filterable: true,
    previewable: false,
    cta: CtaCopy {
        heading: "Need a Custom Website?",
        body: "We build high-performance, responsive and conversion-focused websites tailored for your business goals.",
    },
};

pub const LOGO_PAGE: GalleryPageConfig = GalleryPageConfig {
    route: nav::LOGO_DESIGN,
    document_title: "Logo Design | HighTechMG",
    heading: "Logo Design Gallery",
    subtitle: "Tap on any logo to preview in full screen. Click outside or press ESC to close the preview.",
    registry: Registry::Logos,
    layout: CardLayout::Logo,
    filterable: false,
    previewable: true,
    cta: CtaCopy {
        heading: "Need a Strong Brand Identity?",
        body: "We design memorable and professional logos tailored to your brand vision.",
    },
};

pub const POSTER_PAGE: GalleryPageConfig = GalleryPageConfig {
    route: nav::POSTER_DESIGN,
    document_title: "Poster Design | HighTechMG",
    heading: "Poster Design Gallery",
    subtitle: "Tap on any poster to view in full screen. Click outside or press ESC to close.",
    registry: Registry::Posters,
    layout: CardLayout::Poster,
    filterable: false,
    previewable: true,
    cta: CtaCopy {
        heading: "Need Premium Poster Designs?",
        body: "We craft high-converting promotional posters tailored to your brand strategy.",
    },
};

pub const REELS_PAGE: GalleryPageConfig = GalleryPageConfig {
    route: nav::AI_REELS,
    document_title: "AI Reels | HighTechMG",
    heading: "AI Reels Showcase",
    subtitle: "AI-generated short-form reels crafted for maximum engagement and social media growth. Tap to watch full screen.",
    registry: Registry::Reels,
    layout: CardLayout::Reel,
    filterable: false,
    previewable: true,
    cta: CtaCopy {
        heading: "Want High-Engagement AI Reels?",
        body: "We create AI-powered short videos optimized for Instagram, Facebook and paid ad campaigns.",
    },
};

pub const GALLERY_PAGES: [&GalleryPageConfig; 4] = [&WEBSITES_PAGE, &LOGO_PAGE, &POSTER_PAGE, &REELS_PAGE];

/// Ambient glow that follows the pointer across the whole page
#[component]
pub fn PageGlow() -> impl IntoView {
    let pointer = use_window_pointer();
    view! {
        <div
            class="pointer-events-none fixed inset-0 z-0 transition-opacity duration-300"
            style=move || Glow::PAGE.style(pointer.get())
        />
    }
}

#[component]
pub fn GalleryPage(config: &'static GalleryPageConfig) -> impl IntoView {
    let store = Store::new(GalleryState::default());
    provide_context(store);

    let items = content::items(config.registry);
    log::debug!("{}: {} items", config.registry.name(), items.len());

    if config.previewable {
        let is_open = Signal::derive(move || store.preview().with(|preview| preview.is_open()));
        bind_overlay(use_app_context().scroll_lock, is_open);
        bind_escape(move || store_close_preview(&store));
    }

    let visible = Memo::new(move |_| {
        store.active_category().with(|active| {
            filter::visible(items, active.label())
                .into_iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    });

    let layout = config.layout;
    let previewable = config.previewable;

    view! {
        <Title text=config.document_title />
        <main class="relative min-h-screen bg-gray-950 text-white px-6 pt-32 pb-20 overflow-hidden">
            <PageGlow />
            <div class="absolute top-1/4 -left-32 w-96 h-96 bg-amber-500/10 rounded-full blur-[120px] animate-pulse-slow pointer-events-none" />
            <div class="absolute bottom-1/4 -right-32 w-96 h-96 bg-yellow-500/10 rounded-full blur-[120px] animate-pulse-slow pointer-events-none" />

            <section class="relative max-w-5xl mx-auto text-center mb-16">
                <h1 class="text-4xl md:text-6xl font-bold bg-gradient-to-r from-amber-300 via-yellow-400 to-amber-300 bg-clip-text text-transparent animate-gradient mb-6">
                    {config.heading}
                </h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto leading-relaxed">{config.subtitle}</p>
            </section>

            {config.filterable.then(|| view! { <CategoryFilter categories=filter::categories(items) /> })}

            <section class=format!("relative max-w-7xl mx-auto {}", layout.grid_class())>
                <For
                    each=move || visible.get()
                    key=|(index, item)| (*index, item.id)
                    children=move |(index, item)| view! {
                        <Reveal index=index stagger=layout.stagger() root_margin="-100px" class="w-full">
                            <GalleryCard item=item layout=layout previewable=previewable />
                        </Reveal>
                    }
                />
            </section>

            <Show when=move || visible.with(|v| v.is_empty())>
                <p class="relative text-center text-gray-500 py-16">"Nothing in this category yet."</p>
            </Show>

            <CtaSection heading=config.cta.heading body=config.cta.body />

            {previewable.then(|| view! { <Lightbox /> })}
        </main>
    }
}
