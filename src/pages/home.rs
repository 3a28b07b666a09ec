//! Home Page
//!
//! Hero, featured projects, work categories and the closing call to action.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use reactive_stores::Store;

use crate::animation::Stagger;
use crate::components::{ButtonVariant, CardLayout, GalleryCard, PremiumButton, Reveal};
use crate::content::{self, Registry};
use crate::effects::{pointer_in_current_target, use_window_scroll};
use crate::models::ServiceCard;
use crate::nav;
use crate::pages::PageGlow;
use crate::pointer::{Glow, PointerPosition};
use crate::scroll::hero_fade;
use crate::store::GalleryState;

#[component]
pub fn HomePage() -> impl IntoView {
    // Featured cards read the gallery store even though they never preview
    provide_context(Store::new(GalleryState::default()));

    let scroll = use_window_scroll();
    let hero_style = move || {
        let (opacity, scale) = hero_fade(scroll.get().progress);
        format!("opacity: {:.3}; transform: scale({:.3});", opacity, scale)
    };

    view! {
        <Title text="HighTechMG | Luxury Digital Experiences" />
        <main class="relative bg-gray-950 text-white overflow-hidden">
            <PageGlow />

            // Hero
            <section class="relative min-h-screen flex flex-col items-center justify-center text-center px-6">
                <div class="absolute top-1/3 left-1/2 -translate-x-1/2 w-[600px] h-[600px] bg-amber-500/10 rounded-full blur-[150px] animate-pulse-slow pointer-events-none" />
                <div class="relative z-10 max-w-5xl" style=hero_style>
                    <h1 class="text-5xl md:text-7xl font-bold leading-tight mb-8">
                        <span class="block text-white">"We Build High-Converting"</span>
                        <span class="block bg-gradient-to-r from-amber-300 via-yellow-400 to-amber-300 bg-clip-text text-transparent animate-gradient">
                            "Digital Experiences"
                        </span>
                    </h1>
                    <p class="text-gray-400 text-lg md:text-xl max-w-2xl mx-auto mb-12 leading-relaxed">
                        "Showcasing premium websites, creative branding, impactful posters, and AI-powered video reels crafted with precision."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center">
                        <PremiumButton href=nav::WEBSITES>"View Projects"</PremiumButton>
                        <PremiumButton href="#featured" variant=ButtonVariant::Secondary>"Explore Featured"</PremiumButton>
                    </div>
                </div>
            </section>

            <FeaturedProjects />
            <WorkCategories />
            <ClosingCta />
        </main>
    }
}

#[component]
fn FeaturedProjects() -> impl IntoView {
    let projects = content::items(Registry::Featured);

    view! {
        <section id="featured" class="relative py-32 px-6">
            <div class="relative max-w-7xl mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-amber-300 via-yellow-400 to-amber-300 bg-clip-text text-transparent mb-6">
                        "Featured Projects"
                    </h2>
                    <p class="text-gray-400 text-lg max-w-2xl mx-auto">
                        "A curated selection of high-performing digital products crafted with precision, performance, and premium design standards."
                    </p>
                    <div class="mt-8 mx-auto w-24 h-[2px] bg-gradient-to-r from-transparent via-amber-400 to-transparent" />
                </div>

                <div class=CardLayout::Project.grid_class()>
                    {projects.iter().enumerate().map(|(index, project)| view! {
                        <Reveal index=index stagger=Stagger::FEATURED root_margin="-100px">
                            <GalleryCard item=project.clone() layout=CardLayout::Project previewable=false />
                        </Reveal>
                    }).collect_view()}
                </div>

                <div class="mt-20 text-center">
                    <A
                        href=nav::WEBSITES
                        attr:class="group relative inline-flex items-center px-10 py-4 rounded-xl border border-amber-500/40 text-amber-400 font-semibold overflow-hidden transition-all duration-500 hover:border-amber-400 hover:shadow-lg hover:shadow-amber-500/20"
                    >
                        <span class="absolute inset-0 bg-gradient-to-r from-amber-500/0 via-amber-500/10 to-amber-500/0 -translate-x-full group-hover:translate-x-full transition-transform duration-1000" />
                        <span class="relative z-10">"View All Websites →"</span>
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn WorkCategories() -> impl IntoView {
    view! {
        <section class="relative py-32 px-6">
            <div class="relative max-w-7xl mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-amber-300 via-yellow-400 to-amber-300 bg-clip-text text-transparent mb-6">
                        "Explore My Work Categories"
                    </h2>
                    <p class="text-gray-400 text-lg max-w-2xl mx-auto">
                        "From web development to creative branding and AI content, explore all my work categories."
                    </p>
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {content::services().iter().enumerate().map(|(index, card)| view! {
                        <Reveal index=index stagger=Stagger::SERVICES root_margin="-50px">
                            <CategoryCard card=card />
                        </Reveal>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Service card with a pointer-following glow
#[component]
fn CategoryCard(card: &'static ServiceCard) -> impl IntoView {
    let (pointer, set_pointer) = signal(PointerPosition::default());

    view! {
        <A
            href=card.href.as_str()
            attr:class="group relative block h-full p-8 rounded-2xl bg-gradient-to-b from-gray-900/60 to-gray-950/60 border border-gray-800/50 hover:border-amber-500/50 overflow-hidden transition-all duration-500 hover:-translate-y-2"
            on:mousemove=move |ev| {
                if let Some(position) = pointer_in_current_target(&ev) {
                    set_pointer.set(position);
                }
            }
        >
            <div
                class="absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none"
                style=move || Glow::CARD.style(pointer.get())
            />
            <div class="relative z-10">
                <div class="text-4xl mb-6">{card.icon.as_str()}</div>
                <h3 class="text-xl font-bold text-amber-400 mb-3">{card.title.as_str()}</h3>
                <p class="text-gray-400 text-sm leading-relaxed">{card.description.as_str()}</p>
            </div>
        </A>
    }
}

#[component]
fn ClosingCta() -> impl IntoView {
    view! {
        <section class="relative py-32 px-6">
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-amber-500/5 to-transparent pointer-events-none" />
            <Reveal
                index=0
                stagger=Stagger::FEATURED
                class="relative max-w-4xl mx-auto text-center rounded-3xl p-12 md:p-16 bg-gradient-to-br from-gray-900/60 via-gray-950/60 to-gray-900/60 border border-amber-500/20 shadow-2xl shadow-amber-500/10"
            >
                <h2 class="text-3xl md:text-5xl font-bold bg-gradient-to-r from-amber-300 via-yellow-400 to-amber-300 bg-clip-text text-transparent mb-6">
                    "Let’s Build Something Powerful"
                </h2>
                <p class="text-gray-300 text-lg max-w-2xl mx-auto mb-10 leading-relaxed">
                    "Whether you need a modern website, premium branding assets, or AI-driven marketing content, we craft high-performance digital experiences that actually convert."
                </p>
                <PremiumButton href=nav::WEBSITES>"View My Work"</PremiumButton>
            </Reveal>
        </section>
    }
}
