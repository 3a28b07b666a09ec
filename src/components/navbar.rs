//! Navbar Component
//!
//! Fixed header with the scroll progress bar, desktop links and the mobile
//! menu overlay. The menu closes on link selection, Escape and any route
//! change, and holds the shared scroll lock while open.

use leptos::html;
use leptos::prelude::*;
use leptos_overlay::{bind_escape, bind_overlay};
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::animation::Stagger;
use crate::context::use_app_context;
use crate::effects::{use_window_pointer, use_window_scroll};
use crate::nav::{self, NAV_LINKS};
use crate::pointer::{Glow, PointerPosition};

const TAGLINE: &str = "Luxury Digital Experiences";

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let pathname = use_location().pathname;
    let scroll = use_window_scroll();
    let pointer = use_window_pointer();
    let header_ref = NodeRef::<html::Header>::new();

    let menu_open = ctx.menu_open();

    bind_overlay(ctx.scroll_lock, menu_open);
    bind_escape(move || ctx.close_menu());

    Effect::new(move |previous: Option<String>| {
        let path = pathname.get();
        if previous.is_some_and(|p| p != path) {
            log::info!("route: {} (link {:?})", path, nav::active_index(&path));
            ctx.close_menu();
        }
        path
    });

    // Hidden until the header turns opaque
    let header_glow = move || {
        if !scroll.get().is_scrolled() {
            return String::from("opacity: 0;");
        }
        let at = pointer.get();
        let local = header_ref
            .get()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                PointerPosition::relative_to(at.x, at.y, rect.left(), rect.top())
            })
            .unwrap_or_default();
        Glow::HEADER.style(local)
    };

    let is_active = move |href: &'static str| pathname.with(|path| nav::is_active(path, href));

    view! {
        // Scroll progress
        <div class="fixed top-0 left-0 right-0 h-[2px] z-[60] bg-transparent">
            <div
                class="h-full bg-gradient-to-r from-amber-500 via-yellow-400 to-amber-500 origin-left"
                style=move || format!("transform: scaleX({:.4});", scroll.get().progress)
            />
        </div>

        <header
            node_ref=header_ref
            class=move || if scroll.get().is_scrolled() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-gray-950/80 backdrop-blur-xl border-b border-amber-500/10 shadow-lg shadow-black/40 py-3"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-transparent py-5"
            }
        >
            <div class="absolute inset-0 pointer-events-none transition-opacity duration-500" style=header_glow />

            <nav class="relative max-w-7xl mx-auto px-6 flex items-center justify-between">
                <A href=nav::HOME attr:class="group flex flex-col">
                    <span class="text-2xl font-bold bg-gradient-to-r from-amber-300 via-yellow-400 to-amber-300 bg-clip-text text-transparent animate-gradient">
                        "HighTechMG"
                    </span>
                    <span class="text-[10px] uppercase tracking-[0.3em] text-gray-500 group-hover:text-amber-400/70 transition-colors duration-300">
                        {TAGLINE}
                    </span>
                </A>

                // Desktop links
                <ul class="hidden md:flex items-center gap-8">
                    {NAV_LINKS.iter().map(|link| {
                        let href = link.href;
                        view! {
                            <li>
                                <A
                                    href=href
                                    attr:class=move || if is_active(href) {
                                        "relative text-amber-400 font-medium transition-colors duration-300"
                                    } else {
                                        "relative text-gray-300 hover:text-amber-400 font-medium transition-colors duration-300"
                                    }
                                >
                                    {link.name}
                                    <span
                                        class="absolute -bottom-1 left-0 h-[2px] w-full bg-gradient-to-r from-amber-400 to-yellow-500 origin-left transition-transform duration-300"
                                        style=move || if is_active(href) { "transform: scaleX(1);" } else { "transform: scaleX(0);" }
                                    />
                                </A>
                            </li>
                        }
                    }).collect_view()}
                </ul>

                <button
                    class="md:hidden relative z-50 w-10 h-10 flex flex-col items-center justify-center gap-1.5"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| ctx.toggle_menu()
                >
                    <span
                        class="block w-6 h-[2px] bg-amber-400 transition-transform duration-300"
                        style=move || if menu_open.get() { "transform: translateY(8px) rotate(45deg);" } else { "" }
                    />
                    <span
                        class="block w-6 h-[2px] bg-amber-400 transition-opacity duration-300"
                        style=move || if menu_open.get() { "opacity: 0;" } else { "opacity: 1;" }
                    />
                    <span
                        class="block w-6 h-[2px] bg-amber-400 transition-transform duration-300"
                        style=move || if menu_open.get() { "transform: translateY(-8px) rotate(-45deg);" } else { "" }
                    />
                </button>
            </nav>
        </header>

        // Mobile menu
        <Show when=move || menu_open.get()>
            <div class="md:hidden fixed inset-0 z-40 bg-gray-950/95 backdrop-blur-2xl flex flex-col items-center justify-center gap-8">
                {NAV_LINKS.iter().enumerate().map(|(index, link)| {
                    let href = link.href;
                    view! {
                        <A
                            href=href
                            attr:class=move || if is_active(href) {
                                "menu-item text-3xl font-bold text-amber-400"
                            } else {
                                "menu-item text-3xl font-bold text-gray-300 hover:text-amber-400 transition-colors duration-300"
                            }
                            attr:style=Stagger::MENU.animation_style(index)
                            on:click=move |_| ctx.close_menu()
                        >
                            {link.name}
                        </A>
                    }
                }).collect_view()}
                <p
                    class="menu-item mt-8 text-xs uppercase tracking-[0.3em] text-gray-500"
                    style=Stagger::MENU.animation_style(NAV_LINKS.len())
                >
                    {TAGLINE}
                </p>
            </div>
        </Show>
    }
}
