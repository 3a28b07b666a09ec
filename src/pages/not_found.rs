use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::nav;

/// Fallback for unknown paths
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found | HighTechMG" />
        <main class="relative min-h-screen bg-gray-950 text-white flex flex-col items-center justify-center px-6 text-center">
            <h1 class="text-6xl font-bold bg-gradient-to-r from-amber-300 via-yellow-400 to-amber-300 bg-clip-text text-transparent mb-6">
                "404"
            </h1>
            <p class="text-gray-400 text-lg mb-10">"This page doesn’t exist."</p>
            <A
                href=nav::HOME
                attr:class="px-8 py-3 rounded-xl bg-gradient-to-r from-amber-500 to-yellow-500 text-gray-950 font-semibold shadow-lg shadow-amber-500/30"
            >
                "Back to Home"
            </A>
        </main>
    }
}
