use leptos::prelude::*;
use leptos_router::components::A;

use crate::animation::Stagger;
use crate::components::Reveal;
use crate::nav;

/// Closing call-to-action card linking back home
#[component]
pub fn CtaSection(heading: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <section class="relative max-w-4xl mx-auto mt-20 md:mt-32 text-center">
            <Reveal
                index=0
                stagger=Stagger::FEATURED
                class="relative bg-gradient-to-br from-gray-900/60 via-gray-950/60 to-gray-900/60 backdrop-blur-xl rounded-2xl md:rounded-3xl p-8 md:p-12 lg:p-16 border border-amber-500/20 shadow-2xl shadow-amber-500/10 overflow-hidden"
            >
                <div class="absolute inset-0 bg-gradient-to-br from-amber-500/5 via-transparent to-yellow-500/5" />
                <div class="absolute -top-24 -right-24 w-64 h-64 bg-amber-500/20 rounded-full blur-[100px]" />
                <div class="absolute -bottom-24 -left-24 w-64 h-64 bg-yellow-500/20 rounded-full blur-[100px]" />

                <div class="relative z-10">
                    <h2 class="text-2xl sm:text-3xl md:text-4xl font-bold bg-gradient-to-r from-amber-300 via-yellow-400 to-amber-300 bg-clip-text text-transparent mb-4 md:mb-6">
                        {heading}
                    </h2>
                    <p class="text-gray-300 text-sm md:text-base lg:text-lg mb-8 md:mb-10 max-w-xl mx-auto leading-relaxed">
                        {body}
                    </p>
                    <A
                        href=nav::HOME
                        attr:class="group relative inline-flex items-center gap-2 px-8 md:px-10 py-3 md:py-4 bg-gradient-to-r from-amber-500 to-yellow-500 text-gray-950 font-semibold rounded-lg md:rounded-xl overflow-hidden transition-all duration-500 shadow-lg shadow-amber-500/30 hover:shadow-amber-500/50 text-sm md:text-base"
                    >
                        <span class="relative z-10">"Back to Home"</span>
                        <span class="relative z-10 animate-nudge">"→"</span>
                    </A>
                </div>
            </Reveal>
        </section>
    }
}
