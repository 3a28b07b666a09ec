//! Premium Button Component
//!
//! Call-to-action link with a glow that follows the pointer.

use leptos::prelude::*;

use crate::effects::pointer_in_current_target;
use crate::pointer::{Glow, PointerPosition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-gradient-to-r from-amber-400 via-yellow-500 to-amber-400 text-gray-950 shadow-2xl shadow-amber-500/30 hover:shadow-amber-500/50",
            ButtonVariant::Secondary => "border-2 border-amber-500/50 text-amber-400 hover:border-amber-400",
        }
    }

    fn glow(self) -> Glow {
        match self {
            ButtonVariant::Primary => Glow::BUTTON_PRIMARY,
            ButtonVariant::Secondary => Glow::BUTTON_SECONDARY,
        }
    }
}

#[component]
pub fn PremiumButton(
    #[prop(into)] href: String,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let (pointer, set_pointer) = signal(PointerPosition::default());
    let glow = variant.glow();

    view! {
        <a
            href=href
            class=format!(
                "group relative overflow-hidden px-8 py-4 rounded-xl font-semibold transition-all duration-500 {} {}",
                variant.class(),
                class,
            )
            on:mousemove=move |ev| {
                if let Some(position) = pointer_in_current_target(&ev) {
                    set_pointer.set(position);
                }
            }
        >
            <span class="relative z-10 flex items-center gap-2">{children()}</span>
            <div
                class="absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none"
                style=move || glow.style(pointer.get())
            />
        </a>
    }
}
