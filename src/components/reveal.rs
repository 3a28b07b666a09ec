//! Reveal Wrapper
//!
//! Fades and lifts its children in the first time they scroll into view,
//! delayed by the sibling index.

use leptos::html;
use leptos::prelude::*;

use crate::animation::{reveal_class, Stagger};
use crate::effects::use_in_view;

#[component]
pub fn Reveal(
    index: usize,
    stagger: Stagger,
    /// Negative margins reveal a little after the element enters
    #[prop(default = "0px")]
    root_margin: &'static str,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node, root_margin);

    view! {
        <div
            node_ref=node
            class=move || reveal_class(&class, in_view.get())
            style=stagger.style(index)
        >
            {children()}
        </div>
    }
}
