//! Ambient Effects
//!
//! DOM-bound hooks behind the decorative layer: pointer tracking, scroll
//! metrics and one-shot viewport reveals. Every listener or observer is
//! registered by the calling component and removed in its `on_cleanup`.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::animation::InView;
use crate::error::{Result, SiteError};
use crate::pointer::PointerPosition;
use crate::scroll;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Pointer position relative to `el`'s bounding box
pub fn pointer_in(el: &web_sys::Element, ev: &web_sys::MouseEvent) -> PointerPosition {
    let rect = el.get_bounding_client_rect();
    PointerPosition::relative_to(f64::from(ev.client_x()), f64::from(ev.client_y()), rect.left(), rect.top())
}

/// Pointer position in viewport coordinates, tracked while mounted
pub fn use_window_pointer() -> ReadSignal<PointerPosition> {
    let (position, set_position) = signal(PointerPosition::default());
    let handle = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        // Overwrite, never queue
        set_position.set(PointerPosition {
            x: f64::from(ev.client_x()),
            y: f64::from(ev.client_y()),
        });
    });
    on_cleanup(move || handle.remove());
    position
}

/// Window scroll state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub y: f64,
    /// Scrolled fraction of the document, `[0, 1]`
    pub progress: f64,
}

impl ScrollSnapshot {
    pub fn is_scrolled(&self) -> bool {
        scroll::is_scrolled(self.y)
    }
}

fn read_scroll() -> Result<ScrollSnapshot> {
    let window = web_sys::window().ok_or(SiteError::Dom("window"))?;
    let y = window.scroll_y()?;
    let viewport = window.inner_height()?.as_f64().unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or(SiteError::Dom("document element"))?
        .scroll_height();
    Ok(ScrollSnapshot {
        y,
        progress: scroll::progress(y, f64::from(document_height), viewport),
    })
}

/// Window scroll offset and progress, tracked while mounted
pub fn use_window_scroll() -> ReadSignal<ScrollSnapshot> {
    let (snapshot, set_snapshot) = signal(read_scroll().unwrap_or_default());
    let handle = window_event_listener(ev::scroll, move |_| match read_scroll() {
        Ok(current) => set_snapshot.set(current),
        Err(err) => log::debug!("scroll metrics unavailable: {}", err),
    });
    on_cleanup(move || handle.remove());
    snapshot
}

/// Flips to true the first time `target` intersects the viewport (shrunk by
/// `root_margin`) and stays true. Browsers without IntersectionObserver
/// reveal immediately.
pub fn use_in_view(target: NodeRef<html::Div>, root_margin: &'static str) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);
    let slot = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    Effect::new(move |_| {
        let Some(el) = target.get() else { return };
        if slot.with_value(|s| s.is_some()) {
            return;
        }
        match observe_once(&el, root_margin, set_in_view) {
            Ok(pair) => slot.set_value(Some(pair)),
            Err(err) => {
                log::warn!("reveal observer unavailable: {}", err);
                set_in_view.set(true);
            }
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|s| {
            if let Some((observer, _callback)) = s.take() {
                observer.disconnect();
            }
        });
    });

    in_view
}

fn observe_once(
    el: &web_sys::Element,
    root_margin: &str,
    set_in_view: WriteSignal<bool>,
) -> Result<(IntersectionObserver, ObserverCallback)> {
    let mut seen = InView::default();
    let callback = ObserverCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        if seen.observe(intersecting) {
            set_in_view.set(true);
            observer.disconnect();
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(el);
    Ok((observer, callback))
}

/// Pointer position relative to the element the handler is attached to
pub fn pointer_in_current_target(ev: &web_sys::MouseEvent) -> Option<PointerPosition> {
    let target = ev.current_target()?;
    let el = target.dyn_ref::<web_sys::Element>()?;
    Some(pointer_in(el, ev))
}
