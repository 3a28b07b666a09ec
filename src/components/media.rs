//! Media Components
//!
//! Images and videos with a placeholder when the asset fails to load.

use leptos::prelude::*;

use crate::models::Media;

/// Shown in place of an asset that failed to load
#[component]
fn MissingAsset(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("{} missing-asset flex items-center justify-center bg-gray-900 text-gray-500 text-sm", class)>
            "Preview unavailable"
        </div>
    }
}

/// Still image with missing-asset fallback
#[component]
pub fn MediaImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] class: String,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let fallback_class = class.clone();
    let failed_src = src.clone();

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || view! { <MissingAsset class=fallback_class.clone() /> }
        >
            <img
                src=src.clone()
                alt=alt.clone()
                class=class.clone()
                loading="lazy"
                on:error={
                    let failed_src = failed_src.clone();
                    move |_| {
                        log::warn!("image failed to load: {}", failed_src);
                        set_failed.set(true);
                    }
                }
            />
        </Show>
    }
}

/// Card thumbnail: the image itself, or a video's poster frame
#[component]
pub fn MediaThumbnail(
    media: Media,
    #[prop(into)] alt: String,
    #[prop(into)] class: String,
) -> impl IntoView {
    view! { <MediaImage src=media.thumbnail().to_string() alt=alt class=class /> }
}

/// Full-size media for the lightbox; videos get controls and autoplay
#[component]
pub fn MediaFull(
    media: Media,
    #[prop(into)] alt: String,
    #[prop(into)] class: String,
) -> impl IntoView {
    match media {
        Media::Image { src } => view! { <MediaImage src=src alt=alt class=class /> }.into_any(),
        Media::Video { src, poster } => {
            let (failed, set_failed) = signal(false);
            let fallback_class = class.clone();
            view! {
                <Show
                    when=move || !failed.get()
                    fallback=move || view! { <MissingAsset class=fallback_class.clone() /> }
                >
                    <video
                        src=src.clone()
                        poster=poster.clone()
                        class=class.clone()
                        controls=true
                        autoplay=true
                        playsinline=true
                        on:error={
                            let src = src.clone();
                            move |_| {
                                log::warn!("video failed to load: {}", src);
                                set_failed.set(true);
                            }
                        }
                    />
                </Show>
            }
            .into_any()
        }
    }
}
