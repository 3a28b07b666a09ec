//! UI Components
//!
//! Reusable Leptos components.

mod category_filter;
mod cta_section;
mod gallery_card;
mod lightbox;
pub mod media;
mod navbar;
mod premium_button;
mod reveal;

pub use category_filter::CategoryFilter;
pub use cta_section::CtaSection;
pub use gallery_card::{CardLayout, GalleryCard};
pub use lightbox::Lightbox;
pub use navbar::Navbar;
pub use premium_button::{ButtonVariant, PremiumButton};
pub use reveal::Reveal;
