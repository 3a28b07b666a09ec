//! Site Models
//!
//! Content records loaded from the embedded registries.

use serde::{Deserialize, Serialize};

/// Media shown on a card and in the preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Media {
    Image { src: String },
    /// `poster` is the thumbnail shown on the card before playback
    Video { src: String, poster: String },
}

impl Media {
    /// Path shown on the card
    pub fn thumbnail(&self) -> &str {
        match self {
            Media::Image { src } => src,
            Media::Video { poster, .. } => poster,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Media::Video { .. })
    }
}

/// Gallery item (project, logo, poster or reel)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub media: Media,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Reels only, e.g. "0:30"
    #[serde(default)]
    pub duration: Option<String>,
    /// Websites only: the "View Live" target
    #[serde(default)]
    pub live_url: Option<String>,
}

/// Work category card on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    pub href: String,
    pub description: String,
    pub icon: String,
}

/// Header link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}
