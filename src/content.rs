//! Content Registries
//!
//! Hand-authored JSON under `content/`, embedded at compile time and parsed
//! once on first use. Nothing mutates a registry after it is loaded.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;

use crate::error::{Result, SiteError};
use crate::models::{GalleryItem, ServiceCard};

/// Which embedded list to read
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Registry {
    Websites,
    Featured,
    Logos,
    Posters,
    Reels,
}

impl Registry {
    pub const ALL: [Registry; 5] = [
        Registry::Websites,
        Registry::Featured,
        Registry::Logos,
        Registry::Posters,
        Registry::Reels,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Registry::Websites => "websites",
            Registry::Featured => "featured",
            Registry::Logos => "logos",
            Registry::Posters => "posters",
            Registry::Reels => "reels",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Registry::Websites => include_str!("../content/websites.json"),
            Registry::Featured => include_str!("../content/featured.json"),
            Registry::Logos => include_str!("../content/logos.json"),
            Registry::Posters => include_str!("../content/posters.json"),
            Registry::Reels => include_str!("../content/reels.json"),
        }
    }

    fn cell(self) -> &'static OnceLock<Vec<GalleryItem>> {
        static WEBSITES: OnceLock<Vec<GalleryItem>> = OnceLock::new();
        static FEATURED: OnceLock<Vec<GalleryItem>> = OnceLock::new();
        static LOGOS: OnceLock<Vec<GalleryItem>> = OnceLock::new();
        static POSTERS: OnceLock<Vec<GalleryItem>> = OnceLock::new();
        static REELS: OnceLock<Vec<GalleryItem>> = OnceLock::new();
        match self {
            Registry::Websites => &WEBSITES,
            Registry::Featured => &FEATURED,
            Registry::Logos => &LOGOS,
            Registry::Posters => &POSTERS,
            Registry::Reels => &REELS,
        }
    }
}

static SERVICES: OnceLock<Vec<ServiceCard>> = OnceLock::new();

/// Items of a registry in display order.
///
/// A malformed registry is logged and treated as empty so the page still
/// renders.
pub fn items(registry: Registry) -> &'static [GalleryItem] {
    registry.cell().get_or_init(|| {
        load_or_empty(registry.name(), registry.source(), |items: &Vec<GalleryItem>| {
            for id in duplicate_ids(items) {
                log::warn!("registry `{}` repeats id {}", registry.name(), id);
            }
        })
    })
}

/// Work category cards for the home page
pub fn services() -> &'static [ServiceCard] {
    SERVICES.get_or_init(|| {
        load_or_empty("services", include_str!("../content/services.json"), |_| {})
    })
}

pub fn parse<T: DeserializeOwned>(registry: &'static str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|source| SiteError::Content { registry, source })
}

fn load_or_empty<T: DeserializeOwned>(
    registry: &'static str,
    json: &str,
    check: impl FnOnce(&Vec<T>),
) -> Vec<T> {
    match parse::<T>(registry, json) {
        Ok(items) => {
            log::debug!("loaded {} entries from `{}`", items.len(), registry);
            check(&items);
            items
        }
        Err(err) => {
            log::error!("{}", err);
            Vec::new()
        }
    }
}

/// Ids that occur more than once, each reported once, in first-repeat order
pub fn duplicate_ids(items: &[GalleryItem]) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    items
        .iter()
        .filter(|item| !seen.insert(item.id) && reported.insert(item.id))
        .map(|item| item.id)
        .collect()
}
