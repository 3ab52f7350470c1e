//! Embedded fallback icon catalog.
//!
//! A small, read-only set of common icons served when the icon upstream
//! fails, or when its first page comes back empty. Fallback output always
//! replaces the whole page; it is never mixed with upstream results.

use crate::types::{IconItem, PageWindow};

/// One entry of the embedded catalog.
#[derive(Debug, Clone, Copy)]
pub struct FallbackIcon {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
}

const SOURCE: &str = "Material Design Icons";
const LICENSE: &str = "Apache 2.0";
const AUTHOR: &str = "Material Design";

/// The embedded catalog, in display order.
pub const FALLBACK_ICONS: &[FallbackIcon] = &[
    FallbackIcon { id: "mdi:magnify", name: "search", category: "Action" },
    FallbackIcon { id: "mdi:home", name: "home", category: "Action" },
    FallbackIcon { id: "mdi:account", name: "user", category: "User" },
    FallbackIcon { id: "mdi:heart", name: "heart", category: "Social" },
    FallbackIcon { id: "mdi:star", name: "star", category: "Rating" },
    FallbackIcon { id: "mdi:download", name: "download", category: "File" },
    FallbackIcon { id: "mdi:cog", name: "settings", category: "Action" },
    FallbackIcon { id: "mdi:email", name: "email", category: "Communication" },
    FallbackIcon { id: "mdi:file", name: "file", category: "File" },
    FallbackIcon { id: "mdi:folder", name: "folder", category: "File" },
    FallbackIcon { id: "mdi:image", name: "image", category: "Media" },
    FallbackIcon { id: "mdi:plus", name: "plus", category: "Action" },
    FallbackIcon { id: "mdi:minus", name: "minus", category: "Action" },
    FallbackIcon { id: "mdi:check", name: "check", category: "Action" },
    FallbackIcon { id: "mdi:close", name: "close", category: "Action" },
];

impl FallbackIcon {
    /// Case-insensitive substring match on name, category or author.
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || AUTHOR.to_lowercase().contains(needle)
    }

    fn to_item(self, asset_base: &str) -> IconItem {
        let url = format!("{}/{}.svg", asset_base.trim_end_matches('/'), self.id);
        IconItem {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            url: url.clone(),
            source: SOURCE.to_owned(),
            category: self.category.to_owned(),
            license: LICENSE.to_owned(),
            author: AUTHOR.to_owned(),
            download_url: url,
        }
    }
}

/// A fallback page: the requested window plus the filtered count.
#[derive(Debug, Clone)]
pub struct FallbackPage {
    pub items: Vec<IconItem>,
    /// Number of catalog entries matching the term.
    pub total: usize,
}

/// Filter the embedded catalog by `term` and cut out `window`.
///
/// For a first page this is the filtered list truncated to `limit`.
pub fn fallback_page(term: &str, window: PageWindow, asset_base: &str) -> FallbackPage {
    let needle = term.trim().to_lowercase();
    let matched: Vec<&FallbackIcon> = FALLBACK_ICONS.iter().filter(|i| i.matches(&needle)).collect();
    let total = matched.len();
    let items = matched
        .into_iter()
        .skip(window.offset)
        .take(window.limit)
        .map(|icon| icon.to_item(asset_base))
        .collect();

    FallbackPage { items, total }
}
