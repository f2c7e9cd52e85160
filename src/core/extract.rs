// src/core/extract.rs
//
// Raw candidate pulling from a located cell. No filtering happens here.

use scraper::ElementRef;

use super::html::{self, IMAGE, LINK};

/// Trimmed text of every link in `region`, in document order.
///
/// With `parent_marker`, a link only counts when its parent element's text
/// contains the marker (e.g. "(S-Rank)" next to the agent link).
pub fn link_texts(region: ElementRef<'_>, parent_marker: Option<&str>) -> Vec<String> {
    region
        .select(&LINK)
        .filter(|a| parent_marker.is_none_or(|m| html::parent_text(*a).contains(m)))
        .map(html::text_of)
        .collect()
}

/// `alt` of every image in `region`; images without one are skipped.
pub fn image_alts(region: ElementRef<'_>) -> Vec<String> {
    region
        .select(&IMAGE)
        .filter_map(|img| img.value().attr("alt"))
        .map(|alt| s!(alt.trim()))
        .collect()
}
