// src/specs/starrail.rs
//! Honkai: Star Rail: Warp page.
//!
//! A heading containing "Warp Banner Dates" is followed by a table listing
//! past, current and upcoming banners. Rows whose first column carries
//! "(Current)" are the live ones; their second column links the featured
//! characters.

use scraper::Html;

use super::{BannerLocator, Miss, Region};
use crate::config::Game;
use crate::config::consts::{STARRAIL_CURRENT_MARKER, STARRAIL_HEADING};
use crate::core::{extract, html};

pub struct StarRailLocator;

impl BannerLocator for StarRailLocator {
    fn game(&self) -> Game {
        Game::StarRail
    }

    fn locate(&self, doc: &Html) -> Result<Vec<Region>, Miss> {
        let table = html::heading_containing(doc, STARRAIL_HEADING)
            .and_then(html::next_sibling_table)
            .ok_or(Miss(STARRAIL_HEADING))?;

        let regions: Vec<Region> = html::rows(table)
            .filter(|row| {
                html::nth_cell(*row, 0)
                    .is_some_and(|c| html::text_of(c).contains(STARRAIL_CURRENT_MARKER))
            })
            .map(|row| {
                Region::from(
                    html::nth_cell(row, 1)
                        .map(|c| extract::link_texts(c, None))
                        .unwrap_or_default(),
                )
            })
            .collect();

        // heading and table present, but nothing is live right now
        if regions.is_empty() {
            return Err(Miss(STARRAIL_CURRENT_MARKER));
        }
        Ok(regions)
    }
}
