// src/specs/genshin.rs
//! Genshin Impact: Wish page.
//!
//! The featured 5-star row is headed "5-star Rate Up"; its first `<td>`
//! holds character icons whose alt text reads "Genshin - Name". The first
//! such row per table is a region, and the engine stops at the first region
//! that yields a valid name.

use scraper::Html;

use super::{BannerLocator, Miss, Region};
use crate::config::Game;
use crate::config::consts::GENSHIN_ROW_HEADER;
use crate::core::{extract, html};

pub struct GenshinLocator;

impl BannerLocator for GenshinLocator {
    fn game(&self) -> Game {
        Game::Genshin
    }

    fn locate(&self, doc: &Html) -> Result<Vec<Region>, Miss> {
        let regions: Vec<Region> = html::tables(doc)
            .filter_map(|table| html::row_with_header(table, GENSHIN_ROW_HEADER))
            .map(|row| {
                Region::from(
                    html::first_data_cell(row)
                        .map(extract::image_alts)
                        .unwrap_or_default(),
                )
            })
            .collect();

        if regions.is_empty() {
            return Err(Miss(GENSHIN_ROW_HEADER));
        }
        Ok(regions)
    }

    fn stop_after_first_hit(&self) -> bool {
        true
    }
}
