// src/specs/zzz.rs
//! Zenless Zone Zero: Signal Search page.
//!
//! Each banner is its own table with a row headed "Rate-Up Agents"; the
//! row's first `<td>` links every featured agent followed by a rank
//! annotation. Only S-Rank links count. The page lists the current channel
//! banners first, so only the first two qualifying tables are read.

use scraper::Html;

use super::{BannerLocator, Miss, Region};
use crate::config::Game;
use crate::config::consts::{ZZZ_MAX_TABLES, ZZZ_RANK_MARKER, ZZZ_ROW_HEADER};
use crate::core::{extract, html};

pub struct ZzzLocator;

impl BannerLocator for ZzzLocator {
    fn game(&self) -> Game {
        Game::Zzz
    }

    fn locate(&self, doc: &Html) -> Result<Vec<Region>, Miss> {
        let mut regions = Vec::new();

        for table in html::tables(doc) {
            let Some(row) = html::row_with_header(table, ZZZ_ROW_HEADER) else {
                continue;
            };
            let candidates = html::first_data_cell(row)
                .map(|td| extract::link_texts(td, Some(ZZZ_RANK_MARKER)))
                .unwrap_or_default();
            regions.push(Region::from(candidates));

            if regions.len() >= ZZZ_MAX_TABLES {
                break;
            }
        }

        if regions.is_empty() {
            return Err(Miss(ZZZ_ROW_HEADER));
        }
        Ok(regions)
    }
}
