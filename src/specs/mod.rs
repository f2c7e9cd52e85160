//! # Banner locator "specs"
//!
//! One module per wiki page. Each spec encodes *where the current banner
//! lives in that page's HTML* and which extraction technique reads it, and
//! nothing else.
//!
//! ## What lives here
//! - **Region selection**: which table, which row, which cell, and when to
//!   stop scanning. These halt rules decide which of several look-alike
//!   tables wins, so they are part of the output contract.
//! - **Raw extraction**: link text or image alt text via `core::extract`.
//!
//! ## What does **not** live here
//! - **Normalization / filtering / dedup**: shared by all games in
//!   `core::sanitize` and `roster`, driven by `engine`.
//! - **Networking**: specs only ever see a parsed document.
//!
//! ## Typical call chain
//! ```text
//! engine::RosterService::current_roster(id)
//!     → PageSource::fetch(url)
//!     → specs::locator_for(game).locate(&doc)   // regions of raw candidates, or Miss(marker)
//!     → NameFilter::apply → Roster::push
//! ```
//!
//! ## Current specs
//! - `zzz`: "Rate-Up Agents" rows, S-Rank links, first two qualifying tables.
//! - `genshin`: "5-star Rate Up" row, image alt text, first table that yields a name.
//! - `starrail`: "(Current)" rows of the table after the banner-dates heading.

use scraper::Html;

use crate::config::Game;

pub mod genshin;
pub mod starrail;
pub mod zzz;

/// Raw, unfiltered name candidates from one located cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    pub candidates: Vec<String>,
}

impl From<Vec<String>> for Region {
    fn from(candidates: Vec<String>) -> Self {
        Self { candidates }
    }
}

/// The marker a locator was looking for when it came up empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Miss(pub &'static str);

pub trait BannerLocator: Sync {
    fn game(&self) -> Game;

    /// Matching regions in document order, never empty on `Ok`.
    fn locate(&self, doc: &Html) -> Result<Vec<Region>, Miss>;

    /// Stop consuming regions once one of them has contributed a valid name.
    fn stop_after_first_hit(&self) -> bool {
        false
    }
}

pub fn locator_for(game: Game) -> &'static dyn BannerLocator {
    match game {
        Game::Genshin => &genshin::GenshinLocator,
        Game::StarRail => &starrail::StarRailLocator,
        Game::Zzz => &zzz::ZzzLocator,
    }
}
