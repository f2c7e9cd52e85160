// src/engine/pipeline.rs
use log::debug;

use crate::config::RosterSource;
use crate::core::{NameFilter, html};
use crate::error::{Result, RosterError};
use crate::roster::Roster;
use crate::specs::{self, Miss};

/// Locate → extract → normalize/filter → dedup over one page body.
pub fn extract(page: &str, source: &'static RosterSource) -> Result<Roster> {
    let game = source.game;
    let doc = html::parse(page);
    let locator = specs::locator_for(game);

    let regions = locator
        .locate(&doc)
        .map_err(|Miss(marker)| RosterError::LocatorMiss { game, marker })?;
    debug!("{game}: {} region(s) located", regions.len());

    let filter = NameFilter::for_source(source);
    let mut roster = Roster::new();

    for region in regions {
        let mut hit = false;
        for raw in &region.candidates {
            match filter.apply(raw) {
                Some(name) => {
                    hit = true;
                    roster.push(name);
                }
                None => debug!("{game}: rejected {raw:?}"),
            }
        }
        if hit && locator.stop_after_first_hit() {
            break;
        }
    }

    if roster.is_empty() {
        return Err(RosterError::EmptyExtraction { game });
    }
    Ok(roster)
}
