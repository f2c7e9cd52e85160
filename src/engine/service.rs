// src/engine/service.rs
use std::collections::HashMap;
use std::sync::LazyLock;

use log::{debug, error, info, warn};

use super::pipeline;
use crate::config::Game;
use crate::config::options::FetchOptions;
use crate::core::{HttpFetcher, PageSource};
use crate::error::{FetchError, Result, RosterError};
use crate::roster::Roster;

/// Game id → fetch → extract. Holds no per-call state, so one service can
/// serve concurrent lookups.
pub struct RosterService<S> {
    pages: S,
    urls: HashMap<Game, String>,
}

impl<S: PageSource> RosterService<S> {
    pub fn new(pages: S) -> Self {
        Self { pages, urls: HashMap::new() }
    }

    /// Point one game at a different URL (mirror, local stub).
    pub fn with_source_url(mut self, game: Game, url: impl Into<String>) -> Self {
        self.urls.insert(game, url.into());
        self
    }

    pub fn url_for(&self, game: Game) -> &str {
        self.urls.get(&game).map(String::as_str).unwrap_or(game.source().url)
    }

    /// Typed lookup for callers that want the failure cause.
    pub fn try_roster(&self, game: Game) -> Result<Roster> {
        let body = self.pages.fetch(self.url_for(game))?;
        pipeline::extract(&body, game.source())
    }

    /// Never fails: unknown ids, fetch errors and locator misses are all an empty roster.
    pub fn current_roster(&self, id: &str) -> Roster {
        let Some(game) = Game::parse(id) else {
            debug!("unknown game id {id:?}");
            return Roster::new();
        };

        match self.try_roster(game) {
            Ok(roster) => {
                info!("{game}: {} name(s)", roster.len());
                roster
            }
            Err(e @ RosterError::Fetch(_)) => {
                warn!("{game}: {e}");
                Roster::new()
            }
            Err(e) => {
                info!("{e}");
                Roster::new()
            }
        }
    }
}

impl RosterService<HttpFetcher> {
    /// Live service over HTTP.
    pub fn http(opts: &FetchOptions) -> std::result::Result<Self, FetchError> {
        Ok(Self::new(HttpFetcher::new(opts)?))
    }
}

static DEFAULT_SERVICE: LazyLock<Option<RosterService<HttpFetcher>>> =
    LazyLock::new(|| match RosterService::http(&FetchOptions::default()) {
        Ok(svc) => Some(svc),
        Err(e) => {
            error!("{e}");
            None
        }
    });

/// Current rate-up roster for `id` from the live wiki; empty on any failure.
pub fn current_roster(id: &str) -> Vec<String> {
    if Game::parse(id).is_none() {
        debug!("unknown game id {id:?}");
        return Vec::new();
    }
    match DEFAULT_SERVICE.as_ref() {
        Some(svc) => svc.current_roster(id).into_vec(),
        None => Vec::new(),
    }
}
