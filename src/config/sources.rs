// src/config/sources.rs
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::consts::*;
use super::vocab::{self, Vocabulary};

/// The games with a roster source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Game {
    Genshin,
    StarRail,
    Zzz,
}

impl Game {
    pub const ALL: [Game; 3] = [Game::Genshin, Game::StarRail, Game::Zzz];

    /// Case-insensitive id lookup. Anything unrecognised is `None`, not an error.
    pub fn parse(id: &str) -> Option<Game> {
        match id.trim().to_ascii_lowercase().as_str() {
            "genshin" => Some(Game::Genshin),
            "starrail" | "hsr" => Some(Game::StarRail),
            "zzz" => Some(Game::Zzz),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Game::Genshin => "genshin",
            Game::StarRail => "starrail",
            Game::Zzz => "zzz",
        }
    }

    pub fn source(self) -> &'static RosterSource {
        match self {
            Game::Genshin => &GENSHIN_SOURCE,
            Game::StarRail => &STARRAIL_SOURCE,
            Game::Zzz => &ZZZ_SOURCE,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Static per-game configuration. Built once, never mutated.
#[derive(Debug)]
pub struct RosterSource {
    pub game: Game,
    pub url: &'static str,
    pub vocabulary: &'static LazyLock<Vocabulary>,
    /// Source-specific leading prefix on raw candidates (Genshin alt text: "Genshin - Name").
    pub strip_prefix: Option<&'static LazyLock<Regex>>,
}

static GENSHIN_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^genshin[\s-]*").expect("static prefix pattern"));

static GENSHIN_SOURCE: RosterSource = RosterSource {
    game: Game::Genshin,
    url: GENSHIN_URL,
    vocabulary: &vocab::GENSHIN,
    strip_prefix: Some(&GENSHIN_PREFIX),
};

static STARRAIL_SOURCE: RosterSource = RosterSource {
    game: Game::StarRail,
    url: STARRAIL_URL,
    vocabulary: &vocab::STARRAIL,
    strip_prefix: None,
};

static ZZZ_SOURCE: RosterSource = RosterSource {
    game: Game::Zzz,
    url: ZZZ_URL,
    vocabulary: &vocab::ZZZ,
    strip_prefix: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_with_alias() {
        assert_eq!(Game::parse("Genshin"), Some(Game::Genshin));
        assert_eq!(Game::parse("HSR"), Some(Game::StarRail));
        assert_eq!(Game::parse("starrail"), Some(Game::StarRail));
        assert_eq!(Game::parse(" zzz "), Some(Game::Zzz));
        assert_eq!(Game::parse("honkai"), None);
        assert_eq!(Game::parse(""), None);
    }

    #[test]
    fn every_game_has_its_own_source() {
        for game in Game::ALL {
            assert_eq!(game.source().game, game);
        }
        assert!(Game::Genshin.source().strip_prefix.is_some());
        assert!(Game::Zzz.source().strip_prefix.is_none());
    }
}
