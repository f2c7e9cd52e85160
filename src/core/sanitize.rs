// src/core/sanitize.rs
//
// Raw candidate → character name. Steps run in a fixed order:
//   1. cut at the first '(' and trim        "Ellen (S-Rank)" → "Ellen"
//   2. strip the source prefix, if any      "Genshin - Alpha" → "Alpha"
//   3. drop exact vocabulary tokens          "Pyro"
//   4. drop generic banned substrings        "Collab Event Character"
//   5. drop empties

use regex::Regex;

use crate::config::RosterSource;
use crate::config::vocab::{self, Vocabulary};

/// Everything before the first `(`, trimmed.
pub fn strip_annotation(s: &str) -> &str {
    match s.find('(') {
        Some(i) => s[..i].trim(),
        None => s.trim(),
    }
}

pub fn strip_prefix<'a>(s: &'a str, prefix: &Regex) -> &'a str {
    match prefix.find(s) {
        Some(m) => s[m.end()..].trim(),
        None => s,
    }
}

/// Name filter bound to one game's vocabulary and prefix rule.
#[derive(Clone, Copy)]
pub struct NameFilter<'a> {
    vocabulary: &'a Vocabulary,
    prefix: Option<&'a Regex>,
}

impl<'a> NameFilter<'a> {
    pub fn new(vocabulary: &'a Vocabulary, prefix: Option<&'a Regex>) -> Self {
        Self { vocabulary, prefix }
    }

    pub fn for_source(source: &'static RosterSource) -> NameFilter<'static> {
        NameFilter {
            vocabulary: &**source.vocabulary,
            prefix: source.strip_prefix.map(|re| &**re),
        }
    }

    /// Normalize a raw candidate; `None` means rejected.
    pub fn apply(&self, raw: &str) -> Option<String> {
        let mut name = strip_annotation(raw);
        if let Some(re) = self.prefix {
            name = strip_prefix(name, re);
        }
        if self.vocabulary.contains(name) {
            return None;
        }
        if vocab::contains_banned(name) {
            return None;
        }
        if name.is_empty() {
            return None;
        }
        Some(s!(name))
    }
}
