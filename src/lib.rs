// src/lib.rs
//! Current rate-up ("on banner") character rosters for Genshin Impact,
//! Honkai: Star Rail and Zenless Zone Zero, scraped from their wikis.
//!
//! ```no_run
//! let names = gacha_roster::current_roster("hsr");
//! if names.is_empty() {
//!     // unknown id, network failure, or the page changed: all look the same here
//! }
//! ```

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod log;
pub mod progress;
pub mod roster;
pub mod runner;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Game;
pub use engine::{RosterService, current_roster};
pub use error::{FetchError, RosterError};
pub use roster::Roster;
