// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod sources;
pub mod vocab;

pub use sources::{Game, RosterSource};
