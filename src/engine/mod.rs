// src/engine/mod.rs

pub mod pipeline;
pub mod service;

pub use pipeline::extract;
pub use service::{RosterService, current_roster};
