// src/core/mod.rs

pub mod extract;
pub mod html;
pub mod net;
pub mod sanitize;

pub use net::{FileSource, HttpFetcher, PageSource};
pub use sanitize::NameFilter;
