// src/config/consts.rs

// Sources
pub const GENSHIN_URL: &str = "https://genshin-impact.fandom.com/wiki/Wish";
pub const STARRAIL_URL: &str = "https://honkai-star-rail.fandom.com/wiki/Warp";
pub const ZZZ_URL: &str = "https://zenless-zone-zero.fandom.com/wiki/Signal_Search";

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; gacha_roster/0.3; +banner roster lookup)";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,th;q=0.8";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Locator markers
pub const ZZZ_ROW_HEADER: &str = "Rate-Up Agents";
pub const ZZZ_RANK_MARKER: &str = "(S-Rank)";
pub const ZZZ_MAX_TABLES: usize = 2;

pub const GENSHIN_ROW_HEADER: &str = "5-star Rate Up";

pub const STARRAIL_HEADING: &str = "Warp Banner Dates";
pub const STARRAIL_CURRENT_MARKER: &str = "(Current)";

// Output
pub const DEFAULT_DELIM: char = ',';

// Concurrency
pub const WORKERS: usize = 3;
