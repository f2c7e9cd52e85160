// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// HTTP fetch settings. One `FetchOptions` builds one client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
    pub accept_language: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
            accept_language: s!(ACCEPT_LANGUAGE),
        }
    }
}

impl FetchOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Lines,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Lines => None,
            OutputFormat::Csv => Some(DEFAULT_DELIM),
            OutputFormat::Tsv => Some('\t'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_consts() {
        let o = FetchOptions::default();
        assert_eq!(o.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(o.accept_language, "en-US,en;q=0.9,th;q=0.8");
    }

    #[test]
    fn builder_setters() {
        let o = FetchOptions::default()
            .with_timeout(Duration::from_millis(500))
            .with_user_agent("rostercheck/1.0");
        assert_eq!(o.timeout, Duration::from_millis(500));
        assert_eq!(o.user_agent, "rostercheck/1.0");
    }
}
