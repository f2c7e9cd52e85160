// src/core/net.rs
//
// Page fetching. One GET per call, no retry, no cache.

use std::fs;
use std::path::PathBuf;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::config::options::FetchOptions;
use crate::error::FetchError;

/// Anything that can turn a source URL into an HTML body.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Live HTTP fetcher with the tool's User-Agent and Accept-Language.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        let lang = HeaderValue::from_str(&opts.accept_language)
            .map_err(|_| FetchError::Header { name: "accept-language", value: opts.accept_language.clone() })?;
        headers.insert(ACCEPT_LANGUAGE, lang);

        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .default_headers(headers)
            .timeout(opts.timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport { url: s!(url), source };

        debug!("GET {url}");
        let resp = self.client.get(url).send().map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        let body = resp.text().map_err(transport)?;
        debug!("GET {url} -> {} ({} bytes)", status.as_u16(), body.len());
        Ok(body)
    }
}

/// Serves one saved page regardless of URL, for offline runs against a capture.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FileSource {
    fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}
