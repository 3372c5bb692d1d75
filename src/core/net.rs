// src/core/net.rs

// Blocking HTTP GET, single attempt, fixed timeout.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{blocking::Client, Url};

use crate::config::consts::{LEAGUE_PAGE_PATH, USER_AGENT};
use crate::config::options::NetOptions;
use crate::error::FetchError;

pub struct Fetcher {
    client: Client,
    base: Url,
}

impl Fetcher {
    pub fn new(opts: &NetOptions) -> Result<Self, FetchError> {
        let base = Url::parse(opts.base_url.trim()).map_err(|e| FetchError::Url {
            url: opts.base_url.clone(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(opts.timeout())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve a site-relative href (`/cgi-bin/...`) against the base URL.
    pub fn resolve(&self, href: &str) -> Result<Url, FetchError> {
        resolve(&self.base, href)
    }

    /// `leaguePage?championship=<league>+<year>`, both parts percent-encoded.
    pub fn league_page_url(&self, league: &str, year: &str) -> Result<Url, FetchError> {
        let query = format!(
            "championship={}+{}",
            utf8_percent_encode(league.trim(), NON_ALPHANUMERIC),
            utf8_percent_encode(year.trim(), NON_ALPHANUMERIC),
        );
        let mut url = self.resolve(LEAGUE_PAGE_PATH)?;
        url.set_query(Some(&query));
        Ok(url)
    }

    pub fn get(&self, url: &Url) -> Result<String, FetchError> {
        let resp = self.send(url)?;
        resp.text().map_err(|source| FetchError::Request { url: url.to_string(), source })
    }

    pub fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let resp = self.send(url)?;
        resp.bytes()
            .map(|b| b.to_vec())
            .map_err(|source| FetchError::Request { url: url.to_string(), source })
    }

    fn send(&self, url: &Url) -> Result<reqwest::blocking::Response, FetchError> {
        log::debug!("GET {url}");
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status });
        }
        Ok(resp)
    }
}

pub fn resolve(base: &Url, href: &str) -> Result<Url, FetchError> {
    base.join(href.trim()).map_err(|e| FetchError::Url {
        url: href.to_string(),
        reason: e.to_string(),
    })
}
