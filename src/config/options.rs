// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::error::ConfigError;

/// Everything a run needs. Loaded from `config.toml`, then patched by CLI flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    #[serde(rename = "hvsa")]
    pub scrape: ScrapeOptions,
    pub net: NetOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Load options from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("Config: {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let opts = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Config: loaded {}", path.display());
        Ok(opts)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scrape.year.trim().is_empty() {
            return Err(ConfigError::Empty("hvsa.year"));
        }
        if self.scrape.league.trim().is_empty() {
            return Err(ConfigError::Empty("hvsa.league"));
        }
        if !KNOWN_LEAGUES.contains(&self.scrape.league.trim()) {
            log::warn!("Config: league `{}` is not one of {:?}", self.scrape.league, KNOWN_LEAGUES);
        }
        if self.net.base_url.trim().is_empty() {
            return Err(ConfigError::Empty("net.base_url"));
        }
        Ok(())
    }
}

/// Which championship to read and which parts of it to keep.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    /// Season as printed by the site, e.g. `2024/25`.
    pub year: String,
    /// Championship id prefix, e.g. `West`, `Nord`, `HVSA`.
    pub league: String,
    /// Section names to scrape; empty means all sections on the league page.
    pub sections: Vec<String>,
    /// Teams whose game schedule goes into the workbook.
    pub teams: Vec<String>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR.to_string(),
            league: DEFAULT_LEAGUE.to_string(),
            sections: Vec::new(),
            teams: Vec::new(),
        }
    }
}

impl ScrapeOptions {
    pub fn wants_section(&self, name: &str) -> bool {
        self.sections.is_empty() || self.sections.iter().any(|s| s.trim() == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NetOptions {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: TIMEOUT_SECS,
        }
    }
}

impl NetOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    out: PathBuf,
    /// Keep only games the team plays at home.
    pub home_only: bool,
    /// Also save the first team's iCal schedule here.
    pub ics: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE),
            home_only: false,
            ics: None,
        }
    }
}

impl ExportOptions {
    /// Final output path; a directory hint gets the default file name.
    pub fn out_path(&self) -> PathBuf {
        if crate::file::looks_like_dir_hint(&self.out) || self.out.is_dir() {
            self.out.join(DEFAULT_FILE)
        } else if self.out.extension().is_none() {
            self.out.with_extension("ods")
        } else {
            self.out.clone()
        }
    }

    pub fn set_path(&mut self, text: &str) {
        self.out = PathBuf::from(crate::file::normalize_separators(text.trim()));
    }
}
