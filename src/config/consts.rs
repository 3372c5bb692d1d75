// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://hvsa-handball.liga.nu";
pub const LEAGUE_PAGE_PATH: &str = "/cgi-bin/WebObjects/nuLigaHBDE.woa/wa/leaguePage";
pub const USER_AGENT: &str = concat!("hvsa_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Scrape
pub const DEFAULT_YEAR: &str = "2024/25";
pub const DEFAULT_LEAGUE: &str = "West";
pub const KNOWN_LEAGUES: [&str; 6] = ["MHV", "HVSA", "Anhalt", "Nord", "Süd", "West"];

// Export
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "hvsa.ods";
pub const NO_RESULT: &str = "-:-";
pub const SHEET_NAME_MAX: usize = 31;
